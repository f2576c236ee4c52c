//! Spreadsheet export endpoint.
//!
//! ```text
//! GET /api/download-excel  Stream the two-sheet workbook (X-API-Key)
//! ```

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, get, web};
use chrono::Utc;
use tracing::{error, info};

use crate::domain::{ApiResult, Error};
use crate::inbound::http::auth::require_api_key;
use crate::inbound::http::state::HttpState;

/// MIME type for `.xlsx` workbooks.
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Download the full data export as an Excel attachment.
///
/// Each invocation renders a fresh snapshot of both tables; a failed
/// generation yields a generic 500, never a partial file.
///
/// # Errors
///
/// - `401 Unauthorized`: missing or mismatched `X-API-Key`.
/// - `500 Internal Server Error`: report generation failed.
#[utoipa::path(
    get,
    path = "/api/download-excel",
    responses(
        (status = 200, description = "XLSX attachment with both sheets"),
        (status = 401, description = "Missing or invalid API key", body = crate::domain::Error),
        (status = 500, description = "Report generation failed", body = crate::domain::Error)
    ),
    security(("ApiKeyHeader" = [])),
    tags = ["export"],
    operation_id = "downloadExcel"
)]
#[get("/download-excel")]
pub async fn download_excel(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    require_api_key(&req, state.auth.as_ref())?;

    let workbook = state.report.generate().await.map_err(|err| {
        error!(error = %err, "excel report generation failed");
        Error::internal("Failed to generate Excel file")
    })?;

    let filename = format!(
        "{}_data_{}.xlsx",
        state.brand,
        Utc::now().format("%Y%m%d_%H%M%S")
    );
    info!(%filename, bytes = workbook.len(), "excel export generated");

    Ok(HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(workbook))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockReportGenerator, ReportError};
    use crate::inbound::http::auth::API_KEY_HEADER;
    use crate::inbound::http::test_utils::{TEST_API_KEY, test_app, test_app_with_report};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::json;
    use std::sync::Arc;

    #[actix_web::test]
    async fn export_requires_api_key() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/download-excel")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn export_streams_an_xlsx_attachment() {
        let app = actix_test::init_service(test_app()).await;

        // Seed one row per table so both sheets carry data.
        let register = actix_test::TestRequest::post()
            .uri("/api/register")
            .set_json(json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "555-1234",
                "userType": "Creator"
            }))
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, register).await.status(),
            StatusCode::CREATED
        );
        let feedback = actix_test::TestRequest::post()
            .uri("/api/feedback")
            .set_json(json!({ "overallSatisfaction": 5 }))
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, feedback).await.status(),
            StatusCode::CREATED
        );

        let request = actix_test::TestRequest::get()
            .uri("/api/download-excel")
            .insert_header((API_KEY_HEADER, TEST_API_KEY))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);
        assert_eq!(content_type.as_deref(), Some(XLSX_CONTENT_TYPE));

        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned)
            .expect("content disposition");
        assert!(disposition.starts_with("attachment; filename=\""));
        assert!(disposition.contains("_data_"));
        assert!(disposition.ends_with(".xlsx\""));

        let body = actix_test::read_body(response).await;
        // XLSX files are ZIP containers; check the magic bytes.
        assert!(body.len() > 4);
        assert_eq!(&body[..2], b"PK");
    }

    #[actix_web::test]
    async fn generation_failure_surfaces_as_generic_500() {
        let mut report = MockReportGenerator::new();
        report
            .expect_generate()
            .returning(|| Err(ReportError::render("worksheet write failed")));

        let app = actix_test::init_service(test_app_with_report(Arc::new(report))).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/download-excel")
            .insert_header((API_KEY_HEADER, TEST_API_KEY))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
    }
}
