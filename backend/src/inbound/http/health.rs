//! Health endpoint reporting service status and the current server time.

use actix_web::{HttpResponse, get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Health check response body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Fixed status string; the endpoint only answers when serving traffic.
    pub status: &'static str,
    /// Current server time, ISO-8601.
    pub timestamp: DateTime<Utc>,
}

/// Health check. Returns 200 with the current timestamp while the process
/// is serving traffic.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    security([]),
    tags = ["health"],
    operation_id = "health"
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use serde_json::Value;

    #[actix_web::test]
    async fn health_reports_status_and_timestamp() {
        let app =
            actix_test::init_service(App::new().service(web::scope("/api").service(health))).await;

        let request = actix_test::TestRequest::get().uri("/api/health").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].as_str().is_some_and(|ts| ts.contains('T')));
    }
}
