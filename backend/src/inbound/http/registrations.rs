//! Registration endpoints.
//!
//! ```text
//! POST /api/register       Submit a user or creator registration
//! GET  /api/registrations  Paginated list, newest first (X-API-Key)
//! ```

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{ApiResult, ClientMeta, Error, NewRegistration, UserType};
use crate::inbound::http::auth::require_api_key;
use crate::inbound::http::client_meta::extract_client_meta;
use crate::inbound::http::dto::{PageQuery, SubmissionAccepted};
use crate::inbound::http::error::repository_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::normalize_text;

/// Registration submission body (camelCase transport keys).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// Full name (required).
    pub name: Option<String>,
    /// Email address (required, must contain '@' and '.').
    pub email: Option<String>,
    /// Phone number (required).
    pub phone: Option<String>,
    /// Account category: "USER" or "Creator" (required).
    pub user_type: Option<String>,
    /// Optional self-reported gender.
    pub gender: Option<String>,
    /// Optional self-reported profession.
    pub profession: Option<String>,
}

/// Presence check mirroring the transport field name in the message.
fn require(value: Option<String>, field: &str) -> ApiResult<String> {
    normalize_text(value).ok_or_else(|| Error::invalid_request(format!("{field} is required")))
}

impl RegistrationRequest {
    /// Validate the submission and convert it into a persistence draft.
    ///
    /// Checks run in fixed order (name, email, phone, userType) and the
    /// first failure wins, mirroring the form's field order.
    fn into_new_registration(self, client: ClientMeta) -> ApiResult<NewRegistration> {
        let name = require(self.name, "name")?;
        let email = require(self.email, "email")?;
        let phone = require(self.phone, "phone")?;
        let user_type = require(self.user_type, "userType")?;

        if !email.contains('@') || !email.contains('.') {
            return Err(Error::invalid_request("Please provide a valid email address"));
        }

        let user_type: UserType = user_type
            .parse()
            .map_err(|err: crate::domain::UserTypeParseError| {
                Error::invalid_request(err.to_string())
            })?;

        Ok(NewRegistration {
            name,
            email,
            phone,
            gender: normalize_text(self.gender),
            profession: normalize_text(self.profession),
            user_type,
            client,
        })
    }
}

/// Register a new user or creator.
///
/// # Errors
///
/// - `400 Bad Request`: missing required field, implausible email, or a
///   user type outside the enumeration.
/// - `500 Internal Server Error`: the store rejected the write; the
///   transaction is rolled back.
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegistrationRequest,
    responses(
        (status = 201, description = "Registration stored", body = SubmissionAccepted),
        (status = 400, description = "Invalid submission", body = crate::domain::Error),
        (status = 500, description = "Store failure", body = crate::domain::Error)
    ),
    security([]),
    tags = ["registrations"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Json<RegistrationRequest>,
) -> ApiResult<HttpResponse> {
    let draft = payload
        .into_inner()
        .into_new_registration(extract_client_meta(&req))?;

    let stored = state
        .registrations
        .insert(draft)
        .await
        .map_err(|err| repository_error(&err))?;

    info!(id = stored.id, "registration submitted");

    Ok(HttpResponse::Created().json(SubmissionAccepted {
        message: "Registration submitted successfully".to_owned(),
        id: stored.id,
        submitted_at: stored.submitted_at,
    }))
}

/// List registrations, newest first.
///
/// # Errors
///
/// - `401 Unauthorized`: missing or mismatched `X-API-Key`.
/// - `500 Internal Server Error`: the store could not be read.
#[utoipa::path(
    get,
    path = "/api/registrations",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of registrations, newest first"),
        (status = 401, description = "Missing or invalid API key", body = crate::domain::Error),
        (status = 500, description = "Store failure", body = crate::domain::Error)
    ),
    security(("ApiKeyHeader" = [])),
    tags = ["registrations"],
    operation_id = "listRegistrations"
)]
#[get("/registrations")]
pub async fn list_registrations(
    state: web::Data<HttpState>,
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    require_api_key(&req, state.auth.as_ref())?;

    let page = query.into_inner().into_request();
    let envelope = state
        .registrations
        .list(page)
        .await
        .map_err(|err| repository_error(&err))?;

    Ok(HttpResponse::Ok().json(envelope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::auth::API_KEY_HEADER;
    use crate::inbound::http::test_utils::{TEST_API_KEY, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn creator_registration_returns_id_and_timestamp() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/register")
            .set_json(json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "555-1234",
                "userType": "Creator"
            }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = actix_test::read_body_json(response).await;
        assert!(body["id"].as_i64().is_some_and(|id| id > 0));
        assert!(
            body["submitted_at"]
                .as_str()
                .is_some_and(|ts| ts.contains('T'))
        );
    }

    #[rstest]
    #[case(json!({ "email": "a@b.com", "phone": "1", "userType": "USER" }), "name is required")]
    #[case(json!({ "name": "A", "phone": "1", "userType": "USER" }), "email is required")]
    #[case(json!({ "name": "A", "email": "a@b.com", "userType": "USER" }), "phone is required")]
    #[case(json!({ "name": "A", "email": "a@b.com", "phone": "1" }), "userType is required")]
    #[actix_web::test]
    async fn missing_required_fields_are_named(#[case] payload: Value, #[case] expected: &str) {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/register")
            .set_json(payload)
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], json!(expected));
    }

    #[rstest]
    #[case("Admin")]
    #[case("user")]
    #[case("CREATOR")]
    #[actix_web::test]
    async fn unknown_user_types_are_rejected(#[case] user_type: &str) {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/register")
            .set_json(json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "555-1234",
                "userType": user_type
            }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], json!("User type must be USER or Creator"));
    }

    #[actix_web::test]
    async fn implausible_email_is_rejected() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/register")
            .set_json(json!({
                "name": "Jane Doe",
                "email": "not-an-email",
                "phone": "555-1234",
                "userType": "USER"
            }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], json!("Please provide a valid email address"));
    }

    #[actix_web::test]
    async fn list_reflects_submissions_newest_first() {
        let app = actix_test::init_service(test_app()).await;

        for name in ["Ada", "Grace"] {
            let request = actix_test::TestRequest::post()
                .uri("/api/register")
                .set_json(json!({
                    "name": name,
                    "email": "a@b.com",
                    "phone": "1",
                    "userType": "USER"
                }))
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let request = actix_test::TestRequest::get()
            .uri("/api/registrations")
            .insert_header((API_KEY_HEADER, TEST_API_KEY))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        let items = body["items"].as_array().expect("items list");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], json!("Grace"));
        assert_eq!(items[1]["name"], json!("Ada"));
        assert_eq!(items[0]["user_type"], json!("USER"));
        assert_eq!(items[0]["gender"], Value::Null);
    }

    #[actix_web::test]
    async fn list_rejects_wrong_api_key() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/registrations")
            .insert_header((API_KEY_HEADER, "wrong-key"))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
