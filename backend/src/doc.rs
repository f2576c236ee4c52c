//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: every inbound path, the shared request and response
//! schemas, and the `X-API-Key` security scheme guarding the admin routes.
//! Debug builds serve the document at `/api-docs/openapi.json`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode, Feedback, Registration, UserType};
use crate::inbound::http::dto::SubmissionAccepted;
use crate::inbound::http::feedback::{FeedbackRequest, RatingValue};
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::registrations::RegistrationRequest;

/// Enrich the generated document with the admin API key security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "ApiKeyHeader",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-API-Key",
                "Shared secret required on the admin list and export routes.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Intake backend API",
        description = "Registration and feedback collection with paginated \
                       admin retrieval and Excel export."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::health,
        crate::inbound::http::registrations::register,
        crate::inbound::http::registrations::list_registrations,
        crate::inbound::http::feedback::submit_feedback,
        crate::inbound::http::feedback::list_feedback,
        crate::inbound::http::export::download_excel,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Feedback,
        FeedbackRequest,
        HealthResponse,
        RatingValue,
        Registration,
        RegistrationRequest,
        SubmissionAccepted,
        UserType,
    )),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "registrations", description = "Registration intake and listing"),
        (name = "feedback", description = "Feedback intake and listing"),
        (name = "export", description = "Key-protected Excel export")
    )
)]
pub struct ApiDoc;
