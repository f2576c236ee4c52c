//! Feedback endpoints.
//!
//! ```text
//! POST /api/feedback  Submit a survey response
//! GET  /api/feedback  Paginated list, newest first (X-API-Key)
//! ```

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use pagination::PageEnvelope;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{ApiResult, ClientMeta, Error, Feedback, NewFeedback};
use crate::inbound::http::auth::require_api_key;
use crate::inbound::http::client_meta::extract_client_meta;
use crate::inbound::http::dto::{PageQuery, SubmissionAccepted};
use crate::inbound::http::error::repository_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{normalize_text, validate_feedback};

/// A submitted rating value, accepted as a JSON number or string.
///
/// An empty string counts as unanswered; any other non-integer content,
/// whitespace included, is surfaced by validation as "must be a valid
/// number" rather than a deserialisation failure.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RatingValue {
    /// Rating submitted as a JSON integer.
    Integer(i64),
    /// Rating submitted as a JSON float (never a valid rating).
    Float(f64),
    /// Rating submitted as a string, parsed during validation.
    Text(String),
}

/// Outcome of interpreting a submitted rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParsedRating {
    /// Submitted as an empty string; treated as unanswered.
    Absent,
    /// Present but not an integer.
    Invalid,
    /// Parsed integer value (range not yet checked).
    Value(i64),
}

impl RatingValue {
    pub(crate) fn parse(&self) -> ParsedRating {
        match self {
            Self::Integer(n) => ParsedRating::Value(*n),
            Self::Float(_) => ParsedRating::Invalid,
            Self::Text(s) => {
                if s.is_empty() {
                    ParsedRating::Absent
                } else {
                    s.trim()
                        .parse::<i64>()
                        .map_or(ParsedRating::Invalid, ParsedRating::Value)
                }
            }
        }
    }

    fn as_i32(&self) -> Option<i32> {
        match self.parse() {
            ParsedRating::Value(v) => i32::try_from(v).ok(),
            ParsedRating::Absent | ParsedRating::Invalid => None,
        }
    }
}

/// Feedback survey submission body (camelCase transport keys).
///
/// Every field is independently optional; cross-field rules are enforced by
/// [`validate_feedback`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    /// Visual design rating (1-5).
    pub visual_design: Option<RatingValue>,
    /// Navigation ease rating (1-5).
    pub ease_of_navigation: Option<RatingValue>,
    /// Mobile responsiveness rating (1-5).
    pub mobile_responsiveness: Option<RatingValue>,
    /// Overall satisfaction rating (1-5).
    pub overall_satisfaction: Option<RatingValue>,
    /// Task-completion ease rating (1-5).
    pub ease_of_tasks: Option<RatingValue>,
    /// Service quality rating (1-5).
    pub quality_of_services: Option<RatingValue>,
    /// Explanation for a low visual design rating.
    pub visual_design_issue: Option<String>,
    /// Explanation for a low navigation rating.
    pub ease_of_navigation_issue: Option<String>,
    /// Explanation for a low mobile responsiveness rating.
    pub mobile_responsiveness_issue: Option<String>,
    /// Explanation for a low satisfaction rating.
    pub overall_satisfaction_issue: Option<String>,
    /// Explanation for a low task-ease rating.
    pub ease_of_tasks_issue: Option<String>,
    /// Explanation for a low service quality rating.
    pub quality_of_services_issue: Option<String>,
    /// What the respondent liked most.
    pub like_most: Option<String>,
    /// Suggested improvements.
    pub improvements: Option<String>,
    /// Requested features.
    pub features: Option<String>,
    /// Legal challenges the respondent faces.
    pub legal_challenges: Option<String>,
    /// Free-form additional comments.
    pub additional_comments: Option<String>,
    /// Follow-up consent: "yes" or "no".
    pub contact_willing: Option<String>,
    /// Follow-up contact email.
    pub contact_email: Option<String>,
}

impl FeedbackRequest {
    /// Convert a validated request into a persistence draft.
    ///
    /// Ratings arrive parsed; text fields are trimmed with blanks dropped.
    fn into_new_feedback(self, client: ClientMeta) -> NewFeedback {
        NewFeedback {
            visual_design: self.visual_design.as_ref().and_then(RatingValue::as_i32),
            ease_of_navigation: self
                .ease_of_navigation
                .as_ref()
                .and_then(RatingValue::as_i32),
            mobile_responsiveness: self
                .mobile_responsiveness
                .as_ref()
                .and_then(RatingValue::as_i32),
            overall_satisfaction: self
                .overall_satisfaction
                .as_ref()
                .and_then(RatingValue::as_i32),
            ease_of_tasks: self.ease_of_tasks.as_ref().and_then(RatingValue::as_i32),
            quality_of_services: self
                .quality_of_services
                .as_ref()
                .and_then(RatingValue::as_i32),
            visual_design_issue: normalize_text(self.visual_design_issue),
            ease_of_navigation_issue: normalize_text(self.ease_of_navigation_issue),
            mobile_responsiveness_issue: normalize_text(self.mobile_responsiveness_issue),
            overall_satisfaction_issue: normalize_text(self.overall_satisfaction_issue),
            ease_of_tasks_issue: normalize_text(self.ease_of_tasks_issue),
            quality_of_services_issue: normalize_text(self.quality_of_services_issue),
            like_most: normalize_text(self.like_most),
            improvements: normalize_text(self.improvements),
            features: normalize_text(self.features),
            legal_challenges: normalize_text(self.legal_challenges),
            additional_comments: normalize_text(self.additional_comments),
            contact_willing: normalize_text(self.contact_willing),
            contact_email: normalize_text(self.contact_email),
            client,
        }
    }
}

/// Submit a feedback survey response.
///
/// # Errors
///
/// - `400 Bad Request`: validation failures, listed in order under `details`.
/// - `500 Internal Server Error`: the store rejected the write; the
///   transaction is rolled back.
#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = FeedbackRequest,
    responses(
        (status = 201, description = "Feedback stored", body = SubmissionAccepted),
        (status = 400, description = "Validation failed", body = crate::domain::Error),
        (status = 500, description = "Store failure", body = crate::domain::Error)
    ),
    security([]),
    tags = ["feedback"],
    operation_id = "submitFeedback"
)]
#[post("/feedback")]
pub async fn submit_feedback(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Json<FeedbackRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();

    let errors = validate_feedback(&request);
    if !errors.is_empty() {
        return Err(Error::invalid_request("Validation failed").with_details(json!(errors)));
    }

    let draft = request.into_new_feedback(extract_client_meta(&req));
    let stored = state
        .feedback
        .insert(draft)
        .await
        .map_err(|err| repository_error(&err))?;

    info!(id = stored.id, "feedback submitted");

    Ok(HttpResponse::Created().json(SubmissionAccepted {
        message: "Feedback submitted successfully".to_owned(),
        id: stored.id,
        submitted_at: stored.submitted_at,
    }))
}

/// List feedback submissions, newest first.
///
/// # Errors
///
/// - `401 Unauthorized`: missing or mismatched `X-API-Key`.
/// - `500 Internal Server Error`: the store could not be read.
#[utoipa::path(
    get,
    path = "/api/feedback",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of feedback, newest first"),
        (status = 401, description = "Missing or invalid API key", body = crate::domain::Error),
        (status = 500, description = "Store failure", body = crate::domain::Error)
    ),
    security(("ApiKeyHeader" = [])),
    tags = ["feedback"],
    operation_id = "listFeedback"
)]
#[get("/feedback")]
pub async fn list_feedback(
    state: web::Data<HttpState>,
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    require_api_key(&req, state.auth.as_ref())?;

    let page = query.into_inner().into_request();
    let envelope: PageEnvelope<Feedback> = state
        .feedback
        .list(page)
        .await
        .map_err(|err| repository_error(&err))?;

    Ok(HttpResponse::Ok().json(envelope))
}
