//! Feedback entity: a stored survey submission.
//!
//! All survey answers are independently optional; the API boundary enforces
//! the cross-field rules (rating range, conditional issue text, contact
//! email) before a record is created.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::ClientMeta;

/// A persisted feedback record.
///
/// Immutable once created and never deleted. Serialises with snake_case keys
/// and `null` for unanswered questions, the shape returned by the admin list
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Feedback {
    /// Store-assigned sequential identifier.
    pub id: i64,
    /// Visual design rating (1-5).
    pub visual_design: Option<i32>,
    /// Navigation ease rating (1-5).
    pub ease_of_navigation: Option<i32>,
    /// Mobile responsiveness rating (1-5).
    pub mobile_responsiveness: Option<i32>,
    /// Overall satisfaction rating (1-5).
    pub overall_satisfaction: Option<i32>,
    /// Task-completion ease rating (1-5).
    pub ease_of_tasks: Option<i32>,
    /// Service quality rating (1-5).
    pub quality_of_services: Option<i32>,
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
    /// Whether the respondent agreed to follow-up contact ("yes"/"no").
    pub contact_willing: Option<String>,
    /// Follow-up contact email, required when `contact_willing` is "yes".
    pub contact_email: Option<String>,
    /// Server-clock timestamp recorded at insert.
    pub submitted_at: DateTime<Utc>,
    /// Submitter IP address, when known.
    pub ip_address: Option<String>,
    /// Submitter user agent, when supplied.
    pub user_agent: Option<String>,
}

/// Validated feedback data awaiting persistence.
///
/// Ratings are already parsed and range-checked; text fields are trimmed
/// with blank submissions normalised to `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewFeedback {
    /// Visual design rating (1-5).
    pub visual_design: Option<i32>,
    /// Navigation ease rating (1-5).
    pub ease_of_navigation: Option<i32>,
    /// Mobile responsiveness rating (1-5).
    pub mobile_responsiveness: Option<i32>,
    /// Overall satisfaction rating (1-5).
    pub overall_satisfaction: Option<i32>,
    /// Task-completion ease rating (1-5).
    pub ease_of_tasks: Option<i32>,
    /// Service quality rating (1-5).
    pub quality_of_services: Option<i32>,
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
    /// Whether the respondent agreed to follow-up contact.
    pub contact_willing: Option<String>,
    /// Follow-up contact email.
    pub contact_email: Option<String>,
    /// Captured request metadata.
    pub client: ClientMeta,
}
