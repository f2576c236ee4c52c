//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain. They exist to satisfy Diesel's type
//! requirements for queries and inserts.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{feedback, user_registrations};

/// Row struct for reading from the user_registrations table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user_registrations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RegistrationRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: Option<String>,
    pub profession: Option<String>,
    pub user_type: String,
    pub submitted_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Insertable struct for creating new registration records.
///
/// `id` and `submitted_at` come from the database defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_registrations)]
pub(crate) struct NewRegistrationRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub gender: Option<&'a str>,
    pub profession: Option<&'a str>,
    pub user_type: &'a str,
    pub ip_address: Option<&'a str>,
    pub user_agent: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Feedback models
// ---------------------------------------------------------------------------

/// Row struct for reading from the feedback table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = feedback)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FeedbackRow {
    pub id: i64,
    pub visual_design: Option<i32>,
    pub ease_of_navigation: Option<i32>,
    pub mobile_responsiveness: Option<i32>,
    pub overall_satisfaction: Option<i32>,
    pub ease_of_tasks: Option<i32>,
    pub quality_of_services: Option<i32>,
    pub visual_design_issue: Option<String>,
    pub ease_of_navigation_issue: Option<String>,
    pub mobile_responsiveness_issue: Option<String>,
    pub overall_satisfaction_issue: Option<String>,
    pub ease_of_tasks_issue: Option<String>,
    pub quality_of_services_issue: Option<String>,
    pub like_most: Option<String>,
    pub improvements: Option<String>,
    pub features: Option<String>,
    pub legal_challenges: Option<String>,
    pub additional_comments: Option<String>,
    pub contact_willing: Option<String>,
    pub contact_email: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Insertable struct for creating new feedback records.
///
/// `id` and `submitted_at` come from the database defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = feedback)]
pub(crate) struct NewFeedbackRow<'a> {
    pub visual_design: Option<i32>,
    pub ease_of_navigation: Option<i32>,
    pub mobile_responsiveness: Option<i32>,
    pub overall_satisfaction: Option<i32>,
    pub ease_of_tasks: Option<i32>,
    pub quality_of_services: Option<i32>,
    pub visual_design_issue: Option<&'a str>,
    pub ease_of_navigation_issue: Option<&'a str>,
    pub mobile_responsiveness_issue: Option<&'a str>,
    pub overall_satisfaction_issue: Option<&'a str>,
    pub ease_of_tasks_issue: Option<&'a str>,
    pub quality_of_services_issue: Option<&'a str>,
    pub like_most: Option<&'a str>,
    pub improvements: Option<&'a str>,
    pub features: Option<&'a str>,
    pub legal_challenges: Option<&'a str>,
    pub additional_comments: Option<&'a str>,
    pub contact_willing: Option<&'a str>,
    pub contact_email: Option<&'a str>,
    pub ip_address: Option<&'a str>,
    pub user_agent: Option<&'a str>,
}
