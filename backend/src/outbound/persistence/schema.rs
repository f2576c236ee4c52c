//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; `diesel print-schema`
//! can regenerate them from a live database after a schema change.

diesel::table! {
    /// Registration submissions.
    ///
    /// Append-only; `id` is a BIGSERIAL primary key and `submitted_at`
    /// defaults to the server clock.
    user_registrations (id) {
        /// Primary key, sequential.
        id -> Int8,
        /// Full name as submitted (max 255 characters).
        name -> Varchar,
        /// Contact email address (max 255 characters).
        email -> Varchar,
        /// Contact phone number (max 20 characters).
        phone -> Varchar,
        /// Optional self-reported gender.
        gender -> Nullable<Varchar>,
        /// Optional self-reported profession.
        profession -> Nullable<Varchar>,
        /// Account category, `USER` or `Creator`.
        user_type -> Varchar,
        /// Insert timestamp.
        submitted_at -> Timestamptz,
        /// Submitter IP in textual form, IPv6-sized.
        ip_address -> Nullable<Varchar>,
        /// Submitter user agent string.
        user_agent -> Nullable<Text>,
    }
}

diesel::table! {
    /// Feedback survey submissions.
    ///
    /// Every answer column is nullable; cross-field rules are enforced at
    /// the API boundary before insert.
    feedback (id) {
        /// Primary key, sequential.
        id -> Int8,
        /// Visual design rating (1-5).
        visual_design -> Nullable<Int4>,
        /// Navigation ease rating (1-5).
        ease_of_navigation -> Nullable<Int4>,
        /// Mobile responsiveness rating (1-5).
        mobile_responsiveness -> Nullable<Int4>,
        /// Overall satisfaction rating (1-5).
        overall_satisfaction -> Nullable<Int4>,
        /// Task-completion ease rating (1-5).
        ease_of_tasks -> Nullable<Int4>,
        /// Service quality rating (1-5).
        quality_of_services -> Nullable<Int4>,
        /// Explanation for a low visual design rating.
        visual_design_issue -> Nullable<Text>,
        /// Explanation for a low navigation rating.
        ease_of_navigation_issue -> Nullable<Text>,
        /// Explanation for a low mobile responsiveness rating.
        mobile_responsiveness_issue -> Nullable<Text>,
        /// Explanation for a low satisfaction rating.
        overall_satisfaction_issue -> Nullable<Text>,
        /// Explanation for a low task-ease rating.
        ease_of_tasks_issue -> Nullable<Text>,
        /// Explanation for a low service quality rating.
        quality_of_services_issue -> Nullable<Text>,
        /// What the respondent liked most.
        like_most -> Nullable<Text>,
        /// Suggested improvements.
        improvements -> Nullable<Text>,
        /// Requested features.
        features -> Nullable<Text>,
        /// Legal challenges the respondent faces.
        legal_challenges -> Nullable<Text>,
        /// Free-form additional comments.
        additional_comments -> Nullable<Text>,
        /// Follow-up consent as submitted (max 10 characters).
        contact_willing -> Nullable<Varchar>,
        /// Follow-up contact email (max 255 characters).
        contact_email -> Nullable<Varchar>,
        /// Insert timestamp.
        submitted_at -> Timestamptz,
        /// Submitter IP in textual form, IPv6-sized.
        ip_address -> Nullable<Varchar>,
        /// Submitter user agent string.
        user_agent -> Nullable<Text>,
    }
}
