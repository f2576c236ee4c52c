//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations here only translate between Diesel row structs
//! and domain types. Row models (`models.rs`) and table definitions
//! (`schema.rs`) are internal to this module and never exposed to the domain.
//! Connections are pooled through `bb8` with native async support from
//! `diesel-async`.

mod diesel_error_mapping;
mod diesel_feedback_repository;
mod diesel_registration_repository;
mod models;
mod pool;
mod schema;

pub use diesel_feedback_repository::DieselFeedbackRepository;
pub use diesel_registration_repository::DieselRegistrationRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
