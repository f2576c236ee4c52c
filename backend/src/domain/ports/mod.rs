//! Domain ports for the hexagonal boundary.
//!
//! Handlers depend on these traits only; production wires Diesel-backed
//! adapters while tests use the deterministic in-memory implementations
//! exported alongside each port.

mod feedback_repository;
mod registration_repository;
mod report_generator;

pub use feedback_repository::{FeedbackRepository, InMemoryFeedbackRepository};
pub use registration_repository::{InMemoryRegistrationRepository, RegistrationRepository};
#[cfg(test)]
pub use report_generator::MockReportGenerator;
pub use report_generator::{ReportError, ReportGenerator};

/// Failure raised by a persistence adapter.
///
/// `Connection` covers pool checkout and transport failures; `Query` covers
/// statement execution and row mapping. Both surface to clients as a generic
/// internal error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The database could not be reached or a connection checkout failed.
    #[error("database connection failed: {message}")]
    Connection {
        /// Human-readable cause, logged server-side only.
        message: String,
    },
    /// A statement failed or a row could not be mapped to the domain.
    #[error("database query failed: {message}")]
    Query {
        /// Human-readable cause, logged server-side only.
        message: String,
    },
}

impl RepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
