//! Driving port for spreadsheet report generation.

use async_trait::async_trait;

use super::RepositoryError;

/// Failure raised while producing the export workbook.
///
/// Callers log the cause and surface a generic internal error; a failed
/// generation never yields a partial file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// Reading the source tables failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// Rendering or serialising the workbook failed.
    #[error("report rendering failed: {message}")]
    Render {
        /// Human-readable cause, logged server-side only.
        message: String,
    },
}

impl ReportError {
    /// Create a rendering error with the given message.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}

/// Producer of the two-sheet export workbook.
///
/// Each invocation reads a fresh snapshot of both tables and returns an
/// independent serialised workbook, so concurrent exports do not interfere.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Render the full export workbook into an in-memory buffer.
    async fn generate(&self) -> Result<Vec<u8>, ReportError>;
}
