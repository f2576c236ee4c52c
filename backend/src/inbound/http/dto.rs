//! Shared request/response shapes used by more than one endpoint.

use chrono::{DateTime, Utc};
use pagination::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Body returned by both submission endpoints on success (201).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmissionAccepted {
    /// Human-readable confirmation.
    pub message: String,
    /// Store-assigned identifier of the new record.
    pub id: i64,
    /// Server-clock submission timestamp, ISO-8601.
    pub submitted_at: DateTime<Utc>,
}

/// Pagination query parameters accepted by the admin list endpoints.
///
/// Out-of-range values are clamped, never rejected: `per_page` is capped at
/// 100 and `page` is floored at 1.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// 1-based page number (default 1).
    pub page: Option<u64>,
    /// Items per page (default 50, maximum 100).
    pub per_page: Option<u64>,
}

impl PageQuery {
    /// Convert into a clamped [`PageRequest`].
    #[must_use]
    pub const fn into_request(self) -> PageRequest {
        PageRequest::from_params(self.page, self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_page_is_clamped_to_the_maximum() {
        let query = PageQuery {
            page: Some(2),
            per_page: Some(500),
        };
        let request = query.into_request();
        assert_eq!(request.page(), 2);
        assert_eq!(request.per_page(), 100);
    }

    #[test]
    fn defaults_apply_when_parameters_are_absent() {
        let request = PageQuery::default().into_request();
        assert_eq!(request.page(), 1);
        assert_eq!(request.per_page(), 50);
    }
}
