//! Registration entity: a stored user or creator sign-up.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ClientMeta;

/// Enumerated account category for a registration.
///
/// The transport representation keeps the original casing (`USER`,
/// `Creator`); anything else is rejected at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserType {
    /// Regular end user.
    #[serde(rename = "USER")]
    User,
    /// Content creator account.
    Creator,
}

impl UserType {
    /// Transport spelling of the variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Creator => "Creator",
        }
    }
}

/// Error returned when a submitted user type is not part of the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("User type must be USER or Creator")]
pub struct UserTypeParseError;

impl std::str::FromStr for UserType {
    type Err = UserTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "Creator" => Ok(Self::Creator),
            _ => Err(UserTypeParseError),
        }
    }
}

/// A persisted registration record.
///
/// Identity is assigned by the store at insert time; records are immutable
/// thereafter and never deleted. Serialises with snake_case keys, the shape
/// returned by the admin list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Registration {
    /// Store-assigned sequential identifier.
    pub id: i64,
    /// Full name as submitted.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Optional self-reported gender.
    pub gender: Option<String>,
    /// Optional self-reported profession.
    pub profession: Option<String>,
    /// Account category.
    pub user_type: UserType,
    /// Server-clock timestamp recorded at insert.
    pub submitted_at: DateTime<Utc>,
    /// Submitter IP address, when known.
    pub ip_address: Option<String>,
    /// Submitter user agent, when supplied.
    pub user_agent: Option<String>,
}

/// Validated registration data awaiting persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistration {
    /// Full name, trimmed, non-empty.
    pub name: String,
    /// Email address containing '@' and '.'.
    pub email: String,
    /// Phone number, trimmed, non-empty.
    pub phone: String,
    /// Optional gender; blank submissions become `None`.
    pub gender: Option<String>,
    /// Optional profession; blank submissions become `None`.
    pub profession: Option<String>,
    /// Account category.
    pub user_type: UserType,
    /// Captured request metadata.
    pub client: ClientMeta,
}
