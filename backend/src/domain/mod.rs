//! Domain entities, errors, and ports.
//!
//! Types here are transport agnostic. Inbound adapters map them to JSON
//! envelopes; outbound adapters map them to database rows and spreadsheet
//! cells. Invariants are documented on each type.

mod client_meta;
mod error;
mod feedback;
pub mod ports;
mod registration;

pub use self::client_meta::ClientMeta;
pub use self::error::{Error, ErrorCode};
pub use self::feedback::{Feedback, NewFeedback};
pub use self::registration::{NewRegistration, Registration, UserType, UserTypeParseError};

/// Convenient result alias for fallible domain operations.
pub type ApiResult<T> = Result<T, Error>;
