//! HTTP inbound adapter exposing the REST endpoints.
//!
//! ```text
//! GET  /api/health          Liveness report with current timestamp
//! POST /api/register        Submit a registration
//! POST /api/feedback        Submit a feedback survey
//! GET  /api/feedback        Paginated feedback list (X-API-Key)
//! GET  /api/registrations   Paginated registration list (X-API-Key)
//! GET  /api/download-excel  Two-sheet XLSX export (X-API-Key)
//! ```

pub mod auth;
pub mod client_meta;
pub mod dto;
pub mod error;
pub mod export;
pub mod feedback;
pub mod health;
pub mod registrations;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod validation;

pub use crate::domain::ApiResult;
pub use error::not_found_default;
