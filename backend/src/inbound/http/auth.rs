//! API-key authentication for the admin read and export endpoints.
//!
//! The check sits behind [`AdminAuth`] so the static shared secret can later
//! be swapped for a real scheme without touching handler logic.

use actix_web::HttpRequest;

use crate::domain::{ApiResult, Error};

/// Header carrying the admin secret on protected endpoints.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Authentication strategy for admin endpoints.
pub trait AdminAuth: Send + Sync {
    /// Check the presented key; `None` means the header was absent or not
    /// valid UTF-8.
    fn verify(&self, presented: Option<&str>) -> ApiResult<()>;
}

/// Static shared-secret strategy comparing against a configured key.
pub struct StaticApiKey {
    secret: String,
}

impl StaticApiKey {
    /// Create a strategy around the configured secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl AdminAuth for StaticApiKey {
    fn verify(&self, presented: Option<&str>) -> ApiResult<()> {
        match presented {
            Some(key) if key == self.secret => Ok(()),
            _ => Err(Error::unauthorized("Unauthorized")),
        }
    }
}

/// Extract the `X-API-Key` header and run it through the strategy.
pub fn require_api_key(req: &HttpRequest, auth: &dyn AdminAuth) -> ApiResult<()> {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    auth.verify(presented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn accepts_the_configured_secret() {
        let auth = StaticApiKey::new("test-key");
        assert!(auth.verify(Some("test-key")).is_ok());
    }

    #[rstest]
    #[case(Some("wrong-key"))]
    #[case(Some(""))]
    #[case(None)]
    fn rejects_missing_or_mismatched_keys(#[case] presented: Option<&str>) {
        let auth = StaticApiKey::new("test-key");
        let err = auth.verify(presented).expect_err("should be rejected");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }
}
