//! Application settings resolved once at startup.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Runtime configuration for the intake backend.
///
/// Values resolve from `INTAKE_*` environment variables with CLI and file
/// overrides handled by `ortho_config`. The settings struct is passed
/// explicitly to the components that need it; nothing reads the environment
/// after startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "INTAKE")]
pub struct AppSettings {
    /// PostgreSQL connection URL. Required to start the server.
    pub database_url: Option<String>,
    /// Shared secret expected in the `X-API-Key` header on admin routes.
    /// Required to start the server.
    pub api_key: Option<String>,
    /// Socket address the HTTP listener binds to.
    #[ortho_config(default = String::from("0.0.0.0:8080"))]
    pub bind_addr: String,
    /// Maximum number of pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// Brand label prefixed to export filenames.
    #[ortho_config(default = String::from("intake"))]
    pub brand: String,
}

impl AppSettings {
    /// Database URL, or an error naming the missing variable.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] when no URL is configured.
    pub fn require_database_url(&self) -> std::io::Result<&str> {
        self.database_url
            .as_deref()
            .ok_or_else(|| std::io::Error::other("INTAKE_DATABASE_URL is not set"))
    }

    /// Admin API key, or an error naming the missing variable.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] when no key is configured.
    pub fn require_api_key(&self) -> std::io::Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| std::io::Error::other("INTAKE_API_KEY is not set"))
    }
}
