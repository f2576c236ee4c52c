//! Form intake backend library modules.
//!
//! The crate is arranged hexagonally: `domain` holds entities and port
//! traits, `inbound` the HTTP adapter, `outbound` the PostgreSQL and Excel
//! adapters, and `server` the configuration and bootstrap wiring.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by tooling and the debug document route.
pub use doc::ApiDoc;
pub use middleware::RequestId;
