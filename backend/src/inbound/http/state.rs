//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FeedbackRepository, RegistrationRepository, ReportGenerator};
use crate::inbound::http::auth::AdminAuth;

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Registration store.
    pub registrations: Arc<dyn RegistrationRepository>,
    /// Feedback store.
    pub feedback: Arc<dyn FeedbackRepository>,
    /// Export workbook producer.
    pub report: Arc<dyn ReportGenerator>,
    /// Admin authentication strategy.
    pub auth: Arc<dyn AdminAuth>,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration store.
    pub registrations: Arc<dyn RegistrationRepository>,
    /// Feedback store.
    pub feedback: Arc<dyn FeedbackRepository>,
    /// Export workbook producer.
    pub report: Arc<dyn ReportGenerator>,
    /// Admin authentication strategy.
    pub auth: Arc<dyn AdminAuth>,
    /// Brand prefix used in the export attachment filename.
    pub brand: String,
}

impl HttpState {
    /// Assemble the handler state from its ports and the export brand.
    pub fn new(ports: HttpStatePorts, brand: impl Into<String>) -> Self {
        let HttpStatePorts {
            registrations,
            feedback,
            report,
            auth,
        } = ports;
        Self {
            registrations,
            feedback,
            report,
            auth,
            brand: brand.into(),
        }
    }
}
