//! Shared fixtures for handler unit tests.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{
    InMemoryFeedbackRepository, InMemoryRegistrationRepository, ReportGenerator,
};
use crate::inbound::http::auth::StaticApiKey;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::{error, export, feedback, health, registrations};
use crate::outbound::report::ExcelReportGenerator;

pub(crate) const TEST_API_KEY: &str = "test-key";

/// State over empty in-memory stores with the real Excel generator.
fn test_state(report: Option<Arc<dyn ReportGenerator>>) -> HttpState {
    let registration_repo = Arc::new(InMemoryRegistrationRepository::new());
    let feedback_repo = Arc::new(InMemoryFeedbackRepository::new());
    let report = report.unwrap_or_else(|| {
        Arc::new(ExcelReportGenerator::new(
            registration_repo.clone(),
            feedback_repo.clone(),
        ))
    });

    HttpState::new(
        HttpStatePorts {
            registrations: registration_repo,
            feedback: feedback_repo,
            report,
            auth: Arc::new(StaticApiKey::new(TEST_API_KEY)),
        },
        "intake",
    )
}

fn app_for(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(
            web::scope("/api")
                .service(health::health)
                .service(registrations::register)
                .service(registrations::list_registrations)
                .service(feedback::submit_feedback)
                .service(feedback::list_feedback)
                .service(export::download_excel),
        )
        .default_service(web::route().to(error::not_found_default))
}

/// Full application over fresh in-memory stores.
pub(crate) fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    app_for(test_state(None))
}

/// Application with a caller-supplied report generator, for failure paths.
pub(crate) fn test_app_with_report(
    report: Arc<dyn ReportGenerator>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    app_for(test_state(Some(report)))
}
