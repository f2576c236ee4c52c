//! Server construction and middleware wiring.

mod config;

pub use config::AppSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use utoipa::OpenApi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::auth::StaticApiKey;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::{error, export, feedback, health, registrations};
use crate::middleware::RequestId;
use crate::outbound::persistence::{DbPool, DieselFeedbackRepository, DieselRegistrationRepository};
use crate::outbound::report::ExcelReportGenerator;

/// Assemble the application with all routes and middleware.
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(health::health)
        .service(registrations::register)
        .service(registrations::list_registrations)
        .service(feedback::submit_feedback)
        .service(feedback::list_feedback)
        .service(export::download_excel);

    let app = App::new()
        .app_data(state)
        .wrap(RequestId)
        .service(api)
        .default_service(web::route().to(error::not_found_default));

    #[cfg(debug_assertions)]
    let app = app.route(
        "/api-docs/openapi.json",
        web::get().to(|| async { web::Json(ApiDoc::openapi()) }),
    );

    app
}

/// Wire production adapters into the shared handler state.
fn build_http_state(settings: &AppSettings, pool: DbPool) -> std::io::Result<HttpState> {
    let api_key = settings.require_api_key()?;

    let registrations = Arc::new(DieselRegistrationRepository::new(pool.clone()));
    let feedback = Arc::new(DieselFeedbackRepository::new(pool));
    let report = Arc::new(ExcelReportGenerator::new(
        registrations.clone(),
        feedback.clone(),
    ));

    Ok(HttpState::new(
        HttpStatePorts {
            registrations,
            feedback,
            report,
            auth: Arc::new(StaticApiKey::new(api_key)),
        },
        settings.brand.clone(),
    ))
}

/// Construct an Actix HTTP server bound to the configured address.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when required settings are missing or the
/// socket cannot be bound.
pub fn create_server(settings: &AppSettings, pool: DbPool) -> std::io::Result<Server> {
    let state = web::Data::new(build_http_state(settings, pool)?);
    let bind_addr = settings.bind_addr.clone();

    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(bind_addr)?
        .run();

    Ok(server)
}
