//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::AdmissionLifecycleService;
use crate::domain::ports::{AdmissionCommand, FixtureAdmissionCommand};
use crate::inbound::http::admissions::{admit_patient, process_discharge};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::persistence::{DieselAdmissionStore, DieselDirectory, DieselRoomRepository};

/// Build the admission command from configuration.
///
/// Uses the Diesel-backed adapters when a pool is available, otherwise falls
/// back to the fixture so wiring tests can run without a database.
fn build_admission_command(config: &ServerConfig) -> Arc<dyn AdmissionCommand> {
    match &config.db_pool {
        Some(pool) => Arc::new(AdmissionLifecycleService::new(
            Arc::new(DieselAdmissionStore::new(pool.clone())),
            Arc::new(DieselRoomRepository::new(pool.clone())),
            Arc::new(DieselDirectory::new(pool.clone())),
        )),
        None => Arc::new(FixtureAdmissionCommand),
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api/v1")
        .service(admit_patient)
        .service(process_discharge);
    let probes = web::scope("/healthz").service(live).service(ready);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(probes);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(build_admission_command(&config)));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
