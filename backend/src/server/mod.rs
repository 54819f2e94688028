//! HTTP server assembly: routes, middleware, state and the listener.

mod config;
mod state_builders;

use std::time::Duration;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use contacts::Trace;
use contacts::inbound::http::contacts::configure as configure_contacts;
use contacts::inbound::http::health::{HealthState, live, ready};
use contacts::inbound::http::ping::ping;
use contacts::inbound::http::state::HttpState;

pub use config::ServerConfig;
use state_builders::build_http_state;

/// Grace period for in-flight requests on shutdown.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Swagger UI and the raw document, mounted in debug builds only.
#[cfg(debug_assertions)]
fn configure_docs(cfg: &mut web::ServiceConfig) {
    use contacts::doc::ApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    cfg.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
}

#[cfg(not(debug_assertions))]
fn configure_docs(_cfg: &mut web::ServiceConfig) {}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
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
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_contacts)
        .configure(configure_docs)
        .service(ping)
        .service(ready)
        .service(live)
}

/// Bind the listener and return the running server.
///
/// `health_state` turns ready once the socket is bound.
///
/// # Errors
/// Returns [`std::io::Error`] when the address cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let app_health = health_state.clone();
    let server = HttpServer::new(move || build_app(app_health.clone(), http_state.clone()))
        .shutdown_timeout(SHUTDOWN_TIMEOUT.as_secs())
        .bind((config.host.as_str(), config.port))?;

    for addr in server.addrs() {
        info!(%addr, "listening");
    }
    health_state.mark_ready();
    Ok(server.run())
}
