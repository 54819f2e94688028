//! Builders for HTTP state backed by the configured repository.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use contacts::domain::ContactsService;
use contacts::domain::ports::ContactRepository;
use contacts::inbound::http::state::{HttpState, HttpStatePorts};
use contacts::outbound::memory::InMemoryContactRepository;
use contacts::outbound::persistence::DieselContactRepository;

use super::ServerConfig;

fn ports_for<R>(repository: R) -> HttpStatePorts
where
    R: ContactRepository + 'static,
{
    HttpStatePorts::from_service(Arc::new(ContactsService::new(Arc::new(repository))))
}

/// Build handler state, using PostgreSQL when a pool is configured and
/// process memory otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let ports = match &config.db_pool {
        Some(pool) => ports_for(DieselContactRepository::new(pool.clone())),
        None => {
            info!("no database configured; contacts are kept in memory");
            ports_for(InMemoryContactRepository::new())
        }
    };
    web::Data::new(
        HttpState::new(ports)
            .with_address_book_id_policy(config.address_book_ids.clone())
            .with_request_timeout(config.request_timeout),
    )
}
