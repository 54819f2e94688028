//! Contacts service entry-point: loads settings, prepares storage, and serves
//! the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use contacts::inbound::http::health::HealthState;
use contacts::outbound::persistence::{DbPool, MigrationError, PoolError, run_pending_migrations};
use contacts::settings::{ContactsSettings, SettingsError};
use server::{ServerConfig, create_server};

/// Failures that stop the service before it starts serving.
#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to load settings: {0}")]
    Settings(String),
    #[error(transparent)]
    InvalidSettings(#[from] SettingsError),
    #[error("invalid address book id pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error("migration task failed: {0}")]
    MigrationTask(String),
}

impl From<StartupError> for std::io::Error {
    fn from(err: StartupError) -> Self {
        std::io::Error::other(err.to_string())
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

async fn migrate(database_url: String) -> Result<(), StartupError> {
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&database_url))
        .await
        .map_err(|err| StartupError::MigrationTask(err.to_string()))??;
    info!(applied, "database schema up to date");
    Ok(())
}

async fn server_config(settings: &ContactsSettings) -> Result<ServerConfig, StartupError> {
    let config = ServerConfig::new(settings.host(), settings.port())
        .with_address_book_id_policy(settings.address_book_id_policy()?)
        .with_request_timeout(settings.request_timeout()?);

    let Some(pool_config) = settings.pool_config() else {
        return Ok(config);
    };
    if settings.run_migrations() {
        migrate(pool_config.database_url().to_owned()).await?;
    }
    let pool = DbPool::new(pool_config).await?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = ContactsSettings::load_from_iter(std::env::args_os())
        .map_err(|err| StartupError::Settings(err.to_string()))?;
    let config = server_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
