//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags and `CONTACTS_*` environment variables, e.g.
//! `CONTACTS_PORT=8080` or `--database-url postgres://...`.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{AddressBookIdPolicy, DEFAULT_ADDRESS_BOOK_ID_PATTERN};
use crate::inbound::http::state::DEFAULT_REQUEST_TIMEOUT;
use crate::outbound::persistence::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_POOL_MAX_SIZE, DEFAULT_POOL_MIN_IDLE, PoolConfig,
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;

/// Settings that load but cannot be served with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("request_timeout_secs must be at least 1")]
    ZeroRequestTimeout,
}

/// Configuration values controlling the contacts server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACTS")]
pub struct ContactsSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL. Without one, contacts live in process memory.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Idle database connections kept open.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a free database connection.
    pub pool_connection_timeout_secs: Option<u64>,
    /// Regular expression accepted address book ids must match.
    pub address_book_id_pattern: Option<String>,
    /// Per-request deadline in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Leave the schema alone at startup even when a database is configured.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl ContactsSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Pool configuration, present only when a database URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url.as_deref().map(|url| {
            PoolConfig::new(url)
                .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
                .with_min_idle(Some(self.pool_min_idle.unwrap_or(DEFAULT_POOL_MIN_IDLE)))
                .with_connection_timeout(
                    self.pool_connection_timeout_secs
                        .map_or(DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs),
                )
        })
    }

    pub fn address_book_id_pattern(&self) -> &str {
        self.address_book_id_pattern
            .as_deref()
            .unwrap_or(DEFAULT_ADDRESS_BOOK_ID_PATTERN)
    }

    /// Compile the configured identifier policy.
    ///
    /// # Errors
    ///
    /// Returns the regex error when the configured pattern does not compile.
    pub fn address_book_id_policy(&self) -> Result<AddressBookIdPolicy, regex::Error> {
        AddressBookIdPolicy::new(self.address_book_id_pattern())
    }

    /// Per-request deadline.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroRequestTimeout`] for a zero deadline,
    /// which would fail every storage call with 503.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self.request_timeout_secs {
            None => Ok(DEFAULT_REQUEST_TIMEOUT),
            Some(0) => Err(SettingsError::ZeroRequestTimeout),
            Some(secs) => Ok(Duration::from_secs(secs)),
        }
    }

    /// Whether pending migrations are applied before serving.
    pub fn run_migrations(&self) -> bool {
        self.database_url.is_some() && !self.skip_migrations
    }
}
