//! HTTP server configuration object.

use std::time::Duration;

use contacts::domain::AddressBookIdPolicy;
use contacts::inbound::http::state::DEFAULT_REQUEST_TIMEOUT;
use contacts::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) address_book_ids: AddressBookIdPolicy,
    pub(crate) request_timeout: Duration,
}

impl ServerConfig {
    /// Bind to `host:port` with in-memory storage and default policies.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            db_pool: None,
            address_book_ids: AddressBookIdPolicy::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Attach a database connection pool; contacts are then stored in
    /// PostgreSQL instead of process memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_address_book_id_policy(mut self, policy: AddressBookIdPolicy) -> Self {
        self.address_book_ids = policy;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
