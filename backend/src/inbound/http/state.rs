//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::AddressBookIdPolicy;
use crate::domain::ports::{ContactsCommand, ContactsQuery};

/// Deadline applied to each port call when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub contacts_query: Arc<dyn ContactsQuery>,
    pub contacts_command: Arc<dyn ContactsCommand>,
}

impl HttpStatePorts {
    /// Use one service for both driving ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ContactsQuery + ContactsCommand + 'static,
    {
        Self {
            contacts_query: service.clone(),
            contacts_command: service,
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts_query: Arc<dyn ContactsQuery>,
    pub contacts_command: Arc<dyn ContactsCommand>,
    pub address_book_ids: AddressBookIdPolicy,
    pub request_timeout: Duration,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state with the default identifier policy and deadline.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use contacts::domain::ContactsService;
    /// use contacts::inbound::http::state::{HttpState, HttpStatePorts};
    /// use contacts::outbound::memory::InMemoryContactRepository;
    ///
    /// let service = Arc::new(ContactsService::new(Arc::new(InMemoryContactRepository::new())));
    /// let state = HttpState::new(HttpStatePorts::from_service(service));
    /// assert_eq!(state.request_timeout.as_secs(), 30);
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            contacts_query,
            contacts_command,
        } = ports;
        Self {
            contacts_query,
            contacts_command,
            address_book_ids: AddressBookIdPolicy::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Replace the accepted address book identifier format.
    #[must_use]
    pub fn with_address_book_id_policy(mut self, policy: AddressBookIdPolicy) -> Self {
        self.address_book_ids = policy;
        self
    }

    /// Replace the per-request deadline.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
