//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::{Contact, ContactsService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::InMemoryContactRepository;

/// Parse a contact from raw parts, panicking on invalid fixtures.
pub fn contact(name: &str, phone_number: &str, address_book_id: &str) -> Contact {
    Contact::try_from_strings(name, phone_number, address_book_id).expect("valid fixture contact")
}

/// Handler state over an in-memory repository seeded with `contacts`.
pub fn seeded_state(contacts: Vec<Contact>) -> HttpState {
    let repository = Arc::new(InMemoryContactRepository::with_contacts(contacts));
    HttpState::new(HttpStatePorts::from_service(Arc::new(ContactsService::new(
        repository,
    ))))
}
