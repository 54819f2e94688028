//! Driven port for contact storage.
//!
//! Adapters return contacts already ordered by name, with the address book
//! identifier breaking ties, so callers can rely on a stable listing order.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::{AddressBookId, Contact};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "contact repository query failed: {message}",
        /// The exact (name, phone number, address book) triple is already stored.
        ContactExists { address_book_id: String } =>
            "contact already exists in address book {address_book_id}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Contacts of one address book. Unknown books yield an empty list.
    async fn list_by_address_book(
        &self,
        address_book_id: &AddressBookId,
    ) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// Contacts belonging to any of `address_book_ids`.
    ///
    /// An empty set yields an empty list without touching storage.
    async fn list_by_address_books(
        &self,
        address_book_ids: &BTreeSet<AddressBookId>,
    ) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// Store `contact` unless the identical triple already exists.
    ///
    /// The existence check and the insert are not atomic; concurrent
    /// identical inserts may both succeed.
    async fn add_contact(&self, contact: &Contact) -> Result<Contact, ContactRepositoryError>;
}
