//! Driving port for reading contacts.
//!
//! HTTP handlers call [`ContactsQuery`] to list an address book, optionally
//! reduced to the contacts it does not share with other books.

use async_trait::async_trait;

use crate::domain::{AddressBookId, Contact, Error};

/// Listing request for one address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListContactsRequest {
    /// Book whose existence decides between a listing and `NotFound`.
    pub address_book_id: AddressBookId,
    /// Books to compare against. `None` lists the primary book unchanged.
    pub compare_to: Option<Vec<AddressBookId>>,
}

impl ListContactsRequest {
    /// Plain listing without comparison.
    pub fn new(address_book_id: AddressBookId) -> Self {
        Self {
            address_book_id,
            compare_to: None,
        }
    }

    /// Compare the primary book against `others`.
    pub fn compared_to(mut self, others: Vec<AddressBookId>) -> Self {
        self.compare_to = Some(others);
        self
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsQuery: Send + Sync {
    /// List contacts, or the contacts unique across the compared books.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the primary book holds no contacts and
    /// `InternalError` when storage fails.
    async fn list_contacts(&self, request: ListContactsRequest) -> Result<Vec<Contact>, Error>;
}
