//! Driving port for creating contacts.

use async_trait::async_trait;

use crate::domain::{Contact, Error};

/// Request to add a validated contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddContactRequest {
    pub contact: Contact,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsCommand: Send + Sync {
    /// Add a contact to its address book.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` when the same name and phone number already exist
    /// in the book and `InternalError` when storage fails.
    async fn add_contact(&self, request: AddContactRequest) -> Result<Contact, Error>;
}
