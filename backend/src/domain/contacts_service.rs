//! Contacts domain service.
//!
//! Implements the [`ContactsQuery`] and [`ContactsCommand`] driving ports on
//! top of a [`ContactRepository`]. Owns the "address book not found" rule and
//! the cross-book reconciliation.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error};

use crate::domain::ports::{
    AddContactRequest, ContactRepository, ContactRepositoryError, ContactsCommand, ContactsQuery,
    ListContactsRequest,
};
use crate::domain::{AddressBookId, Contact, Error, reconcile_contacts};

const ADDRESS_BOOK_NOT_FOUND: &str = "Address book not found";
const CONTACT_EXISTS: &str = "Contact already exists";

/// Contacts service implementing the driving ports.
#[derive(Clone)]
pub struct ContactsService<R> {
    repository: Arc<R>,
}

impl<R> ContactsService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> ContactsService<R>
where
    R: ContactRepository,
{
    fn map_repository_error(err: ContactRepositoryError) -> Error {
        match err {
            ContactRepositoryError::ContactExists { address_book_id } => Error::conflict(
                CONTACT_EXISTS,
            )
            .with_details(json!({
                "addressBookId": address_book_id,
                "code": "contact_exists",
            })),
            other => {
                error!(kind = other.kind(), error = %other, "contact repository failure");
                Error::internal(other.to_string())
            }
        }
    }

    fn not_found(address_book_id: &AddressBookId) -> Error {
        Error::not_found(ADDRESS_BOOK_NOT_FOUND).with_details(json!({
            "addressBookId": address_book_id.as_str(),
            "code": "address_book_not_found",
        }))
    }

    async fn list_single(&self, address_book_id: &AddressBookId) -> Result<Vec<Contact>, Error> {
        let contacts = self
            .repository
            .list_by_address_book(address_book_id)
            .await
            .map_err(Self::map_repository_error)?;
        if contacts.is_empty() {
            return Err(Self::not_found(address_book_id));
        }
        Ok(contacts)
    }

    async fn list_compared(
        &self,
        address_book_id: &AddressBookId,
        books: &BTreeSet<AddressBookId>,
    ) -> Result<Vec<Contact>, Error> {
        let pool = self
            .repository
            .list_by_address_books(books)
            .await
            .map_err(Self::map_repository_error)?;
        if !pool
            .iter()
            .any(|contact| contact.address_book_id() == address_book_id)
        {
            return Err(Self::not_found(address_book_id));
        }
        let pooled = pool.len();
        let unique = reconcile_contacts(pool);
        debug!(
            address_book_id = %address_book_id,
            books = books.len(),
            pooled,
            unique = unique.len(),
            "reconciled contact pool"
        );
        Ok(unique)
    }
}

#[async_trait]
impl<R> ContactsQuery for ContactsService<R>
where
    R: ContactRepository,
{
    async fn list_contacts(&self, request: ListContactsRequest) -> Result<Vec<Contact>, Error> {
        let ListContactsRequest {
            address_book_id,
            compare_to,
        } = request;

        let mut books = BTreeSet::new();
        books.insert(address_book_id.clone());
        books.extend(compare_to.into_iter().flatten());

        if books.len() == 1 {
            self.list_single(&address_book_id).await
        } else {
            self.list_compared(&address_book_id, &books).await
        }
    }
}

#[async_trait]
impl<R> ContactsCommand for ContactsService<R>
where
    R: ContactRepository,
{
    async fn add_contact(&self, request: AddContactRequest) -> Result<Contact, Error> {
        let contact = self
            .repository
            .add_contact(&request.contact)
            .await
            .map_err(Self::map_repository_error)?;
        debug!(address_book_id = %contact.address_book_id(), "contact added");
        Ok(contact)
    }
}

#[cfg(test)]
#[path = "contacts_service_tests.rs"]
mod tests;
