//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_repository;
mod contacts_command;
mod contacts_query;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactRepository, ContactRepositoryError};
#[cfg(test)]
pub use contacts_command::MockContactsCommand;
pub use contacts_command::{AddContactRequest, ContactsCommand};
#[cfg(test)]
pub use contacts_query::MockContactsQuery;
pub use contacts_query::{ContactsQuery, ListContactsRequest};
