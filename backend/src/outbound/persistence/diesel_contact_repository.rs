//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.

use std::collections::BTreeSet;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, warn};

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{AddressBookId, Contact};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ContactRow, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::contacts;

/// Diesel-backed implementation of the `ContactRepository` port.
///
/// Listings are ordered by name, then address book, then insertion order.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContactRepositoryError {
    map_basic_pool_error(error, |message| ContactRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> ContactRepositoryError {
    map_basic_diesel_error(
        error,
        ContactRepositoryError::query,
        ContactRepositoryError::connection,
    )
}

fn row_to_contact(row: ContactRow) -> Result<Contact, ContactRepositoryError> {
    Contact::try_from_strings(row.name, row.phone_number, row.address_book_id).map_err(|err| {
        warn!(error = %err, "stored contact failed validation");
        ContactRepositoryError::query(format!("stored contact is invalid: {err}"))
    })
}

fn rows_to_contacts(rows: Vec<ContactRow>) -> Result<Vec<Contact>, ContactRepositoryError> {
    rows.into_iter().map(row_to_contact).collect()
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn list_by_address_book(
        &self,
        address_book_id: &AddressBookId,
    ) -> Result<Vec<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ContactRow> = contacts::table
            .filter(contacts::address_book_id.eq(address_book_id.as_str()))
            .order((contacts::name.asc(), contacts::id.asc()))
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_contacts(rows)
    }

    async fn list_by_address_books(
        &self,
        address_book_ids: &BTreeSet<AddressBookId>,
    ) -> Result<Vec<Contact>, ContactRepositoryError> {
        if address_book_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<&str> = address_book_ids.iter().map(AddressBookId::as_str).collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ContactRow> = contacts::table
            .filter(contacts::address_book_id.eq_any(ids))
            .order((
                contacts::name.asc(),
                contacts::address_book_id.asc(),
                contacts::id.asc(),
            ))
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(books = address_book_ids.len(), rows = rows.len(), "pooled contacts");
        rows_to_contacts(rows)
    }

    async fn add_contact(&self, contact: &Contact) -> Result<Contact, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let address_book_id = contact.address_book_id().as_str();
        let name = contact.name().as_str();
        let phone_number = contact.phone_number().as_str();

        let exists: bool = diesel::select(diesel::dsl::exists(
            contacts::table
                .filter(contacts::address_book_id.eq(address_book_id))
                .filter(contacts::name.eq(name))
                .filter(contacts::phone_number.eq(phone_number)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        if exists {
            return Err(ContactRepositoryError::contact_exists(address_book_id));
        }

        let row: ContactRow = diesel::insert_into(contacts::table)
            .values(&NewContactRow {
                address_book_id,
                name,
                phone_number,
            })
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_contact(row)
    }
}
