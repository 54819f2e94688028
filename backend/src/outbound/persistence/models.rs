//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use super::schema::contacts;

/// Row struct for reading from the contacts table.
///
/// The surrogate `id` column is not selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub address_book_id: String,
    pub name: String,
    pub phone_number: String,
}

/// Insertable struct for creating contact records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub address_book_id: &'a str,
    pub name: &'a str,
    pub phone_number: &'a str,
}
