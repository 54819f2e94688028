//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `backend/migrations`.
//! Regenerate with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Contacts partitioned by address book.
    ///
    /// `id` is a surrogate key never exposed to clients. There is no unique
    /// constraint on (address_book_id, name, phone_number).
    contacts (id) {
        /// Surrogate primary key.
        id -> Int4,
        /// Owning address book (max 36 characters, indexed).
        address_book_id -> Varchar,
        /// Contact name (max 255 characters).
        name -> Varchar,
        /// Phone number as entered (max 16 characters).
        phone_number -> Varchar,
    }
}
