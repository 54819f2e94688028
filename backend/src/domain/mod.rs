//! Domain primitives, services and ports.
//!
//! Purpose: Define strongly typed contact entities and the use-cases the
//! inbound adapters drive. Types are immutable once validated; serialisation
//! contracts are documented on each type.
//!
//! Public surface:
//! - Contact, ContactName, PhoneNumber, AddressBookId: validated values.
//! - ContactSetReconciler: drops contacts shared between pooled books.
//! - ContactsService: implements the contacts driving ports.
//! - Error, ErrorCode: API error payload and stable identifier.

mod address_book;
mod contact;
mod contacts_service;
pub mod error;
pub mod ports;
mod reconciliation;
mod trace_id;

pub use self::address_book::{
    ADDRESS_BOOK_ID_MAX, AddressBookId, AddressBookIdPolicy, DEFAULT_ADDRESS_BOOK_ID_PATTERN,
    UUID_V4_ADDRESS_BOOK_ID_PATTERN,
};
pub use self::contact::{
    CONTACT_NAME_MAX, Contact, ContactName, ContactSignature, ContactValidationError,
    PHONE_NUMBER_MAX, PhoneNumber,
};
pub use self::contacts_service::ContactsService;
pub use self::error::{Error, ErrorCode};
pub use self::reconciliation::{ContactSetReconciler, reconcile_contacts};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use contacts::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
