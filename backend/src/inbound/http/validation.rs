//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{AddressBookId, AddressBookIdPolicy, ContactValidationError, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyField,
    TooLong,
    InvalidFormat,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyField => "empty_field",
            ErrorCode::TooLong => "too_long",
            ErrorCode::InvalidFormat => "invalid_format",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const ADDRESS_BOOK_ID_FIELD: FieldName = FieldName::new("addressBookId");
pub(crate) const COMPARE_TO_FIELD: FieldName = FieldName::new("compareTo");
pub(crate) const NAME_FIELD: FieldName = FieldName::new("name");
pub(crate) const PHONE_NUMBER_FIELD: FieldName = FieldName::new("phoneNumber");

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: &str) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value,
            "code": code.as_str(),
        }))
    }

    fn with_index(self, code: ErrorCode, index: usize, value: &str) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "index": index,
            "value": value,
            "code": code.as_str(),
        }))
    }
}

fn code_for(err: &ContactValidationError) -> ErrorCode {
    match err {
        ContactValidationError::EmptyName
        | ContactValidationError::EmptyPhoneNumber
        | ContactValidationError::EmptyAddressBookId => ErrorCode::EmptyField,
        ContactValidationError::NameTooLong { .. }
        | ContactValidationError::PhoneNumberTooLong { .. }
        | ContactValidationError::AddressBookIdTooLong { .. } => ErrorCode::TooLong,
        ContactValidationError::NameControlCharacter
        | ContactValidationError::PhoneNumberControlCharacter
        | ContactValidationError::AddressBookIdWhitespace
        | ContactValidationError::AddressBookIdFormat { .. } => ErrorCode::InvalidFormat,
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

/// Map a field-level domain validation failure to an `invalid_request` error.
pub(crate) fn field_error(field: FieldName, err: &ContactValidationError, value: &str) -> Error {
    let field = field.as_str();
    let code = code_for(err);
    let validation = ValidationError::new(field, format!("{field}: {err}"));
    match code {
        // Oversized input is not echoed back.
        ErrorCode::TooLong => validation.with_code(code),
        _ => validation.with_value(code, value),
    }
}

pub(crate) fn parse_address_book_id(
    value: String,
    field: FieldName,
    policy: &AddressBookIdPolicy,
) -> Result<AddressBookId, Error> {
    AddressBookId::parse(value.as_str(), policy).map_err(|err| field_error(field, &err, &value))
}

/// Parse a comma-separated identifier list.
///
/// Every segment must be a valid identifier; an empty list or an empty
/// segment is rejected, with the offending position in `details.index`.
pub(crate) fn parse_address_book_id_list(
    value: &str,
    field: FieldName,
    policy: &AddressBookIdPolicy,
) -> Result<Vec<AddressBookId>, Error> {
    value
        .split(',')
        .enumerate()
        .map(|(index, segment)| {
            AddressBookId::parse(segment, policy).map_err(|err| {
                let name = field.as_str();
                ValidationError::new(name, format!("{name}[{index}]: {err}")).with_index(
                    code_for(&err),
                    index,
                    segment,
                )
            })
        })
        .collect()
}
