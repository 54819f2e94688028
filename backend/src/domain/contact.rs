//! Contact data model.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::AddressBookId;

/// Maximum number of characters in a contact name.
pub const CONTACT_NAME_MAX: usize = 255;
/// Maximum number of characters in a phone number.
pub const PHONE_NUMBER_MAX: usize = 16;

/// Validation errors raised while building contacts and identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    /// Contact name is empty once trimmed.
    #[error("contact name must not be empty")]
    EmptyName,
    /// Contact name exceeds the storage limit.
    #[error("contact name must be at most {max} characters")]
    NameTooLong { max: usize },
    /// Contact name contains a control character such as NUL.
    #[error("contact name must not contain control characters")]
    NameControlCharacter,
    /// Phone number is empty once trimmed.
    #[error("phone number must not be empty")]
    EmptyPhoneNumber,
    /// Phone number exceeds the storage limit.
    #[error("phone number must be at most {max} characters")]
    PhoneNumberTooLong { max: usize },
    /// Phone number contains a control character such as NUL.
    #[error("phone number must not contain control characters")]
    PhoneNumberControlCharacter,
    /// Address book identifier is empty.
    #[error("address book id must not be empty")]
    EmptyAddressBookId,
    /// Address book identifier has leading or trailing whitespace.
    #[error("address book id must not contain surrounding whitespace")]
    AddressBookIdWhitespace,
    /// Address book identifier exceeds the storage limit.
    #[error("address book id must be at most {max} characters")]
    AddressBookIdTooLong { max: usize },
    /// Address book identifier does not match the configured format.
    #[error("address book id must match {pattern}")]
    AddressBookIdFormat { pattern: String },
}

/// Limits shared by free-text contact fields, with the error each raises.
struct TextRules {
    max: usize,
    empty: ContactValidationError,
    too_long: ContactValidationError,
    control: ContactValidationError,
}

impl TextRules {
    // PostgreSQL text columns cannot hold NUL, so control characters are
    // refused for every backend alike.
    fn check(self, value: String) -> Result<String, ContactValidationError> {
        if value.trim().is_empty() {
            return Err(self.empty);
        }
        if value.chars().count() > self.max {
            return Err(self.too_long);
        }
        if value.chars().any(char::is_control) {
            return Err(self.control);
        }
        Ok(value)
    }
}

/// Contact display name. Compared exactly, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct ContactName(String);

impl ContactName {
    /// Validate and construct a name.
    pub fn new(name: impl Into<String>) -> Result<Self, ContactValidationError> {
        TextRules {
            max: CONTACT_NAME_MAX,
            empty: ContactValidationError::EmptyName,
            too_long: ContactValidationError::NameTooLong {
                max: CONTACT_NAME_MAX,
            },
            control: ContactValidationError::NameControlCharacter,
        }
        .check(name.into())
        .map(Self)
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<ContactName> for String {
    fn from(value: ContactName) -> Self {
        value.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phone number as entered. Only presence, length and control characters
/// are checked.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and construct a phone number.
    pub fn new(phone_number: impl Into<String>) -> Result<Self, ContactValidationError> {
        TextRules {
            max: PHONE_NUMBER_MAX,
            empty: ContactValidationError::EmptyPhoneNumber,
            too_long: ContactValidationError::PhoneNumberTooLong {
                max: PHONE_NUMBER_MAX,
            },
            control: ContactValidationError::PhoneNumberControlCharacter,
        }
        .check(phone_number.into())
        .map(Self)
    }

    /// Borrow the phone number.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a contact for duplicate detection: name plus phone number.
///
/// The two fields are kept apart so no delimiter can make distinct pairs
/// collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactSignature {
    name: ContactName,
    phone_number: PhoneNumber,
}

/// A (name, phone number) pair scoped to one address book.
///
/// ## Serialisation
/// `{"name": "...", "phoneNumber": "...", "addressBookId": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    name: ContactName,
    phone_number: PhoneNumber,
    address_book_id: AddressBookId,
}

impl Contact {
    /// Assemble a contact from validated parts.
    pub fn new(
        name: ContactName,
        phone_number: PhoneNumber,
        address_book_id: AddressBookId,
    ) -> Self {
        Self {
            name,
            phone_number,
            address_book_id,
        }
    }

    /// Validate raw strings and assemble a contact.
    ///
    /// Only the structural identifier rules apply here; format policies are
    /// enforced where identifiers enter the system.
    ///
    /// # Examples
    /// ```
    /// use contacts::domain::Contact;
    ///
    /// let contact = Contact::try_from_strings("Gerald", "0441", "work").expect("valid contact");
    /// assert_eq!(contact.name().as_str(), "Gerald");
    /// ```
    pub fn try_from_strings(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        address_book_id: impl Into<String>,
    ) -> Result<Self, ContactValidationError> {
        Ok(Self::new(
            ContactName::new(name)?,
            PhoneNumber::new(phone_number)?,
            AddressBookId::new(address_book_id)?,
        ))
    }

    /// Contact name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Contact phone number.
    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// Owning address book.
    pub fn address_book_id(&self) -> &AddressBookId {
        &self.address_book_id
    }

    /// Duplicate-detection identity, ignoring the address book.
    pub fn signature(&self) -> ContactSignature {
        ContactSignature {
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", ContactValidationError::EmptyName)]
    #[case("   ", ContactValidationError::EmptyName)]
    fn blank_names_are_rejected(#[case] raw: &str, #[case] expected: ContactValidationError) {
        assert_eq!(ContactName::new(raw).expect_err("invalid name"), expected);
    }

    #[test]
    fn overlong_names_are_rejected() {
        let err = ContactName::new("a".repeat(CONTACT_NAME_MAX + 1)).expect_err("too long");
        assert_eq!(
            err,
            ContactValidationError::NameTooLong {
                max: CONTACT_NAME_MAX
            }
        );
        assert!(ContactName::new("a".repeat(CONTACT_NAME_MAX)).is_ok());
    }

    #[rstest]
    #[case("", ContactValidationError::EmptyPhoneNumber)]
    #[case(
        "+61 400 000 000 000",
        ContactValidationError::PhoneNumberTooLong { max: PHONE_NUMBER_MAX }
    )]
    fn phone_numbers_are_bounded(#[case] raw: &str, #[case] expected: ContactValidationError) {
        assert_eq!(PhoneNumber::new(raw).expect_err("invalid phone"), expected);
    }

    #[rstest]
    #[case("Ann\u{0}")]
    #[case("Ann\nBo")]
    #[case("\u{7f}Ann")]
    fn control_characters_are_rejected(#[case] raw: &str) {
        assert_eq!(
            ContactName::new(raw).expect_err("control character in name"),
            ContactValidationError::NameControlCharacter
        );
        assert_eq!(
            PhoneNumber::new(raw).expect_err("control character in phone"),
            ContactValidationError::PhoneNumberControlCharacter
        );
    }

    #[test]
    fn phone_numbers_are_not_normalised() {
        let phone = PhoneNumber::new("(04) 41-000").expect("valid phone");
        assert_eq!(phone.as_str(), "(04) 41-000");
    }

    #[test]
    fn signature_ignores_address_book() {
        let a = Contact::try_from_strings("Gerald", "0441", "a").expect("valid contact");
        let b = Contact::try_from_strings("Gerald", "0441", "b").expect("valid contact");
        assert_eq!(a.signature(), b.signature());
    }

    #[rstest]
    #[case(("Gerald", "0441"), ("gerald", "0441"))]
    #[case(("Gerald", "0441"), ("Gerald", "0442"))]
    #[case(("a:b", "c"), ("a", "b:c"))]
    fn signature_is_exact(#[case] left: (&str, &str), #[case] right: (&str, &str)) {
        let a = Contact::try_from_strings(left.0, left.1, "a").expect("valid contact");
        let b = Contact::try_from_strings(right.0, right.1, "a").expect("valid contact");
        assert_ne!(a.signature(), b.signature());
    }

    #[test]
    fn serialises_with_camel_case_fields() {
        let contact = Contact::try_from_strings("Zetta", "0492", "c").expect("valid contact");
        let value = serde_json::to_value(&contact).expect("serialise contact");
        assert_eq!(
            value,
            serde_json::json!({ "name": "Zetta", "phoneNumber": "0492", "addressBookId": "c" })
        );
    }
}
