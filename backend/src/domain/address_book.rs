//! Address book identifiers and the policy that validates them.
//!
//! An address book is not stored on its own: it exists only as the
//! identifier partitioning contacts. Identifiers are opaque strings whose
//! format is decided by deployment configuration.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::ContactValidationError;

/// Maximum identifier length accepted by the storage column.
pub const ADDRESS_BOOK_ID_MAX: usize = 36;

/// Default identifier pattern: letters, digits, underscores and hyphens.
pub const DEFAULT_ADDRESS_BOOK_ID_PATTERN: &str = "^[A-Za-z0-9_-]{1,36}$";

/// Pattern accepting only version 4 UUIDs.
pub const UUID_V4_ADDRESS_BOOK_ID_PATTERN: &str =
    "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$";

static DEFAULT_PATTERN_RE: OnceLock<Regex> = OnceLock::new();

fn default_pattern_regex() -> &'static Regex {
    DEFAULT_PATTERN_RE.get_or_init(|| {
        Regex::new(DEFAULT_ADDRESS_BOOK_ID_PATTERN)
            .unwrap_or_else(|error| panic!("address book id regex failed to compile: {error}"))
    })
}

/// Identifier of an address book.
///
/// Structural rules (non-empty, no surrounding whitespace, at most
/// [`ADDRESS_BOOK_ID_MAX`] characters) always apply; the format rule comes
/// from an [`AddressBookIdPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct AddressBookId(String);

impl AddressBookId {
    /// Validate structural rules only.
    ///
    /// Storage adapters use this to rebuild identifiers that were validated
    /// on the way in.
    pub fn new(raw: impl Into<String>) -> Result<Self, ContactValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ContactValidationError::EmptyAddressBookId);
        }
        if raw.trim() != raw {
            return Err(ContactValidationError::AddressBookIdWhitespace);
        }
        if raw.chars().count() > ADDRESS_BOOK_ID_MAX {
            return Err(ContactValidationError::AddressBookIdTooLong {
                max: ADDRESS_BOOK_ID_MAX,
            });
        }
        Ok(Self(raw))
    }

    /// Validate structural rules and the configured format.
    ///
    /// # Examples
    /// ```
    /// use contacts::domain::{AddressBookId, AddressBookIdPolicy};
    ///
    /// let policy = AddressBookIdPolicy::default();
    /// assert!(AddressBookId::parse("friends_2024", &policy).is_ok());
    /// assert!(AddressBookId::parse("friends!", &policy).is_err());
    /// ```
    pub fn parse(
        raw: impl Into<String>,
        policy: &AddressBookIdPolicy,
    ) -> Result<Self, ContactValidationError> {
        let id = Self::new(raw)?;
        if !policy.matches(id.as_str()) {
            return Err(ContactValidationError::AddressBookIdFormat {
                pattern: policy.as_str().to_owned(),
            });
        }
        Ok(id)
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for AddressBookId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AddressBookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AddressBookId> for String {
    fn from(value: AddressBookId) -> Self {
        value.0
    }
}

/// Accepted format for address book identifiers.
#[derive(Debug, Clone)]
pub struct AddressBookIdPolicy {
    pattern: Regex,
}

impl AddressBookIdPolicy {
    /// Compile a policy from a regular expression.
    ///
    /// Patterns should be anchored; an unanchored pattern accepts any
    /// identifier containing a match.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(|pattern| Self { pattern })
    }

    /// Policy accepting only version 4 UUIDs.
    pub fn uuid_v4() -> Result<Self, regex::Error> {
        Self::new(UUID_V4_ADDRESS_BOOK_ID_PATTERN)
    }

    /// Whether `candidate` satisfies the policy.
    pub fn matches(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for AddressBookIdPolicy {
    fn default() -> Self {
        Self {
            pattern: default_pattern_regex().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("work")]
    #[case("family_2024")]
    #[case("eff30086-a381-4fd6-ca55-7af017d25825")]
    fn default_policy_accepts_plain_identifiers(#[case] raw: &str) {
        let id = AddressBookId::parse(raw, &AddressBookIdPolicy::default()).expect("valid id");
        assert_eq!(id.as_str(), raw);
    }

    #[rstest]
    #[case("", ContactValidationError::EmptyAddressBookId)]
    #[case(" work", ContactValidationError::AddressBookIdWhitespace)]
    #[case(
        "0123456789012345678901234567890123456",
        ContactValidationError::AddressBookIdTooLong { max: ADDRESS_BOOK_ID_MAX }
    )]
    fn structural_rules_apply_before_the_pattern(
        #[case] raw: &str,
        #[case] expected: ContactValidationError,
    ) {
        let err = AddressBookId::parse(raw, &AddressBookIdPolicy::default()).expect_err("invalid");
        assert_eq!(err, expected);
    }

    #[test]
    fn default_policy_rejects_punctuation() {
        let err = AddressBookId::parse("work;drop", &AddressBookIdPolicy::default())
            .expect_err("invalid id");
        assert!(matches!(
            err,
            ContactValidationError::AddressBookIdFormat { .. }
        ));
    }

    #[test]
    fn uuid_policy_requires_version_four() {
        let policy = AddressBookIdPolicy::uuid_v4().expect("uuid pattern compiles");
        assert!(policy.matches("3fa85f64-5717-4562-b3fc-2c963f66afa6"));
        assert!(!policy.matches("3fa85f64-5717-1562-b3fc-2c963f66afa6"));
        assert!(!policy.matches("friends"));
    }

    #[test]
    fn custom_policy_reports_its_pattern() {
        let policy = AddressBookIdPolicy::new("^book-[0-9]+$").expect("pattern compiles");
        let err = AddressBookId::parse("book-x", &policy).expect_err("invalid id");
        assert_eq!(
            err,
            ContactValidationError::AddressBookIdFormat {
                pattern: "^book-[0-9]+$".to_owned()
            }
        );
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(AddressBookIdPolicy::new("([").is_err());
    }

    #[test]
    fn serialises_as_plain_string() {
        let id = AddressBookId::new("work").expect("valid id");
        assert_eq!(
            serde_json::to_value(&id).expect("serialise"),
            serde_json::json!("work")
        );
    }
}
