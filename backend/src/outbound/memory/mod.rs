//! Process-local contact storage.
//!
//! Backs the contact repository port when no database URL is configured and
//! gives handler tests a real adapter without I/O. Contents are lost when the
//! process exits.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{AddressBookId, Contact};

/// Mutex-guarded vector of contacts in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    store: Mutex<Vec<Contact>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository, keeping duplicates as given.
    ///
    /// # Examples
    /// ```
    /// use contacts::domain::Contact;
    /// use contacts::outbound::memory::InMemoryContactRepository;
    ///
    /// let repo = InMemoryContactRepository::with_contacts(vec![
    ///     Contact::try_from_strings("Zetta", "0492", "work").expect("contact"),
    /// ]);
    /// assert_eq!(repo.len(), 1);
    /// ```
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            store: Mutex::new(contacts),
        }
    }

    /// Number of stored contacts across all books.
    pub fn len(&self) -> usize {
        self.lock().map(|store| store.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Contact>>, ContactRepositoryError> {
        self.store
            .lock()
            .map_err(|_| ContactRepositoryError::query("contact store lock poisoned"))
    }

    fn sorted_where(
        &self,
        keep: impl Fn(&Contact) -> bool,
    ) -> Result<Vec<Contact>, ContactRepositoryError> {
        let mut contacts: Vec<Contact> = self.lock()?.iter().filter(|c| keep(c)).cloned().collect();
        // Stable sort keeps insertion order between identical keys, matching
        // the surrogate-key tie-break of the SQL adapter.
        contacts.sort_by(|a, b| {
            a.name()
                .cmp(b.name())
                .then_with(|| a.address_book_id().cmp(b.address_book_id()))
        });
        Ok(contacts)
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list_by_address_book(
        &self,
        address_book_id: &AddressBookId,
    ) -> Result<Vec<Contact>, ContactRepositoryError> {
        self.sorted_where(|contact| contact.address_book_id() == address_book_id)
    }

    async fn list_by_address_books(
        &self,
        address_book_ids: &BTreeSet<AddressBookId>,
    ) -> Result<Vec<Contact>, ContactRepositoryError> {
        if address_book_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.sorted_where(|contact| address_book_ids.contains(contact.address_book_id()))
    }

    async fn add_contact(&self, contact: &Contact) -> Result<Contact, ContactRepositoryError> {
        let mut store = self.lock()?;
        if store.iter().any(|existing| existing == contact) {
            return Err(ContactRepositoryError::contact_exists(
                contact.address_book_id().as_str(),
            ));
        }
        store.push(contact.clone());
        Ok(contact.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn contact(name: &str, phone: &str, book: &str) -> Contact {
        Contact::try_from_strings(name, phone, book).expect("valid contact")
    }

    fn book(id: &str) -> AddressBookId {
        AddressBookId::new(id).expect("valid id")
    }

    #[fixture]
    fn seeded() -> InMemoryContactRepository {
        InMemoryContactRepository::with_contacts(vec![
            contact("Zetta", "0492", "b"),
            contact("Gerald", "0441", "b"),
            contact("Gerald", "0441", "a"),
            contact("Ann", "01", "c"),
        ])
    }

    #[rstest]
    #[tokio::test]
    async fn lists_one_book_sorted_by_name(seeded: InMemoryContactRepository) {
        let contacts = seeded.list_by_address_book(&book("b")).await.expect("list");
        assert_eq!(
            contacts,
            vec![contact("Gerald", "0441", "b"), contact("Zetta", "0492", "b")]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_book_is_empty(seeded: InMemoryContactRepository) {
        let contacts = seeded
            .list_by_address_book(&book("nobody"))
            .await
            .expect("list");
        assert!(contacts.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn pools_books_sorted_by_name_then_book(seeded: InMemoryContactRepository) {
        let ids: BTreeSet<_> = [book("b"), book("a"), book("missing")].into_iter().collect();
        let contacts = seeded.list_by_address_books(&ids).await.expect("list");
        assert_eq!(
            contacts,
            vec![
                contact("Gerald", "0441", "a"),
                contact("Gerald", "0441", "b"),
                contact("Zetta", "0492", "b"),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn empty_id_set_returns_nothing(seeded: InMemoryContactRepository) {
        let contacts = seeded
            .list_by_address_books(&BTreeSet::new())
            .await
            .expect("list");
        assert!(contacts.is_empty());
    }

    #[tokio::test]
    async fn duplicate_triple_is_rejected_once_stored() {
        let repo = InMemoryContactRepository::new();
        let ann = contact("Ann", "01", "a");
        repo.add_contact(&ann).await.expect("first insert");

        let err = repo.add_contact(&ann).await.expect_err("duplicate");
        assert_eq!(err, ContactRepositoryError::contact_exists("a"));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn same_pair_in_another_book_is_accepted() {
        let repo = InMemoryContactRepository::new();
        repo.add_contact(&contact("Ann", "01", "a"))
            .await
            .expect("first book");
        repo.add_contact(&contact("Ann", "01", "b"))
            .await
            .expect("second book");
        assert_eq!(repo.len(), 2);
    }
}
