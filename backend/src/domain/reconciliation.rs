//! Contact set reconciliation across pooled address books.
//!
//! Given contacts pooled from two or more address books, keep only those
//! whose signature occurs exactly once in the pool. Any signature seen twice
//! or more, in any books, is common and dropped entirely. The pass is
//! streaming: partition count and per-book membership are never needed.

use std::collections::{HashMap, HashSet};

use super::{Contact, ContactSignature};

/// Streaming reducer that drops every contact whose signature repeats.
///
/// Survivors keep the order in which they were first seen, so a pool sorted
/// by (name, address book) yields a result sorted the same way.
///
/// # Examples
/// ```
/// use contacts::domain::{Contact, ContactSetReconciler};
///
/// let mut reconciler = ContactSetReconciler::new();
/// reconciler.push(Contact::try_from_strings("Gerald", "0441", "a").expect("contact"));
/// reconciler.push(Contact::try_from_strings("Gerald", "0441", "b").expect("contact"));
/// reconciler.push(Contact::try_from_strings("Zetta", "0492", "c").expect("contact"));
///
/// let unique = reconciler.finish();
/// assert_eq!(unique.len(), 1);
/// assert_eq!(unique[0].name().as_str(), "Zetta");
/// ```
#[derive(Debug, Default)]
pub struct ContactSetReconciler {
    first_seen: HashMap<ContactSignature, usize>,
    duplicated: HashSet<ContactSignature>,
    slots: Vec<Option<Contact>>,
}

impl ContactSetReconciler {
    /// Create an empty reconciler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next pooled contact.
    pub fn push(&mut self, contact: Contact) {
        let signature = contact.signature();
        if let Some(slot) = self.first_seen.remove(&signature) {
            if let Some(entry) = self.slots.get_mut(slot) {
                *entry = None;
            }
            self.duplicated.insert(signature);
        } else if !self.duplicated.contains(&signature) {
            self.first_seen.insert(signature, self.slots.len());
            self.slots.push(Some(contact));
        }
    }

    /// Contacts whose signature occurred exactly once, in first-seen order.
    pub fn finish(self) -> Vec<Contact> {
        self.slots.into_iter().flatten().collect()
    }
}

/// Reduce a pooled sequence to the contacts not shared between its books.
pub fn reconcile_contacts<I>(pool: I) -> Vec<Contact>
where
    I: IntoIterator<Item = Contact>,
{
    let mut reconciler = ContactSetReconciler::new();
    for contact in pool {
        reconciler.push(contact);
    }
    reconciler.finish()
}
