//! Name-keyed contact directory.

use super::chunks::Chunks;
use crate::error::{BookError, BookResult};
use crate::models::Contact;
use crate::repositories::{ContactRepository, CsvContactRepository};
use std::collections::BTreeMap;
use std::path::Path;

/// Message shown when a search finds nothing.
pub const NO_MATCHES_MESSAGE: &str = "No matching contacts found.";

/// The in-memory contact book, keyed by contact name.
///
/// Every key equals the name of the contact stored under it. Iteration is in
/// ascending name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDirectory {
    contacts: BTreeMap<String, Contact>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new contact.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateEntry` if a contact with the same name is
    /// already stored. The stored contact is left untouched.
    pub fn add_record(&mut self, contact: Contact) -> BookResult<()> {
        if self.contacts.contains_key(contact.name()) {
            return Err(BookError::DuplicateEntry(contact.name().to_string()));
        }

        tracing::debug!(name = %contact.name(), "Contact added");
        self.contacts.insert(contact.name().to_string(), contact);
        Ok(())
    }

    /// Exact lookup by name.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    /// Exact lookup by name for editing phones or birthdays.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(name)
    }

    /// Remove a contact by name. Removing an unknown name does nothing.
    pub fn delete(&mut self, name: &str) -> Option<Contact> {
        let removed = self.contacts.remove(name);
        if removed.is_some() {
            tracing::debug!(name = %name, "Contact deleted");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.contacts.keys().map(String::as_str)
    }

    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    /// Contacts whose name contains `query` (case-insensitive) or whose phones
    /// contain it (exact substring).
    pub fn matching<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Contact> + 'a {
        let needle = query.to_lowercase();
        self.contacts.iter().filter_map(move |(name, contact)| {
            let name_hit = name.to_lowercase().contains(&needle);
            let phone_hit = contact
                .phones()
                .iter()
                .any(|phone| phone.value().contains(query));
            (name_hit || phone_hit).then_some(contact)
        })
    }

    /// Render every match as a numbered line, or `None` when nothing matches.
    pub fn search_contacts(&self, query: &str) -> Option<String> {
        let result: String = self
            .matching(query)
            .enumerate()
            .map(|(index, contact)| format!("{}. {} \n", index + 1, contact))
            .collect();

        tracing::debug!(query = %query, found = !result.is_empty(), "Search completed");
        (!result.is_empty()).then_some(result)
    }

    /// Rendered blocks of `chunk_size` contacts each.
    ///
    /// A trailing block smaller than `chunk_size` is dropped unless
    /// [`Chunks::with_remainder`] is used.
    pub fn iterate(&self, chunk_size: usize) -> Chunks<'_> {
        Chunks::new(self.contacts.iter(), chunk_size)
    }

    /// Replace the whole directory with the contents of `repo`.
    ///
    /// When a name repeats, the later contact wins. On error the directory is
    /// left unchanged.
    pub fn load_from<R: ContactRepository + ?Sized>(&mut self, repo: &R) -> BookResult<()> {
        let mut contacts = BTreeMap::new();
        for contact in repo.load()? {
            let name = contact.name().to_string();
            if contacts.insert(name.clone(), contact).is_some() {
                tracing::warn!(name = %name, "Contact appears more than once, keeping the last one");
            }
        }

        tracing::debug!(count = contacts.len(), "Contacts loaded");
        self.contacts = contacts;
        Ok(())
    }

    /// Hand every contact to `repo` for saving, in iteration order.
    pub fn save_to<R: ContactRepository + ?Sized>(&self, repo: &R) -> BookResult<()> {
        let contacts: Vec<&Contact> = self.contacts.values().collect();
        repo.save(&contacts)?;
        tracing::debug!(count = contacts.len(), "Contacts saved");
        Ok(())
    }

    /// Append all contacts to the CSV file at `path`.
    pub fn save_to_csv(&self, path: impl AsRef<Path>) -> BookResult<()> {
        self.save_to(&CsvContactRepository::new(path))
    }

    /// Replace the directory with the contacts in the CSV file at `path`.
    pub fn read_csv_file(&mut self, path: impl AsRef<Path>) -> BookResult<()> {
        self.load_from(&CsvContactRepository::new(path))
    }
}
