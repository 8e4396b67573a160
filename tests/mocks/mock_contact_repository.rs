use contact_book::error::{BookError, BookResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data and tracks method calls for verification.
/// Saved contacts are appended, like the CSV repository does.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_loads: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_loads: Arc::new(Mutex::new(false)),
        }
    }

    /// Add a contact to the mock repository.
    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.push(contact);
    }

    /// Add multiple contacts to the mock repository.
    pub fn add_contacts(&self, contacts_list: Vec<Contact>) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.extend(contacts_list);
    }

    /// Snapshot of everything stored so far.
    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Make every following load fail with a NotFound error.
    pub fn fail_loads(&self) {
        *self.fail_loads.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Clear all contacts from the repository.
    pub fn clear(&self) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn load(&self) -> BookResult<Vec<Contact>> {
        self.track_call("load");

        if *self.fail_loads.lock().unwrap() {
            return Err(BookError::NotFound("mock storage".to_string()));
        }

        Ok(self.contacts.lock().unwrap().clone())
    }

    fn save(&self, contacts: &[&Contact]) -> BookResult<()> {
        self.track_call("save");

        let mut stored = self.contacts.lock().unwrap();
        stored.extend(contacts.iter().map(|contact| (*contact).clone()));
        Ok(())
    }
}
