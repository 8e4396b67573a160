use crate::error::BookResult;
use crate::models::Contact;

/// Repository for persisting contacts.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (CSV file, in-memory mock).
pub trait ContactRepository {
    /// Read every stored contact.
    ///
    /// Problems with individual birthday values are reported and skipped;
    /// anything else aborts the load.
    fn load(&self) -> BookResult<Vec<Contact>>;

    /// Persist the given contacts.
    fn save(&self, contacts: &[&Contact]) -> BookResult<()>;
}
