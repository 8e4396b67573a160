//! CSV file storage for contacts.
//!
//! The file has three columns, `Name`, `Phones` and `Birthday`. Multiple phones
//! and birthdays share one cell, joined by `", "`. Birthdays are written as
//! `DD-MM-YYYY`; on read both `D/M/YYYY` and `D-M-YYYY` are accepted.

use super::traits::ContactRepository;
use crate::domain::DateStatus;
use crate::error::{BookError, BookResult};
use crate::models::Contact;
use csv::{ReaderBuilder, WriterBuilder};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

const HEADER: [&str; 3] = ["Name", "Phones", "Birthday"];

/// Separator between values sharing one cell.
const CELL_SEPARATOR: &str = ", ";

static SLASH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)/(\d+)/(\d+)$").unwrap());

static DASH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)-(\d+)-(\d+)$").unwrap());

/// One line of the contact file.
#[derive(Debug, Serialize, Deserialize)]
struct ContactRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Phones", default)]
    phones: String,
    #[serde(rename = "Birthday", default)]
    birthday: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name().to_string(),
            phones: contact
                .phones()
                .iter()
                .map(|phone| phone.value())
                .collect::<Vec<_>>()
                .join(CELL_SEPARATOR),
            birthday: contact.birthdays().format_dates(),
        }
    }
}

impl ContactRow {
    fn into_contact(self) -> BookResult<Contact> {
        let mut contact = Contact::new(self.name);

        for phone in cell_values(&self.phones) {
            contact.add_phone(phone)?;
        }

        for token in cell_values(&self.birthday) {
            let Some(formatted) = normalize_birthday(token) else {
                tracing::warn!(
                    name = %contact.name(),
                    value = %token,
                    "Skipping unreadable birthday"
                );
                continue;
            };

            let status = contact.add_birthday(&formatted);
            if status != DateStatus::Added {
                tracing::warn!(
                    name = %contact.name(),
                    value = %token,
                    "Error adding birthday: {}",
                    status
                );
            }
        }

        Ok(contact)
    }
}

/// Non-empty, trimmed values of a multi-value cell.
fn cell_values(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(',').map(str::trim).filter(|value| !value.is_empty())
}

/// Turn a `D/M/Y` or `D-M-Y` token into `DD.MM.YYYY`.
///
/// Slash-separated input is tried first.
fn normalize_birthday(token: &str) -> Option<String> {
    let caps = SLASH_DATE
        .captures(token)
        .or_else(|| DASH_DATE.captures(token))?;

    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: u32 = caps[3].parse().ok()?;
    Some(format!("{:02}.{:02}.{:04}", day, month, year))
}

/// Contact repository backed by a CSV file.
///
/// Saving appends to the file and writes the header only when the file is
/// empty or new. Loading reads the whole file.
#[derive(Debug, Clone)]
pub struct CsvContactRepository {
    path: PathBuf,
}

impl CsvContactRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactRepository for CsvContactRepository {
    fn load(&self) -> BookResult<Vec<Contact>> {
        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new().from_reader(file);

        let headers = reader.headers()?.clone();
        for column in HEADER {
            if !headers.iter().any(|header| header == column) {
                return Err(BookError::MissingColumn(column));
            }
        }

        let mut contacts = Vec::new();
        for row in reader.deserialize::<ContactRow>() {
            contacts.push(row?.into_contact()?);
        }

        tracing::debug!(
            path = %self.path.display(),
            count = contacts.len(),
            "Read contact file"
        );
        Ok(contacts)
    }

    fn save(&self, contacts: &[&Contact]) -> BookResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let is_empty = file.metadata()?.len() == 0;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if is_empty {
            writer.write_record(HEADER)?;
        }
        for contact in contacts {
            writer.serialize(ContactRow::from(*contact))?;
        }
        writer.flush()?;

        tracing::debug!(
            path = %self.path.display(),
            count = contacts.len(),
            "Appended contacts to file"
        );
        Ok(())
    }
}
