//! Contact Book - a personal contact manager.
//!
//! Contacts have a name, any number of validated phone numbers and a set of
//! birthdays. They live in an in-memory directory keyed by name, which can be
//! searched, printed in blocks, and saved to or loaded from a CSV file.
//!
//! # Architecture
//!
//! - **domain**: Validated fields and the birthday tracker
//! - **models**: The contact record
//! - **directory**: The name-keyed contact directory with search and chunked iteration
//! - **repositories**: Persistence contract and the CSV implementation
//! - **prompt**: Interactive search query input
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod prompt;
pub mod repositories;

pub use config::Config;
pub use directory::{Chunks, ContactDirectory, NO_MATCHES_MESSAGE};
pub use domain::{BirthdayTracker, DateStatus, Field, FieldKind, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Contact;
pub use repositories::{ContactRepository, CsvContactRepository};
