//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that abort a single contact book operation.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value broke its validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A contact with this name is already stored
    #[error("Record already exists: {0}")]
    DuplicateEntry(String),

    /// The phone (or other item) to edit or remove does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Reading or writing the contact file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The contact file is not valid CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The contact file header lacks a required column
    #[error("Missing column in contact file: {0}")]
    MissingColumn(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
