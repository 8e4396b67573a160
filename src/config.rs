//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the CSV contact file (default: "contact_list.csv")
    pub contact_file: PathBuf,

    /// Number of contacts printed per block (default: 3)
    pub chunk_size: usize,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: Path of the contact file (default: contact_list.csv)
    /// - `CONTACT_BOOK_CHUNK_SIZE`: Contacts per printed block (default: 3)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(ConfigError::DotenvError(err.to_string()));
            }
        }

        let defaults = Self::default();

        let contact_file = env::var("CONTACT_BOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.contact_file);

        let chunk_size = Self::parse_env_usize("CONTACT_BOOK_CHUNK_SIZE", defaults.chunk_size)?;
        if chunk_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_CHUNK_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            contact_file,
            chunk_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contact_file: PathBuf::from("contact_list.csv"),
            chunk_size: 3,
            log_level: "warn".to_string(),
        }
    }
}
