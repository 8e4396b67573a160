//! Contact Book - Main entry point
//!
//! Loads the contact file, prints the contacts in blocks and runs one
//! interactive search.

use anyhow::Result;
use contact_book::prompt::read_search_query;
use contact_book::{Config, ContactDirectory, NO_MATCHES_MESSAGE};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so they never mix with the printed contacts
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut book = ContactDirectory::new();
    if config.contact_file.exists() {
        if let Err(e) = book.read_csv_file(&config.contact_file) {
            error!(
                "Failed to read contact file {}: {}",
                config.contact_file.display(),
                e
            );
            return Err(e.into());
        }
    } else {
        info!(
            "Contact file {} not found, starting with an empty book",
            config.contact_file.display()
        );
    }

    info!("Loaded {} contacts", book.len());

    for block in book.iterate(config.chunk_size).with_remainder() {
        println!("{}", block);
    }

    let query = read_search_query(io::stdin().lock(), io::stdout())?;
    match book.search_contacts(&query) {
        Some(result) => println!("{}", result),
        None => println!("{}", NO_MATCHES_MESSAGE),
    }

    Ok(())
}
