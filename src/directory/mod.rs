//! The contact directory.
//!
//! [`ContactDirectory`] owns every [`Contact`](crate::models::Contact) keyed by
//! name and exposes add/find/delete, free-text search, chunked iteration and
//! bulk load/save through a [`ContactRepository`](crate::repositories::ContactRepository).

mod chunks;
mod contact_directory;

pub use chunks::Chunks;
pub use contact_directory::{ContactDirectory, NO_MATCHES_MESSAGE};
