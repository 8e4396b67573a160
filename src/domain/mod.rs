//! Domain value objects and types.
//!
//! This module contains the validated field wrapper used for contact names and
//! phone numbers, and the per-contact birthday tracker. Phone fields are
//! validated at construction time so an invalid number is never stored.

pub mod birthday;
pub mod errors;
pub mod field;

pub use birthday::{BirthdayTracker, DateStatus};
pub use errors::ValidationError;
pub use field::{Field, FieldKind};
