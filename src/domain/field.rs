//! Validated field value object.

use super::errors::ValidationError;
use std::fmt;

/// Number of digits a phone number must have.
pub const PHONE_LENGTH: usize = 10;

/// The kind of a [`Field`], which decides the rule its value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text, no validation
    Text,
    /// Exactly ten decimal digits
    Phone,
}

impl FieldKind {
    /// Check `value` against the rule for this kind.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for a `Phone` value that is not
    /// exactly ten ASCII digits.
    pub fn validate(self, value: &str) -> Result<(), ValidationError> {
        match self {
            Self::Text => Ok(()),
            Self::Phone => {
                if value.len() == PHONE_LENGTH && value.chars().all(|c| c.is_ascii_digit()) {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidPhone(value.to_string()))
                }
            }
        }
    }
}

/// A scalar value paired with the rule it was validated against.
///
/// The kind is fixed at construction. The value may change later through
/// [`Field::set_value`], which re-applies the same rule.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, FieldKind};
///
/// let phone = Field::phone("0501234567").unwrap();
/// assert_eq!(phone.kind(), FieldKind::Phone);
/// assert!(Field::phone("050-123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    kind: FieldKind,
    value: String,
}

impl Field {
    /// Create a new field, validating the value for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value breaks the rule for `kind`.
    pub fn new(value: impl Into<String>, kind: FieldKind) -> Result<Self, ValidationError> {
        let value = value.into();
        kind.validate(&value)?;
        Ok(Self { kind, value })
    }

    /// Create a plain text field. Never fails.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Text,
            value: value.into(),
        }
    }

    /// Create a phone field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the value is ten digits.
    pub fn phone(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(value, FieldKind::Phone)
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Get the value as a string slice.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value, re-validating it for this field's kind.
    ///
    /// On failure the old value is kept.
    pub fn set_value(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        self.kind.validate(&value)?;
        self.value = value;
        Ok(())
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
