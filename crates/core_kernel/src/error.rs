//! Validation error shared by every entity constructor

use thiserror::Error;

/// A field failed its invariant while an entity was being constructed or changed
///
/// The error always names the offending field so callers can report it
/// back without parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field}: {message}")]
pub struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    /// Creates a validation error for the given field
    ///
    /// # Arguments
    ///
    /// * `field` - Name of the field as it appears in the entity and the table
    /// * `message` - Human readable description of the violated rule
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Returns the name of the offending field
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the description of the violated rule
    pub fn message(&self) -> &str {
        &self.message
    }
}
