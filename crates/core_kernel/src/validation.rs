//! Text field rules
//!
//! PostgreSQL refuses the NUL character in `TEXT` and `JSONB` values, so
//! text is checked for it before it reaches the store.

use serde_json::Value;

use crate::error::ValidationError;

/// Rejects text containing a NUL character
pub fn reject_nul(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new(field, "must not contain a NUL character"));
    }
    Ok(())
}

/// Rejects a JSON document with a NUL character in any key or string value
pub fn require_storable_json(field: &'static str, value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::String(s) => reject_nul(field, s),
        Value::Array(items) => items
            .iter()
            .try_for_each(|item| require_storable_json(field, item)),
        Value::Object(map) => map.iter().try_for_each(|(key, item)| {
            reject_nul(field, key)?;
            require_storable_json(field, item)
        }),
        Value::Null | Value::Bool(_) | Value::Number(_) => Ok(()),
    }
}

/// Requires a text field to contain something other than whitespace
///
/// The value is returned as given; surrounding whitespace is not trimmed.
pub fn require_text(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, ValidationError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    reject_nul(field, &value)?;
    Ok(value)
}
