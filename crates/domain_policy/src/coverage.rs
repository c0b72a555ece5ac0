//! Coverage details
//!
//! Coverage terms differ per product, so they are kept as an open mapping
//! of string keys to JSON values and stored as a single JSON document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form coverage terms of a policy
///
/// # Example
///
/// ```rust
/// use domain_policy::CoverageDetails;
///
/// let details = CoverageDetails::new()
///     .with("coverage", "Full")
///     .with("deductible", 250);
/// assert_eq!(details.get("coverage").and_then(|v| v.as_str()), Some("Full"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverageDetails(Map<String, Value>);

impl CoverageDetails {
    /// Creates empty coverage details
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts an entry, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns the details as a JSON object value
    pub fn to_json_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Returns the details as JSON text
    pub fn to_json_string(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Decodes stored JSON; anything other than an object is an error
    pub fn from_json_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Decodes stored JSON text; anything other than an object is an error
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl From<Map<String, Value>> for CoverageDetails {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_round_trip() {
        let details = CoverageDetails::new()
            .with("coverage", "Full")
            .with("riders", json!(["dental", "vision"]));

        let text = details.to_json_string();
        assert_eq!(CoverageDetails::from_json_str(&text).unwrap(), details);
    }

    #[test]
    fn test_array_is_not_coverage() {
        assert!(CoverageDetails::from_json_value(json!(["Full"])).is_err());
    }

    #[test]
    fn test_malformed_text_is_error() {
        assert!(CoverageDetails::from_json_str("{\"coverage\": ").is_err());
    }

    #[test]
    fn test_insert_replaces() {
        let mut details = CoverageDetails::new().with("coverage", "Partial");
        let previous = details.insert("coverage", "Full");
        assert_eq!(previous, Some(json!("Partial")));
        assert_eq!(details.len(), 1);
    }
}
