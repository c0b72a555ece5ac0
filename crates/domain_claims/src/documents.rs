//! Supporting documents attached to a claim
//!
//! Document references are opaque strings (file names, URLs) kept in the
//! order they were attached and stored as one JSON array.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered list of document references
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Documents(Vec<String>);

impl Documents {
    /// Creates an empty document list
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a document reference
    pub fn push(&mut self, document: impl Into<String>) {
        self.0.push(document.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Encodes the list as a JSON array value
    pub fn to_json_value(&self) -> Value {
        Value::Array(self.0.iter().cloned().map(Value::String).collect())
    }

    /// Encodes the list as JSON text
    pub fn to_json_string(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Decodes a stored JSON value, which must be an array of strings
    pub fn from_json_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Decodes stored JSON text, which must be an array of strings
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl From<Vec<String>> for Documents {
    fn from(documents: Vec<String>) -> Self {
        Self(documents)
    }
}

impl FromIterator<String> for Documents {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_is_kept() {
        let docs: Documents = ["report.pdf", "photo.jpg"].iter().map(|s| s.to_string()).collect();
        assert_eq!(docs.to_json_value(), json!(["report.pdf", "photo.jpg"]));
        assert_eq!(docs.iter().collect::<Vec<_>>(), vec!["report.pdf", "photo.jpg"]);
    }

    #[test]
    fn test_decodes_stored_text() {
        let docs = Documents::from_json_str(r#"["a.pdf"]"#).unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_non_array_is_rejected() {
        assert!(Documents::from_json_value(json!({"file": "a.pdf"})).is_err());
        assert!(Documents::from_json_value(json!([1, 2])).is_err());
        assert!(Documents::from_json_str("not json").is_err());
    }

    #[test]
    fn test_structured_entries_are_rejected() {
        let stored = json!([{"name": "a.pdf", "pages": 3}]);
        assert!(Documents::from_json_value(stored).is_err());
        assert!(Documents::from_json_str(r#"["a.pdf", {"name": "b.pdf"}]"#).is_err());
    }

    #[test]
    fn test_empty_list() {
        let docs = Documents::new();
        assert!(docs.is_empty());
        assert_eq!(docs.to_json_string(), "[]");
    }
}
