//! Calendar date parsing
//!
//! Dates cross the API boundary as ISO `YYYY-MM-DD` strings and are kept as
//! `chrono::NaiveDate`; `NaiveDate`'s `Display` gives the same form back.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// `chrono` format string for ISO calendar dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO `YYYY-MM-DD` date
///
/// Only the zero-padded ten character form is accepted, so `2024-1-1` and
/// dates with surrounding whitespace are rejected.
///
/// # Arguments
///
/// * `field` - Field name reported on failure
/// * `value` - The date text
pub fn parse_iso_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    if value.len() != 10 {
        return Err(ValidationError::new(
            field,
            format!("'{}' is not a YYYY-MM-DD date", value),
        ));
    }
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|e| {
        ValidationError::new(field, format!("'{}' is not a valid calendar date: {}", value, e))
    })
}
