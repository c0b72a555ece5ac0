//! Custom Test Assertions
//!
//! Assertion helpers for port and validation results that give more
//! meaningful failure messages than a bare `is_err()`.

use std::fmt::Debug;

use core_kernel::{StoreError, ValidationError};

/// Asserts that a store call failed with a foreign-key constraint violation
///
/// # Panics
///
/// Panics if the call succeeded or failed for another reason
pub fn assert_foreign_key_violation<T: Debug>(result: &Result<T, StoreError>) {
    match result {
        Err(e) if e.is_foreign_key_violation() => {}
        other => panic!("Expected a foreign key violation, got {:?}", other),
    }
}

/// Asserts that a store call failed because stored data did not decode
pub fn assert_corrupt_data<T: Debug>(result: &Result<T, StoreError>) {
    match result {
        Err(e) if e.is_corrupt_data() => {}
        other => panic!("Expected corrupt data, got {:?}", other),
    }
}

/// Asserts that a store call was refused for an entity with no id
pub fn assert_missing_identifier<T: Debug>(result: &Result<T, StoreError>) {
    match result {
        Err(StoreError::MissingIdentifier { .. }) => {}
        other => panic!("Expected a missing identifier error, got {:?}", other),
    }
}

/// Asserts that validation failed on the named field
pub fn assert_invalid_field<T: Debug>(result: &Result<T, ValidationError>, field: &str) {
    match result {
        Err(e) => assert_eq!(
            e.field(),
            field,
            "Expected validation of '{}' to fail, but '{}' failed: {}",
            field,
            e.field(),
            e
        ),
        Ok(value) => panic!("Expected '{}' to be rejected, got {:?}", field, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::ConstraintKind;

    #[test]
    fn test_foreign_key_assertion_accepts_violation() {
        let result: Result<(), StoreError> =
            Err(StoreError::constraint(ConstraintKind::ForeignKey, "fk"));
        assert_foreign_key_violation(&result);
    }

    #[test]
    #[should_panic(expected = "Expected a foreign key violation")]
    fn test_foreign_key_assertion_rejects_success() {
        let result: Result<(), StoreError> = Ok(());
        assert_foreign_key_violation(&result);
    }

    #[test]
    fn test_invalid_field_assertion() {
        let result: Result<(), ValidationError> = Err(ValidationError::new("email", "bad"));
        assert_invalid_field(&result, "email");
    }
}
