//! Strongly-typed identifiers for stored entities
//!
//! Keys are assigned by the store (`SERIAL` columns), so every identifier
//! wraps a positive `i32`. Newtypes keep a policy id from being passed where
//! a policyholder id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

macro_rules! define_id {
    ($name:ident, $field:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a key produced by the store without checking it
            pub fn from_raw(value: i32) -> Self {
                Self(value)
            }

            /// Returns the underlying integer key
            pub fn value(&self) -> i32 {
                self.0
            }

            /// Returns the column name used when this id is a foreign key
            pub fn field_name() -> &'static str {
                $field
            }

            /// Re-checks an id that may have been built with `from_raw`
            pub fn validated(self) -> Result<Self, ValidationError> {
                Self::try_from(self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = ValidationError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(ValidationError::new(
                        $field,
                        format!("must be a positive integer, got {}", value),
                    ))
                }
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: i32 = s.trim().parse().map_err(|_| {
                    ValidationError::new($field, format!("'{}' is not an integer", s))
                })?;
                Self::try_from(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> i32 {
                id.0
            }
        }
    };
}

define_id!(PolicyholderId, "policyholder_id");
define_id!(PolicyId, "policy_id");
define_id!(ClaimId, "claim_id");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_rejects_zero() {
        let error = PolicyId::try_from(0).unwrap_err();
        assert_eq!(error.field(), "policy_id");
    }

    #[test]
    fn test_validated_rejects_raw_negative() {
        let error = PolicyholderId::from_raw(-5).validated().unwrap_err();
        assert_eq!(error.field(), "policyholder_id");
        assert_eq!(ClaimId::from_raw(3).validated().unwrap().value(), 3);
    }

    #[test]
    fn test_display_is_bare_integer() {
        assert_eq!(ClaimId::from_raw(42).to_string(), "42");
    }
}
