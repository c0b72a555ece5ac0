//! Claim status
//!
//! The status set is closed. Text that names no variant, "Pending" included,
//! is rejected wherever it enters the system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::ValidationError;

/// Lifecycle state of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Lodged and awaiting a decision
    Open,
    /// Accepted for payout
    Approved,
    /// Declined
    Rejected,
}

/// Text that does not name a `ClaimStatus` variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown claim status '{0}', expected one of Open, Approved, Rejected")]
pub struct UnknownClaimStatus(pub String);

impl ClaimStatus {
    /// Every status, in declaration order
    pub const ALL: [ClaimStatus; 3] = [Self::Open, Self::Approved, Self::Rejected];

    /// Returns the stored text form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Parses caller-supplied text, failing with a field-named validation error
    pub fn parse_field(value: &str) -> Result<Self, ValidationError> {
        value
            .parse()
            .map_err(|e: UnknownClaimStatus| ValidationError::new("claim_status", e.to_string()))
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = UnknownClaimStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(Self::Open),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            other => Err(UnknownClaimStatus(other.to_string())),
        }
    }
}
