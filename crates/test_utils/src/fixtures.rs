//! Pre-built Test Fixtures
//!
//! Ready-to-use entities for common scenarios. Every fixture is valid, not
//! yet persisted, and identical on each call.

use rust_decimal_macros::dec;

use core_kernel::{PolicyId, PolicyholderId};
use domain_claims::{Claim, ClaimStatus, Documents};
use domain_policy::{CoverageDetails, Policy};
use domain_policyholder::{ContactInfo, Policyholder};

/// Fixture for policyholder test data
pub struct PolicyholderFixtures;

impl PolicyholderFixtures {
    /// Jane Doe, 456 Elm St, 5551234567, jane@example.com
    pub fn jane_doe() -> Policyholder {
        Policyholder::new(
            "Jane Doe",
            "456 Elm St",
            ContactInfo::new("5551234567", "jane@example.com").unwrap(),
        )
        .unwrap()
    }

    /// John Smith, 123 Main St, 5559876543, john.smith@example.org
    pub fn john_smith() -> Policyholder {
        Policyholder::new(
            "John Smith",
            "123 Main St",
            ContactInfo::new("5559876543", "john.smith@example.org").unwrap(),
        )
        .unwrap()
    }
}

/// Fixture for policy test data
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// Health policy for 2024 with premium 1200.50 and full coverage
    pub fn health(policyholder_id: PolicyholderId) -> Policy {
        Policy::new(
            policyholder_id,
            "Health",
            "2024-01-01",
            "2024-12-31",
            dec!(1200.50),
            CoverageDetails::new().with("coverage", "Full"),
        )
        .unwrap()
    }

    /// Car policy with a deductible and nested limits
    pub fn car(policyholder_id: PolicyholderId) -> Policy {
        Policy::new(
            policyholder_id,
            "Car",
            "2024-03-15",
            "2025-03-14",
            dec!(845.00),
            CoverageDetails::new()
                .with("coverage", "Comprehensive")
                .with("deductible", 500)
                .with("limits", serde_json::json!({"collision": 25000, "theft": true})),
        )
        .unwrap()
    }
}

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Open claim on 2024-06-01 for 5000.00, "Car accident"
    pub fn car_accident(policy_id: PolicyId) -> Claim {
        Claim::new(
            policy_id,
            "2024-06-01",
            dec!(5000.00),
            ClaimStatus::Open,
            "Car accident",
            Documents::from(vec!["report.pdf".to_string(), "photo.jpg".to_string()]),
        )
        .unwrap()
    }

    /// Approved claim with no documents
    pub fn hospital_stay(policy_id: PolicyId) -> Claim {
        Claim::new(
            policy_id,
            "2024-09-12",
            dec!(2350.75),
            ClaimStatus::Approved,
            "Hospital stay",
            Documents::new(),
        )
        .unwrap()
    }
}
