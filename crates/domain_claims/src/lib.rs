//! Claims Domain
//!
//! A claim is a request for payout under a policy. This crate defines the
//! validated `Claim` record, the closed `ClaimStatus` enumeration, the
//! ordered `Documents` list, and the `ClaimPort` persistence interface.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::PolicyId;
//! use domain_claims::{Claim, ClaimStatus, Documents};
//! use rust_decimal::Decimal;
//!
//! let claim = Claim::new(
//!     PolicyId::try_from(1).unwrap(),
//!     "2024-06-01",
//!     Decimal::new(500000, 2),
//!     ClaimStatus::Open,
//!     "Car accident",
//!     Documents::from(vec!["report.pdf".to_string()]),
//! )
//! .unwrap();
//! assert_eq!(claim.claim_status().as_str(), "Open");
//! ```

pub mod claim;
pub mod documents;
pub mod ports;
pub mod status;

pub use claim::Claim;
pub use documents::Documents;
pub use ports::ClaimPort;
pub use status::{ClaimStatus, UnknownClaimStatus};
