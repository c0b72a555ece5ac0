//! Policy Domain
//!
//! A policy is an insurance contract owned by a policyholder. This crate
//! defines the validated `Policy` record, its free-form `CoverageDetails`,
//! and the `PolicyPort` persistence interface.
//!
//! The owning policyholder is referenced by id only; whether that id exists
//! is enforced by the store when the policy is written.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::PolicyholderId;
//! use domain_policy::{CoverageDetails, Policy};
//! use rust_decimal::Decimal;
//!
//! let policy = Policy::new(
//!     PolicyholderId::try_from(1).unwrap(),
//!     "Health",
//!     "2024-01-01",
//!     "2024-12-31",
//!     Decimal::new(120050, 2),
//!     CoverageDetails::new().with("coverage", "Full"),
//! )
//! .unwrap();
//! assert_eq!(policy.start_date().to_string(), "2024-01-01");
//! ```

pub mod coverage;
pub mod policy;
pub mod ports;

pub use coverage::CoverageDetails;
pub use policy::Policy;
pub use ports::PolicyPort;
