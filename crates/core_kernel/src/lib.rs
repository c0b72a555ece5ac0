//! Core Kernel - Foundational types shared by the claims management crates
//!
//! This crate provides the building blocks used across all domain modules:
//! - Integer identifiers for policyholders, policies and claims
//! - Field rules for text, monetary amounts and ISO calendar dates
//! - The port error type and traits implemented by persistence adapters

pub mod error;
pub mod identifiers;
pub mod money;
pub mod ports;
pub mod temporal;
pub mod validation;

pub use error::ValidationError;
pub use identifiers::{ClaimId, PolicyId, PolicyholderId};
pub use money::require_positive_amount;
pub use ports::{
    AdapterHealth, ConstraintKind, DomainPort, HealthCheckResult, HealthCheckable, StoreError,
};
pub use temporal::{parse_iso_date, ISO_DATE_FORMAT};
pub use validation::{reject_nul, require_storable_json, require_text};
