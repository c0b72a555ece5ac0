//! Repository implementations for stored entities
//!
//! Each repository owns the SQL for one table and maps rows with
//! `sqlx::FromRow`. Every method runs exactly one auto-committed statement.
//!
//! # Conventions
//!
//! - `insert` returns the key assigned by the `SERIAL` column
//! - `get_by_id` returns `None` when no row matches
//! - `update` and `delete` return whether a row was affected

pub mod claim;
pub mod policy;
pub mod policyholder;

pub use claim::{ClaimRecord, ClaimRepository, ClaimRow};
pub use policy::{PolicyRecord, PolicyRepository, PolicyRow};
pub use policyholder::{PolicyholderRecord, PolicyholderRepository, PolicyholderRow};
