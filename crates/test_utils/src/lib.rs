//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims management test suite.
//!
//! # Modules
//!
//! - `memory`: In-memory implementation of the domain ports
//! - `fixtures`: Pre-built entities for common scenarios
//! - `database`: PostgreSQL test container management
//! - `assertions`: Assertion helpers for port and validation results
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod database;
pub mod fixtures;
pub mod generators;
pub mod memory;

pub use assertions::*;
pub use database::*;
pub use fixtures::*;
pub use generators::*;
pub use memory::InMemoryStore;
