//! Policyholder Domain
//!
//! A policyholder is the person who owns one or more policies. This crate
//! defines the validated `Policyholder` record, the contact rules applied
//! when one is built, and the `PolicyholderPort` persistence interface.
//!
//! # Example
//!
//! ```rust
//! use domain_policyholder::{ContactInfo, Policyholder};
//!
//! let contact = ContactInfo::new("5551234567", "jane@example.com").unwrap();
//! let holder = Policyholder::new("Jane Doe", "456 Elm St", contact).unwrap();
//! assert!(holder.id().is_none());
//! ```

pub mod policyholder;
pub mod ports;
pub mod validation;

pub use policyholder::{ContactInfo, Policyholder};
pub use ports::PolicyholderPort;
