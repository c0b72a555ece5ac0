//! Claims Management Interface
//!
//! The entry point callers use to record policyholders, policies, and
//! claims. `ClaimsManagementSystem` forwards each operation to a single
//! store handle; any implementation of the three domain ports can stand
//! behind it.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cms::{telemetry, ClaimsManagementSystem, CmsConfig};
//!
//! let config = CmsConfig::from_env()?;
//! telemetry::init_tracing(&config.log_level);
//! let cms = ClaimsManagementSystem::connect(&config).await?;
//! let holder = cms.read_policyholder(id).await?;
//! ```

pub mod config;
pub mod error;
pub mod store;
pub mod system;
pub mod telemetry;

pub use config::CmsConfig;
pub use error::CmsError;
pub use store::InsuranceStore;
pub use system::ClaimsManagementSystem;
