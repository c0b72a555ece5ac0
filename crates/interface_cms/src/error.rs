//! Startup errors

use thiserror::Error;

use infra_db::DatabaseError;

/// Errors raised while configuring or connecting the system
///
/// Per-operation failures are reported as `core_kernel::StoreError`.
#[derive(Debug, Error)]
pub enum CmsError {
    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The database pool or schema could not be set up
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}
