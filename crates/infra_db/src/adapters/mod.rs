//! Domain Adapters
//!
//! `PostgresStore` implements the policyholder, policy, and claim ports on
//! top of the repositories. Each port lives in its own module; this module
//! holds the shared store handle, health checking, and error translation.
//!
//! # Error Handling
//!
//! Database errors are translated to `StoreError` variants:
//! - foreign key, unique, and check violations -> `StoreError::ConstraintViolation`
//! - connection failures and pool exhaustion -> `StoreError::Connection`
//! - anything else -> `StoreError::Internal`
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::PostgresStore;
//! use domain_policyholder::PolicyholderPort;
//!
//! let store = PostgresStore::new(pool);
//! let policyholder = store.read_policyholder(id).await?;
//! ```

mod claim;
mod policy;
mod policyholder;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::warn;

use core_kernel::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, StoreError};

use crate::error::DatabaseError;
use crate::repositories::{ClaimRepository, PolicyRepository, PolicyholderRepository};

const ADAPTER_ID: &str = "postgres-store";

/// PostgreSQL-backed implementation of the domain ports
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
    policyholders: PolicyholderRepository,
    policies: PolicyRepository,
    claims: ClaimRepository,
}

impl PostgresStore {
    /// Creates a store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            policyholders: PolicyholderRepository::new(pool.clone()),
            policies: PolicyRepository::new(pool.clone()),
            claims: ClaimRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns the underlying connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl DomainPort for PostgresStore {}

#[async_trait]
impl HealthCheckable for PostgresStore {
    /// Performs a simple SELECT 1 query to verify the pool is operational
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
        };

        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

/// Converts a repository error, logging constraint violations
fn db_to_store_error(entity: &'static str, e: DatabaseError) -> StoreError {
    if e.is_constraint_violation() {
        warn!(entity, error = %e, "Write rejected by constraint");
    }
    StoreError::from(e)
}

/// Reports a stored row that no longer decodes to an entity
fn corrupt_row(entity: &'static str, id: i32, detail: impl std::fmt::Display) -> StoreError {
    warn!(entity, id, %detail, "Stored row failed to decode");
    StoreError::corrupt(entity, format!("row {}: {}", id, detail))
}
