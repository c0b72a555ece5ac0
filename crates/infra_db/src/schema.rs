//! Schema bootstrap
//!
//! The three tables are created with `CREATE TABLE IF NOT EXISTS`, so
//! running the bootstrap against an existing database changes nothing.

use sqlx::PgPool;
use tracing::{info, instrument};

use crate::error::DatabaseError;

/// DDL for the policyholders, policies, and claims tables
pub const SCHEMA_SQL: &str = include_str!("../../../migrations/0001_initial_schema.sql");

/// Creates any missing tables
///
/// # Errors
///
/// Returns `DatabaseError::SchemaFailed` if a statement is rejected
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::raw_sql(SCHEMA_SQL)
        .execute(pool)
        .await
        .map_err(|e| match DatabaseError::from(&e) {
            DatabaseError::QueryFailed(msg) => DatabaseError::SchemaFailed(msg),
            other => other,
        })?;

    info!("Database schema ready");
    Ok(())
}
