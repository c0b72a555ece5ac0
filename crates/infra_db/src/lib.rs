//! Infrastructure Database Layer
//!
//! This crate persists policyholders, policies, and claims in PostgreSQL
//! using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern. Repositories own the SQL and
//! the `FromRow` row types and report `DatabaseError`. The `PostgresStore`
//! adapter implements the domain ports on top of them, converting entities
//! to rows and database errors to `StoreError`.
//!
//! Queries are built at runtime so the crate compiles without a live
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, ensure_schema, DatabaseConfig, PostgresStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/cms_db")).await?;
//! ensure_schema(&pool).await?;
//! let store = PostgresStore::new(pool);
//! ```

pub mod adapters;
pub mod error;
pub mod pool;
pub mod repositories;
pub mod schema;

pub use adapters::PostgresStore;
pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use schema::{ensure_schema, SCHEMA_SQL};
