//! Ports and Adapters Infrastructure
//!
//! Each domain crate defines a port trait listing the persistence operations
//! it needs (`PolicyholderPort`, `PolicyPort`, `ClaimPort`). Adapters such as
//! the PostgreSQL store in `infra_db` or the in-memory store used in tests
//! implement those traits. This module holds what the ports share: the
//! error type, the marker trait and health checking.
//!
//! ```text
//!              ClaimsManagementSystem (facade)
//!                           │
//!                           ▼
//!     PolicyholderPort / PolicyPort / ClaimPort (domain crates)
//!                ▲                          ▲
//!                │                          │
//!        PostgresStore (infra_db)   InMemoryStore (test_utils)
//! ```
//!
//! A missing row is not an error: reads return `Ok(None)` and updates or
//! deletes that match nothing return `Ok(false)`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of store constraint a write violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// A referenced parent row does not exist, or a deleted row is still referenced
    ForeignKey,
    /// A unique key already exists
    Unique,
    /// A column check constraint or the column type rejected the value
    Check,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintKind::ForeignKey => write!(f, "foreign key"),
            ConstraintKind::Unique => write!(f, "unique"),
            ConstraintKind::Check => write!(f, "check"),
        }
    }
}

/// Error type for port operations
///
/// Every adapter reports failures through this type so the facade and its
/// callers handle PostgreSQL and in-memory stores the same way. No variant
/// is retried anywhere in the system.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The write was rolled back because it violated a store constraint
    #[error("Constraint violation ({kind}): {message}")]
    ConstraintViolation {
        kind: ConstraintKind,
        message: String,
    },

    /// The store could not be reached or refused the connection
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A stored row could not be turned back into an entity
    #[error("Corrupt {entity} data: {message}")]
    CorruptData {
        entity: String,
        message: String,
    },

    /// An update was requested for an entity that was never persisted
    #[error("{entity} has no identifier; create it before updating")]
    MissingIdentifier {
        entity: String,
    },

    /// Any other store failure
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StoreError {
    /// Creates a ConstraintViolation error
    pub fn constraint(kind: ConstraintKind, message: impl Into<String>) -> Self {
        StoreError::ConstraintViolation {
            kind,
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        StoreError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a CorruptData error for the given entity type
    pub fn corrupt(entity: impl Into<String>, message: impl fmt::Display) -> Self {
        StoreError::CorruptData {
            entity: entity.into(),
            message: message.to_string(),
        }
    }

    /// Creates a MissingIdentifier error for the given entity type
    pub fn missing_identifier(entity: impl Into<String>) -> Self {
        StoreError::MissingIdentifier {
            entity: entity.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        StoreError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if a store constraint rejected the write
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, StoreError::ConstraintViolation { .. })
    }

    /// Returns true if the write referenced a missing parent or deleted a referenced row
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StoreError::ConstraintViolation {
                kind: ConstraintKind::ForeignKey,
                ..
            }
        )
    }

    /// Returns true if the store could not be reached
    pub fn is_connection_error(&self) -> bool {
        matches!(self, StoreError::Connection { .. })
    }

    /// Returns true if stored content failed to decode
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, StoreError::CorruptData { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared behind `Arc<dyn ...>`, so implementations must be
/// thread-safe.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    /// Returns true if the adapter reported itself healthy
    pub fn is_healthy(&self) -> bool {
        self.status == AdapterHealth::Healthy
    }
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_key_violation_predicates() {
        let error = StoreError::constraint(ConstraintKind::ForeignKey, "policies reference it");
        assert!(error.is_constraint_violation());
        assert!(error.is_foreign_key_violation());
        assert!(!error.is_connection_error());
        assert!(error.to_string().contains("foreign key"));
    }

    #[test]
    fn test_check_violation_is_not_foreign_key() {
        let error = StoreError::constraint(ConstraintKind::Check, "premium_amount");
        assert!(error.is_constraint_violation());
        assert!(!error.is_foreign_key_violation());
    }

    #[test]
    fn test_corrupt_data_message() {
        let error = StoreError::corrupt("Claim", "unknown claim status 'Pending'");
        assert!(error.is_corrupt_data());
        assert_eq!(
            error.to_string(),
            "Corrupt Claim data: unknown claim status 'Pending'"
        );
    }
}
