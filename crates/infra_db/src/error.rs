//! Database error types
//!
//! Repository calls report `DatabaseError`. PostgreSQL error codes are
//! classified here so that adapters can hand callers a `StoreError` with the
//! right constraint kind.

use thiserror::Error;

use core_kernel::{ConstraintKind, StoreError};

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The server refused a value its column type cannot hold
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Schema bootstrap failed
    #[error("Schema bootstrap failed: {0}")]
    SchemaFailed(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl DatabaseError {
    /// Maps a PostgreSQL SQLSTATE code to an error variant
    ///
    /// # Arguments
    ///
    /// * `code` - Five character SQLSTATE, e.g. "23503"
    /// * `message` - Server message to carry along
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_db::DatabaseError;
    ///
    /// let error = DatabaseError::from_sqlstate("23503", "policies_policyholder_id_fkey");
    /// assert!(matches!(error, DatabaseError::ForeignKeyViolation(_)));
    /// ```
    pub fn from_sqlstate(code: &str, message: impl Into<String>) -> Self {
        // https://www.postgresql.org/docs/current/errcodes-appendix.html
        let message = message.into();
        match code {
            "23505" => DatabaseError::DuplicateEntry(message),
            "23503" => DatabaseError::ForeignKeyViolation(message),
            "23514" => DatabaseError::ConstraintViolation(message),
            // class 22: data exception, e.g. 22021 NUL in TEXT, 22P05 in JSONB
            c if c.starts_with("22") => DatabaseError::InvalidData(message),
            // class 08: connection exception
            c if c.starts_with("08") => DatabaseError::ConnectionFailed(message),
            _ => DatabaseError::QueryFailed(message),
        }
    }

    /// Checks if this error is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::DuplicateEntry(_)
                | DatabaseError::ForeignKeyViolation(_)
                | DatabaseError::ConstraintViolation(_)
                | DatabaseError::InvalidData(_)
        )
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Converts SQLx errors to more specific DatabaseError variants
impl From<&sqlx::Error> for DatabaseError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
                DatabaseError::ConnectionFailed(error.to_string())
            }
            sqlx::Error::Database(db_err) => match db_err.code() {
                Some(code) => DatabaseError::from_sqlstate(code.as_ref(), db_err.message()),
                None => DatabaseError::QueryFailed(db_err.message().to_string()),
            },
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        DatabaseError::from(&error)
    }
}

impl From<DatabaseError> for StoreError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::ForeignKeyViolation(msg) => {
                StoreError::constraint(ConstraintKind::ForeignKey, msg)
            }
            DatabaseError::DuplicateEntry(msg) => StoreError::constraint(ConstraintKind::Unique, msg),
            DatabaseError::ConstraintViolation(msg) | DatabaseError::InvalidData(msg) => {
                StoreError::constraint(ConstraintKind::Check, msg)
            }
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted => {
                StoreError::connection(error.to_string())
            }
            DatabaseError::QueryFailed(_) | DatabaseError::SchemaFailed(_) => {
                StoreError::internal(error.to_string())
            }
        }
    }
}
