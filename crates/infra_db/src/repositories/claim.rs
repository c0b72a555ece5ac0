//! Claim repository implementation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::DatabaseError;

/// Repository for the `claims` table
#[derive(Debug, Clone)]
pub struct ClaimRepository {
    pool: PgPool,
}

impl ClaimRepository {
    /// Creates a new ClaimRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a claim row
    ///
    /// # Returns
    ///
    /// The key assigned by the database
    ///
    /// # Errors
    ///
    /// `DatabaseError::ForeignKeyViolation` when the policy does not exist
    pub async fn insert(&self, record: &ClaimRecord) -> Result<i32, DatabaseError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO claims (
                policy_id, claim_date, claim_amount, claim_status,
                description, documents
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(record.policy_id)
        .bind(record.claim_date)
        .bind(record.claim_amount)
        .bind(&record.claim_status)
        .bind(&record.description)
        .bind(Json(&record.documents))
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Retrieves a claim row by key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ClaimRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT
                id, policy_id, claim_date, claim_amount, claim_status,
                description, documents
            FROM claims
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Overwrites every non-key column of a row
    pub async fn update(&self, id: i32, record: &ClaimRecord) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE claims
            SET policy_id = $2,
                claim_date = $3,
                claim_amount = $4,
                claim_status = $5,
                description = $6,
                documents = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(record.policy_id)
        .bind(record.claim_date)
        .bind(record.claim_amount)
        .bind(&record.claim_status)
        .bind(&record.description)
        .bind(Json(&record.documents))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a row by key
    pub async fn delete(&self, id: i32) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM claims WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Stored claim row
///
/// `claim_status` is kept as raw text; the adapter rejects values outside
/// the claim status set.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimRow {
    pub id: i32,
    pub policy_id: i32,
    pub claim_date: NaiveDate,
    pub claim_amount: Decimal,
    pub claim_status: String,
    pub description: String,
    pub documents: Json<Value>,
}

/// Column values for insert and update
#[derive(Debug, Clone)]
pub struct ClaimRecord {
    pub policy_id: i32,
    pub claim_date: NaiveDate,
    pub claim_amount: Decimal,
    pub claim_status: String,
    pub description: String,
    pub documents: Value,
}
