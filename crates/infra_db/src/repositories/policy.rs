//! Policy repository implementation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::DatabaseError;

/// Repository for the `policies` table
#[derive(Debug, Clone)]
pub struct PolicyRepository {
    pool: PgPool,
}

impl PolicyRepository {
    /// Creates a new PolicyRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a policy row
    ///
    /// # Returns
    ///
    /// The key assigned by the database
    ///
    /// # Errors
    ///
    /// `DatabaseError::ForeignKeyViolation` when the policyholder does not exist
    pub async fn insert(&self, record: &PolicyRecord) -> Result<i32, DatabaseError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO policies (
                policyholder_id, policy_type, start_date, end_date,
                premium_amount, coverage_details
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(record.policyholder_id)
        .bind(&record.policy_type)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.premium_amount)
        .bind(Json(&record.coverage_details))
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Retrieves a policy row by key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PolicyRow>, DatabaseError> {
        let row = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT
                id, policyholder_id, policy_type, start_date, end_date,
                premium_amount, coverage_details
            FROM policies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Overwrites every non-key column of a row
    pub async fn update(&self, id: i32, record: &PolicyRecord) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE policies
            SET policyholder_id = $2,
                policy_type = $3,
                start_date = $4,
                end_date = $5,
                premium_amount = $6,
                coverage_details = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(record.policyholder_id)
        .bind(&record.policy_type)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.premium_amount)
        .bind(Json(&record.coverage_details))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a row by key
    ///
    /// Fails with `DatabaseError::ForeignKeyViolation` while claims
    /// reference the policy.
    pub async fn delete(&self, id: i32) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM policies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Stored policy row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PolicyRow {
    pub id: i32,
    pub policyholder_id: i32,
    pub policy_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub premium_amount: Decimal,
    pub coverage_details: Json<Value>,
}

/// Column values for insert and update
#[derive(Debug, Clone)]
pub struct PolicyRecord {
    pub policyholder_id: i32,
    pub policy_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub premium_amount: Decimal,
    pub coverage_details: Value,
}
