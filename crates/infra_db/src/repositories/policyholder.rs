//! Policyholder repository implementation

use sqlx::PgPool;

use crate::error::DatabaseError;

/// Repository for the `policyholders` table
#[derive(Debug, Clone)]
pub struct PolicyholderRepository {
    pool: PgPool,
}

impl PolicyholderRepository {
    /// Creates a new PolicyholderRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a policyholder row
    ///
    /// # Returns
    ///
    /// The key assigned by the database
    pub async fn insert(&self, record: &PolicyholderRecord) -> Result<i32, DatabaseError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO policyholders (name, address, phone, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&record.name)
        .bind(&record.address)
        .bind(&record.phone)
        .bind(&record.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Retrieves a policyholder row by key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PolicyholderRow>, DatabaseError> {
        let row = sqlx::query_as::<_, PolicyholderRow>(
            r#"
            SELECT id, name, address, phone, email
            FROM policyholders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Overwrites every non-key column of a row
    ///
    /// # Returns
    ///
    /// `false` when no row has the key
    pub async fn update(&self, id: i32, record: &PolicyholderRecord) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE policyholders
            SET name = $2, address = $3, phone = $4, email = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&record.name)
        .bind(&record.address)
        .bind(&record.phone)
        .bind(&record.email)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a row by key
    ///
    /// Fails with `DatabaseError::ForeignKeyViolation` while policies
    /// reference the policyholder.
    pub async fn delete(&self, id: i32) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM policyholders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Stored policyholder row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PolicyholderRow {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Column values for insert and update
#[derive(Debug, Clone)]
pub struct PolicyholderRecord {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}
