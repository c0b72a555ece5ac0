//! Database Test Utilities
//!
//! Starts a throwaway PostgreSQL container, bootstraps the schema, and
//! hands out a pool and a `PostgresStore` over it. Tests that use it need
//! Docker and are marked `#[ignore]`; run them with `cargo test -- --ignored`.

use std::time::Duration;

use sqlx::PgPool;
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

use infra_db::{create_pool, ensure_schema, DatabaseConfig, PostgresStore};

/// Default PostgreSQL image for testing
const POSTGRES_IMAGE: &str = "postgres";
const POSTGRES_TAG: &str = "16-alpine";
const POSTGRES_USER: &str = "test_user";
const POSTGRES_PASSWORD: &str = "test_password";
const POSTGRES_DB: &str = "cms_test";

/// Error type for test harness setup
pub type TestDbError = Box<dyn std::error::Error + Send + Sync>;

/// Configuration for test database
#[derive(Debug, Clone)]
pub struct TestDatabaseConfig {
    pub user: String,
    pub password: String,
    pub database: String,
    pub host: String,
    pub port: u16,
}

impl Default for TestDatabaseConfig {
    fn default() -> Self {
        Self {
            user: POSTGRES_USER.to_string(),
            password: POSTGRES_PASSWORD.to_string(),
            database: POSTGRES_DB.to_string(),
            host: "localhost".to_string(),
            port: 5432,
        }
    }
}

impl TestDatabaseConfig {
    /// Builds the pool configuration for this database
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::from_parts(&self.host, self.port, &self.user, &self.password, &self.database)
            .max_connections(5)
            .connect_timeout(Duration::from_secs(30))
    }

    /// Creates the database connection URL
    pub fn connection_url(&self) -> String {
        self.database_config().url
    }
}

/// A wrapper around a PostgreSQL test container
///
/// The container is stopped when this value is dropped.
pub struct TestDatabase {
    _container: ContainerAsync<GenericImage>,
    pub config: TestDatabaseConfig,
    pub pool: PgPool,
}

impl TestDatabase {
    /// Starts a new PostgreSQL container with the schema in place
    ///
    /// # Errors
    ///
    /// Returns an error if the container fails to start or the schema
    /// bootstrap fails
    pub async fn new() -> Result<Self, TestDbError> {
        let container = GenericImage::new(POSTGRES_IMAGE, POSTGRES_TAG)
            .with_exposed_port(5432.tcp())
            .with_wait_for(WaitFor::message_on_stderr(
                "database system is ready to accept connections",
            ))
            .with_env_var("POSTGRES_USER", POSTGRES_USER)
            .with_env_var("POSTGRES_PASSWORD", POSTGRES_PASSWORD)
            .with_env_var("POSTGRES_DB", POSTGRES_DB)
            .start()
            .await?;

        let port = container.get_host_port_ipv4(5432).await?;
        let host = container.get_host().await?.to_string();

        let config = TestDatabaseConfig {
            host,
            port,
            ..TestDatabaseConfig::default()
        };

        let pool = create_pool(config.database_config()).await?;
        ensure_schema(&pool).await?;

        Ok(Self {
            _container: container,
            config,
            pool,
        })
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Returns a store over this database's pool
    pub fn store(&self) -> PostgresStore {
        PostgresStore::new(self.pool.clone())
    }

    /// Runs raw SQL, bypassing the store
    pub async fn execute(&self, sql: &str) -> Result<(), TestDbError> {
        sqlx::raw_sql(sql).execute(&self.pool).await?;
        Ok(())
    }

    /// Removes all rows and restarts the key sequences
    pub async fn clear_data(&self) -> Result<(), TestDbError> {
        sqlx::query("TRUNCATE TABLE claims, policies, policyholders RESTART IDENTITY")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
