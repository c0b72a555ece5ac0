//! Environment configuration
//!
//! Settings are read from `CMS_`-prefixed environment variables after an
//! optional `.env` file has been loaded. A full `CMS_DATABASE_URL` wins over
//! the individual connection parts.

use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use infra_db::DatabaseConfig;

/// System configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CmsConfig {
    /// Full connection URL, overrides the parts below when set
    #[serde(default)]
    pub database_url: Option<String>,
    /// Database host
    pub host: String,
    /// Database port
    pub port: u16,
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
    /// Database name
    pub database: String,
    /// Maximum pool connections
    pub max_connections: u32,
    /// Connections the pool keeps open while idle
    pub min_connections: u32,
    /// Seconds to wait for a pooled connection
    pub connect_timeout_secs: u64,
    /// Seconds an unused connection stays open
    pub idle_timeout_secs: u64,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "password".to_string(),
            database: "cms_db".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
            log_level: "info".to_string(),
        }
    }
}

impl CmsConfig {
    /// Loads configuration from `.env` and the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_source(Environment::with_prefix("CMS"))
    }

    /// Loads configuration from the given environment source, filling
    /// unset keys with defaults
    pub fn from_source(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("user", defaults.user)?
            .set_default("password", defaults.password)?
            .set_default("database", defaults.database)?
            .set_default("max_connections", i64::from(defaults.max_connections))?
            .set_default("min_connections", i64::from(defaults.min_connections))?
            .set_default("connect_timeout_secs", defaults.connect_timeout_secs as i64)?
            .set_default("idle_timeout_secs", defaults.idle_timeout_secs as i64)?
            .set_default("log_level", defaults.log_level)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the PostgreSQL connection URL
    pub fn connection_url(&self) -> String {
        self.database_config().url
    }

    /// Returns the pool configuration
    pub fn database_config(&self) -> DatabaseConfig {
        let config = match &self.database_url {
            Some(url) if !url.trim().is_empty() => DatabaseConfig::new(url.clone()),
            _ => DatabaseConfig::from_parts(
                &self.host,
                self.port,
                &self.user,
                &self.password,
                &self.database,
            ),
        };

        config
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
    }
}
