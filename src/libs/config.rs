//! Connection configuration for the agenda data layer.
//!
//! Carries the PostgreSQL connection parameters and the pool bound. The
//! defaults match a stock local PostgreSQL instance; every field can be
//! overridden from the environment (optionally loaded from a `.env` file),
//! and a full `DATABASE_URL` takes precedence over the individual fields.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use agenda::libs::config::DbConfig;
//!
//! // Defaults (localhost:5432, postgres/postgres)
//! let config = DbConfig::default();
//!
//! // Environment override: AGENDA_DB_* or DATABASE_URL
//! let config = DbConfig::from_env();
//! assert!(config.connection_url().starts_with("postgres://"));
//! ```

use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::Path;

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_DB_HOST: &str = "AGENDA_DB_HOST";
pub const ENV_DB_PORT: &str = "AGENDA_DB_PORT";
pub const ENV_DB_USER: &str = "AGENDA_DB_USER";
pub const ENV_DB_PASSWORD: &str = "AGENDA_DB_PASSWORD";
pub const ENV_DB_NAME: &str = "AGENDA_DB_NAME";
pub const ENV_DB_MAX_CONNECTIONS: &str = "AGENDA_DB_MAX_CONNECTIONS";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    /// Upper bound for the shared connection pool.
    pub max_connections: u32,
    /// Full connection URL; overrides the individual fields when set.
    pub url: Option<String>,
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            dbname: "postgres".to_string(),
            max_connections: 5,
            url: None,
        }
    }
}

impl DbConfig {
    /// Builds a configuration from the environment, falling back to defaults
    /// field by field. Reads a `.env` file first when one is present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut config = Self::default();
        if let Ok(host) = env::var(ENV_DB_HOST) {
            config.host = host;
        }
        if let Ok(port) = env::var(ENV_DB_PORT) {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => msg_warning!(Message::ConfigInvalidPort(port)),
            }
        }
        if let Ok(user) = env::var(ENV_DB_USER) {
            config.user = user;
        }
        if let Ok(password) = env::var(ENV_DB_PASSWORD) {
            config.password = password;
        }
        if let Ok(dbname) = env::var(ENV_DB_NAME) {
            config.dbname = dbname;
        }
        if let Ok(max) = env::var(ENV_DB_MAX_CONNECTIONS) {
            if let Ok(max) = max.parse() {
                config.max_connections = max;
            }
        }
        config.url = env::var(ENV_DATABASE_URL).ok();
        config
    }

    /// Reads a configuration file, falling back to defaults when it is absent.
    pub fn read(path: &Path) -> Result<Self> {
        // If no configuration file exists, return default configuration
        if !path.exists() {
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: DbConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON for manual editing.
    pub fn save(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Renders the connection URL, preferring a full `DATABASE_URL` override.
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.dbname
            ),
        }
    }
}
