//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export STORAGE_URL="sqlite://storage/storage.db"   # or "memory"
//! export LISTEN="0.0.0.0:8082"
//! ```
//!
//! ## Optional Variables
//!
//! - `STORAGE_URL` - SQLite URL or `memory` (default: `sqlite://storage/storage.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8082`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 10)

use anyhow::Result;
use std::env;

pub const DEFAULT_STORAGE_URL: &str = "sqlite://storage/storage.db";
pub const MEMORY_STORAGE: &str = "memory";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the SQLite pool.
    pub db_max_connections: u32,
    /// Timeout for acquiring a pooled connection, in seconds.
    pub db_connect_timeout: u64,
}

/// Storage backend selected by `STORAGE_URL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend<'a> {
    Memory,
    Sqlite(&'a str),
}

impl Config {
    /// Loads configuration from environment variables, applying defaults.
    pub fn from_env() -> Result<Self> {
        let storage_url =
            env::var("STORAGE_URL").unwrap_or_else(|_| DEFAULT_STORAGE_URL.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8082".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            storage_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `storage_url` is neither `memory` nor a `sqlite:` URL
    /// - pool size or timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.storage_url != MEMORY_STORAGE && !self.storage_url.starts_with("sqlite:") {
            anyhow::bail!(
                "STORAGE_URL must be 'memory' or start with 'sqlite:', got '{}'",
                self.storage_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Returns the storage backend described by `storage_url`.
    pub fn storage_backend(&self) -> StorageBackend<'_> {
        if self.storage_url == MEMORY_STORAGE {
            StorageBackend::Memory
        } else {
            StorageBackend::Sqlite(&self.storage_url)
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  DB pool size: {}", self.db_max_connections);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
