//! URL store implementations.
//!
//! Concrete implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - SQLite storage via SQLx (default)
//! - [`MemoryUrlRepository`] - process-local storage (`STORAGE_URL=memory`)

pub mod memory_url_repository;
pub mod sqlite_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use sqlite_url_repository::SqliteUrlRepository;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::UrlStore;

/// Opens the store selected by the configuration.
///
/// For SQLite the database file (and its directory) is created when missing
/// and pending migrations are applied before the store is returned.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated.
pub async fn open_store(config: &Config) -> Result<Arc<dyn UrlStore>> {
    match config.storage_backend() {
        StorageBackend::Memory => {
            tracing::info!("Storage: in-memory");
            Ok(Arc::new(MemoryUrlRepository::new()))
        }
        StorageBackend::Sqlite(url) => {
            let pool = connect_sqlite(
                url,
                config.db_max_connections,
                Duration::from_secs(config.db_connect_timeout),
            )
            .await?;
            tracing::info!("Connected to database");

            run_migrations(&pool).await?;

            Ok(Arc::new(SqliteUrlRepository::new(Arc::new(pool))))
        }
    }
}

/// Connects a SQLite pool, creating the database file if needed.
pub async fn connect_sqlite(
    url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .with_context(|| format!("Invalid storage URL '{url}'"))?
        .create_if_missing(true);

    if let Some(parent) = options.get_filename().parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create storage directory {}", parent.display()))?;
    }

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await
        .context("Failed to connect to database")
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to migrate")?;

    Ok(())
}
