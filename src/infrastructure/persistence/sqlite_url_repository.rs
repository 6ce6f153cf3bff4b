//! SQLite implementation of the URL store.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver, UrlStore};
use crate::error::StorageError;

/// SQLite repository for alias storage and retrieval.
///
/// Alias uniqueness is enforced by the `UNIQUE` constraint on `url.alias`, so
/// the check and the insert happen in a single statement.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

/// Maps an insert failure, recognising unique violations on the alias.
fn map_insert_error(e: sqlx::Error, alias: &str) -> StorageError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return StorageError::DuplicateAlias(alias.to_string());
    }

    StorageError::Backend(e)
}

#[async_trait]
impl UrlSaver for SqliteUrlRepository {
    async fn save_url(&self, target_url: &str, alias: &str) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
            .bind(alias)
            .bind(target_url)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| map_insert_error(e, alias))?;

        Ok(result.last_insert_rowid())
    }
}

#[async_trait]
impl UrlGetter for SqliteUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?;

        url.ok_or_else(|| StorageError::NotFound(alias.to_string()))
    }
}

#[async_trait]
impl UrlDeleter for SqliteUrlRepository {
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(alias.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl UrlStore for SqliteUrlRepository {
    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Storage health check failed");
                false
            }
        }
    }
}
