//! Capability traits for alias persistence.
//!
//! Each workflow depends on exactly one of [`UrlSaver`], [`UrlGetter`] or
//! [`UrlDeleter`], so tests can substitute a single-method fake. [`UrlStore`]
//! is implemented by concrete backends that provide all three.

use crate::error::StorageError;
use async_trait::async_trait;

/// Inserts new alias mappings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Persists `alias -> target_url` and returns the record identifier.
    ///
    /// The uniqueness check and the insert are atomic: of two concurrent calls
    /// with the same alias exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DuplicateAlias`] if the alias is already taken.
    /// Returns [`StorageError::Backend`] on driver failures.
    async fn save_url(&self, target_url: &str, alias: &str) -> Result<i64, StorageError>;
}

/// Looks up the target URL of an alias.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the alias does not exist.
    /// Returns [`StorageError::Backend`] on driver failures.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;
}

/// Removes alias mappings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlDeleter: Send + Sync {
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the alias does not exist.
    /// Returns [`StorageError::Backend`] on driver failures.
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;
}

/// A complete store backend.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite via sqlx
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - process-local map
#[async_trait]
pub trait UrlStore: UrlSaver + UrlGetter + UrlDeleter {
    /// Returns `true` if the backend can currently serve requests.
    async fn health_check(&self) -> bool;
}
