//! In-memory implementation of the URL store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver, UrlStore};
use crate::error::StorageError;

/// A store that keeps records in process memory.
///
/// Selected with `STORAGE_URL=memory`. Contents are lost on restart.
///
/// # Use Cases
///
/// - Development without a database file
/// - Tests that need a real store but no SQL
pub struct MemoryUrlRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    records: HashMap<String, UrlRecord>,
}

impl MemoryUrlRepository {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        debug!("Using in-memory URL store");
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Number of live records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlSaver for MemoryUrlRepository {
    async fn save_url(&self, target_url: &str, alias: &str) -> Result<i64, StorageError> {
        // Write lock spans the lookup and the insert.
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        match inner.records.entry(alias.to_string()) {
            Entry::Occupied(_) => Err(StorageError::DuplicateAlias(alias.to_string())),
            Entry::Vacant(slot) => {
                inner.next_id += 1;
                let id = inner.next_id;
                let record = NewUrlRecord {
                    alias: alias.to_string(),
                    target_url: target_url.to_string(),
                }
                .into_record(id);
                slot.insert(record);
                Ok(id)
            }
        }
    }
}

#[async_trait]
impl UrlGetter for MemoryUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        self.inner
            .read()
            .await
            .records
            .get(alias)
            .map(|record| record.target_url.clone())
            .ok_or_else(|| StorageError::NotFound(alias.to_string()))
    }
}

#[async_trait]
impl UrlDeleter for MemoryUrlRepository {
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        self.inner
            .write()
            .await
            .records
            .remove(alias)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(alias.to_string()))
    }
}

#[async_trait]
impl UrlStore for MemoryUrlRepository {
    async fn health_check(&self) -> bool {
        true
    }
}
