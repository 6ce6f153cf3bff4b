//! Save workflow: validate, pick an alias, persist.

use std::sync::Arc;
use tracing::{error, info};
use validator::ValidateUrl;

use crate::domain::repositories::UrlSaver;
use crate::error::{AppError, StorageError, messages};
use crate::utils::alias::{AliasGenerator, DEFAULT_ALIAS_LENGTH, validate_alias};

/// Attempts made with freshly generated aliases before giving up.
const MAX_GENERATE_ATTEMPTS: usize = 3;

/// Service for creating alias mappings.
pub struct SaveService {
    saver: Arc<dyn UrlSaver>,
    generator: Arc<AliasGenerator>,
}

impl SaveService {
    /// Creates a new save service.
    pub fn new(saver: Arc<dyn UrlSaver>, generator: Arc<AliasGenerator>) -> Self {
        Self { saver, generator }
    }

    /// Saves `url` under `alias`, generating an alias when none is given.
    ///
    /// # Validation Order
    ///
    /// 1. `url` must be non-empty
    /// 2. `url` must parse as an absolute URL
    /// 3. a provided alias must be path-safe and not reserved
    ///
    /// Validation failures return before the store is touched.
    ///
    /// # Collisions
    ///
    /// A caller-chosen alias is tried exactly once. A generated alias is
    /// regenerated on collision, up to 3 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed input.
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    /// Returns [`AppError::Internal`] on any other storage failure.
    pub async fn save(&self, url: String, alias: Option<String>) -> Result<String, AppError> {
        if url.is_empty() {
            info!("url is empty");
            return Err(AppError::bad_request(messages::URL_REQUIRED));
        }

        if !url.validate_url() || !is_verbatim(&url) {
            info!(url = %url, "url is not valid");
            return Err(AppError::bad_request(messages::URL_INVALID));
        }

        match alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                validate_alias(&alias)?;
                self.store(&url, alias).await
            }
            None => self.store_generated(&url).await,
        }
    }

    async fn store(&self, url: &str, alias: String) -> Result<String, AppError> {
        match self.saver.save_url(url, &alias).await {
            Ok(id) => {
                info!(alias = %alias, id, "url added");
                Ok(alias)
            }
            Err(e) => Err(map_save_error(e)),
        }
    }

    async fn store_generated(&self, url: &str) -> Result<String, AppError> {
        let mut attempt = 1;

        loop {
            let alias = self.generator.generate(DEFAULT_ALIAS_LENGTH);

            match self.saver.save_url(url, &alias).await {
                Ok(id) => {
                    info!(alias = %alias, id, "url added with generated alias");
                    return Ok(alias);
                }
                Err(StorageError::DuplicateAlias(_)) if attempt < MAX_GENERATE_ATTEMPTS => {
                    info!(alias = %alias, attempt, "generated alias collided, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(map_save_error(e)),
            }
        }
    }
}

/// The URL parser strips surrounding whitespace and embedded tabs/newlines,
/// so a string it accepts is not necessarily a usable `Location` value.
/// Only strings that need no such cleanup are stored.
fn is_verbatim(url: &str) -> bool {
    url.trim() == url && !url.chars().any(char::is_control)
}

fn map_save_error(e: StorageError) -> AppError {
    match e {
        StorageError::DuplicateAlias(alias) => {
            info!(alias = %alias, "url already exists");
            AppError::conflict(messages::FAILED_TO_ADD_URL)
        }
        other => {
            error!(error = %other, "failed to add url");
            AppError::internal(messages::FAILED_TO_ADD_URL)
        }
    }
}
