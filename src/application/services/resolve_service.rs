//! Resolve workflow: alias to target URL.

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::repositories::UrlGetter;
use crate::error::{AppError, StorageError, messages};

/// Service for looking up the target URL of an alias.
pub struct ResolveService {
    getter: Arc<dyn UrlGetter>,
}

impl ResolveService {
    /// Creates a new resolve service.
    pub fn new(getter: Arc<dyn UrlGetter>) -> Self {
        Self { getter }
    }

    /// Returns the target URL for `alias`.
    ///
    /// This is a single lookup. The caller answers with one temporary redirect
    /// and does not follow the target.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `alias` is empty.
    /// Returns [`AppError::NotFound`] if the alias does not exist.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            info!("alias is empty");
            return Err(AppError::bad_request(messages::INVALID_REQUEST));
        }

        match self.getter.get_url(alias).await {
            Ok(url) => {
                info!(alias, url = %url, "got url");
                Ok(url)
            }
            Err(StorageError::NotFound(_)) => {
                info!(alias, "url not found");
                Err(AppError::not_found(messages::URL_NOT_FOUND))
            }
            Err(e) => {
                error!(alias, error = %e, "failed to get url");
                Err(AppError::internal(messages::INTERNAL_ERROR))
            }
        }
    }
}
