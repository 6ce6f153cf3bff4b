//! Delete workflow: remove an alias mapping.

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::repositories::UrlDeleter;
use crate::error::{AppError, StorageError, messages};

/// Service for removing alias mappings.
pub struct DeleteService {
    deleter: Arc<dyn UrlDeleter>,
}

impl DeleteService {
    /// Creates a new delete service.
    pub fn new(deleter: Arc<dyn UrlDeleter>) -> Self {
        Self { deleter }
    }

    /// Deletes the mapping for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `alias` is empty.
    /// Returns [`AppError::NotFound`] if the alias does not exist.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        if alias.is_empty() {
            info!("alias is empty");
            return Err(AppError::bad_request(messages::INVALID_REQUEST));
        }

        match self.deleter.delete_url(alias).await {
            Ok(()) => {
                info!(alias, "url deleted");
                Ok(())
            }
            Err(StorageError::NotFound(_)) => {
                info!(alias, "url not found");
                Err(AppError::not_found(messages::URL_NOT_FOUND))
            }
            Err(e) => {
                error!(alias, error = %e, "failed to delete url");
                Err(AppError::internal(messages::INTERNAL_ERROR))
            }
        }
    }
}
