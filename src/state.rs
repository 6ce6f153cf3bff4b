//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{DeleteService, ResolveService, SaveService};
use crate::domain::repositories::UrlStore;
use crate::utils::alias::AliasGenerator;

#[derive(Clone)]
pub struct AppState {
    pub save_service: Arc<SaveService>,
    pub resolve_service: Arc<ResolveService>,
    pub delete_service: Arc<DeleteService>,
    pub store: Arc<dyn UrlStore>,
}

impl AppState {
    /// Wires the workflows to a store.
    ///
    /// Each workflow receives only the capability it uses.
    pub fn new(store: Arc<dyn UrlStore>, generator: Arc<AliasGenerator>) -> Self {
        Self {
            save_service: Arc::new(SaveService::new(store.clone(), generator)),
            resolve_service: Arc::new(ResolveService::new(store.clone())),
            delete_service: Arc::new(DeleteService::new(store.clone())),
            store,
        }
    }
}
