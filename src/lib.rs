//! # Alias Shortener
//!
//! A small URL shortening service built with Axum and SQLite: save a URL under
//! a chosen or generated alias, resolve the alias with a redirect, delete it.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL record entity and store capability traits
//! - **Application Layer** ([`application`]) - Save / resolve / delete workflows
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Invariants
//!
//! - An alias maps to at most one live record
//! - A target URL is validated as an absolute URL before it is stored
//! - Records live until explicitly deleted
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_URL="sqlite://storage/storage.db"
//! cargo run
//!
//! curl -X POST localhost:8082/url -d '{"url":"https://google.com","alias":"g"}' \
//!      -H 'content-type: application/json'
//! curl -i localhost:8082/g
//! curl -X DELETE localhost:8082/url/g
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DeleteService, ResolveService, SaveService};
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver, UrlStore};
    pub use crate::error::{AppError, StorageError};
    pub use crate::state::AppState;
    pub use crate::utils::alias::AliasGenerator;
}
