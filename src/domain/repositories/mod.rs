//! Repository trait definitions for the domain layer.
//!
//! These traits abstract alias persistence and are implemented by concrete
//! stores in the infrastructure layer. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod url_repository;

pub use url_repository::{UrlDeleter, UrlGetter, UrlSaver, UrlStore};

#[cfg(test)]
pub use url_repository::{MockUrlDeleter, MockUrlGetter, MockUrlSaver};
