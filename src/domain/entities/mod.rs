//! Core domain entities.
//!
//! - [`UrlRecord`] - A persisted alias mapping
//! - [`NewUrlRecord`] - Data for creating a record before the store assigns an id

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
