//! Infrastructure layer: concrete storage backends.
//!
//! - [`persistence`] - SQLite and in-memory implementations of the URL store

pub mod persistence;
