//! Utility functions for alias generation and validation.
//!
//! - [`alias`] - Random alias generation and caller alias checks

pub mod alias;
