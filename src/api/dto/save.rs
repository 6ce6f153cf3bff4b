//! DTOs for the save endpoint.

use serde::Deserialize;

/// Request to create an alias for a URL.
///
/// Both fields default to empty so that a missing `url` is reported by the
/// save workflow as a required-field error rather than a decoding failure.
#[derive(Debug, Default, Deserialize)]
pub struct SaveRequest {
    /// The target URL (must be an absolute URL).
    #[serde(default)]
    pub url: String,

    /// Optional caller-chosen alias. Empty or missing means "generate one".
    #[serde(default)]
    pub alias: Option<String>,
}
