//! Alias generation and validation utilities.
//!
//! Random aliases are drawn from a generator owned by [`AliasGenerator`],
//! seeded once per process from OS entropy and shared by handle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

use crate::error::{AppError, messages};

/// Alphabet for generated aliases: upper and lower ASCII letters plus digits.
pub const ALIAS_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of aliases generated when the caller supplies none.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Aliases that would shadow fixed routes.
pub const RESERVED_ALIASES: &[&str] = &["url", "health"];

/// Produces random fixed-length aliases.
///
/// Create one per process and share it through an `Arc`. Generation holds the
/// lock only for the duration of a single call and never waits on I/O.
///
/// Aliases are not guaranteed unique; the store rejects collisions.
pub struct AliasGenerator {
    rng: Mutex<StdRng>,
}

impl AliasGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a generator from an explicit RNG (deterministic in tests).
    pub fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Generates an alias of exactly `length` characters.
    ///
    /// Each character is drawn uniformly from [`ALIAS_ALPHABET`].
    pub fn generate(&self, length: usize) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..length)
            .map(|_| {
                let idx = rng.random_range(0..ALIAS_ALPHABET.len());
                ALIAS_ALPHABET[idx] as char
            })
            .collect()
    }
}

impl Default for AliasGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates a caller-chosen alias.
///
/// # Rules
///
/// - Must be usable as a single path segment: no `/`, `?`, `#`, `%`,
///   whitespace or control characters
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] with message `"invalid alias"`.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    let path_safe = alias
        .chars()
        .all(|c| !matches!(c, '/' | '?' | '#' | '%') && !c.is_whitespace() && !c.is_control());

    if !path_safe || RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(messages::INVALID_ALIAS));
    }

    Ok(())
}
