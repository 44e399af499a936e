//! Sources of raw environment values.
//!
//! Responsibilities:
//! - Define the `EnvSource` seam the resolver reads through.
//! - Provide `ProcessEnv`, the only place the crate reads `std::env`.
//!
//! Does NOT handle:
//! - Loading `.env` files (see `loader::dotenv`).
//! - Defaults, validation, or coercion (see `loader::resolve`).
//!
//! Invariants:
//! - A source returns the raw value unchanged; empty strings are returned as
//!   `Some("")` and it is up to the resolver to treat them as missing.

use std::collections::{BTreeMap, HashMap};

/// Read-only lookup of raw environment values by name.
pub trait EnvSource {
    /// Returns the raw value of `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// Values that are not valid unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                tracing::warn!(var = key, "Ignoring environment variable with non-unicode value");
                None
            }
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
