//! Resolution of individual variables against an environment source.
//!
//! Responsibilities:
//! - Apply defaults and the allow-empty policy to raw values.
//! - Coerce resolved strings to booleans and paths.
//!
//! Does NOT handle:
//! - Knowing which variables exist (see `builder.rs` and `catalog.rs`).
//! - Loading env files (see `dotenv.rs`).
//!
//! Invariants:
//! - "Empty" means the empty string; values are never trimmed.
//! - A default replaces an unset or empty value, and an explicit empty
//!   default is kept as the empty string rather than treated as missing.
//! - Resolved values are never logged, only variable names.

use secrecy::SecretString;
use std::path::PathBuf;

use super::error::ConfigError;
use super::parse::{bool_to_literal, parse_bool};
use crate::source::EnvSource;

/// Resolves variables from a single source.
pub struct Resolver<'a, S: EnvSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: EnvSource + ?Sized> Resolver<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Resolve `var` as a string.
    ///
    /// Fails with `ConfigError::MissingEnvVar` if the value is unset or empty,
    /// no default applies, and `allow_empty` is false.
    pub fn get_string(
        &self,
        var: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<String, ConfigError> {
        let mut value = self.source.get(var).filter(|v| !v.is_empty());

        if value.is_none()
            && let Some(default) = default
        {
            tracing::debug!(var, "Using default value");
            value = Some(default.to_string());
        }

        match value {
            Some(v) if !v.is_empty() || allow_empty => Ok(v),
            None if allow_empty => Ok(String::new()),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    }

    /// Resolve a required variable that may not be empty.
    pub fn required(&self, var: &str) -> Result<String, ConfigError> {
        self.get_string(var, None, false)
    }

    /// Resolve a variable with a non-empty default.
    pub fn or_default(&self, var: &str, default: &str) -> Result<String, ConfigError> {
        self.get_string(var, Some(default), false)
    }

    /// Resolve `var` as a boolean.
    ///
    /// The default is stringified and resolved like any other value, so an
    /// unset variable with a default never fails. Without a default an unset
    /// variable is reported as missing, not as an invalid boolean.
    pub fn get_bool(&self, var: &str, default: Option<bool>) -> Result<bool, ConfigError> {
        let raw = self.get_string(var, default.map(bool_to_literal), false)?;
        parse_bool(var, &raw)
    }

    /// Resolve a required variable as a filesystem path. Existence is not checked.
    pub fn get_path(&self, var: &str) -> Result<PathBuf, ConfigError> {
        self.required(var).map(PathBuf::from)
    }

    /// Resolve a variable holding a credential.
    pub fn get_secret(
        &self,
        var: &str,
        default: Option<&str>,
    ) -> Result<SecretString, ConfigError> {
        self.get_string(var, default, false)
            .map(|v| SecretString::new(v.into()))
    }
}
