//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every way startup resolution can fail.
//!
//! Does NOT handle:
//! - Exit-code mapping for the operator CLI (see the cli crate).
//!
//! Invariants:
//! - Every variant names the offending variable or file.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - `InvalidBool` carries the raw value; it is only raised for flag variables,
//!   which are never secret.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset or empty and has no default.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A boolean variable holds a value outside the accepted literals.
    #[error(
        "Invalid value for {var}: {value:?} is not a boolean (expected one of true/t/1 or false/f/0)"
    )]
    InvalidBool { var: String, value: String },

    /// Failed to parse an env file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse env file {} at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip env file loading",
        .path.display()
    )]
    DotenvParse { path: PathBuf, error_index: usize },

    /// Failed to read an env file due to an I/O error.
    #[error("Failed to read env file {}: {kind}", .path.display())]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error(
        "Failed to load env file {}. Hint: set DOTENV_DISABLED=1 to skip env file loading",
        .path.display()
    )]
    DotenvUnknown { path: PathBuf },
}

impl ConfigError {
    /// Name of the variable that failed to resolve, if the error concerns one.
    pub fn var_name(&self) -> Option<&str> {
        match self {
            Self::MissingEnvVar(var) | Self::InvalidBool { var, .. } => Some(var),
            Self::DotenvParse { .. } | Self::DotenvIo { .. } | Self::DotenvUnknown { .. } => None,
        }
    }
}
