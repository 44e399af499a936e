//! Loading env files into the process environment.
//!
//! Responsibilities:
//! - Read each configured env file, if present, with `dotenvy`.
//! - Honour the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Resolving or validating variables (see `resolve.rs`).
//!
//! Invariants:
//! - Variables already present in the process environment are never
//!   overridden; file values only fill gaps. Earlier files therefore win
//!   over later ones.
//! - Each path is opened exactly as given (relative paths against the
//!   working directory); parent directories are never searched.
//! - Missing files are silently skipped.
//! - Errors never include raw file contents.

use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::constants::DOTENV_DISABLED;
use crate::source::{EnvSource, ProcessEnv};

/// Check if env file loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        ProcessEnv.get(DOTENV_DISABLED).as_deref(),
        Some("true") | Some("1")
    )
}

/// Load every file in `paths`, in order.
///
/// Returns the files that were actually read.
pub fn load_env_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, ConfigError> {
    if dotenv_disabled() {
        tracing::debug!("Env file loading disabled by {}", DOTENV_DISABLED);
        return Ok(Vec::new());
    }

    let mut loaded = Vec::with_capacity(paths.len());
    for path in paths {
        if load_env_file(path)? {
            loaded.push(path.clone());
        }
    }
    Ok(loaded)
}

/// Load a single file. Returns `false` if it does not exist.
fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    // Opened as given, no search through parent directories.
    match dotenvy::from_path(path) {
        Ok(_) => {
            tracing::debug!(path = %path.display(), "Loaded env file");
            Ok(true)
        }
        Err(e) if is_not_found(&e) => {
            tracing::debug!(path = %path.display(), "Env file not found, skipping");
            Ok(false)
        }
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ConfigError::DotenvParse {
            path: path.to_path_buf(),
            error_index: idx,
        }),
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            path: path.to_path_buf(),
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown {
            path: path.to_path_buf(),
        }),
    }
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
