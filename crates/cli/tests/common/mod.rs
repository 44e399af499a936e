//! Shared test utilities for twin-env integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a complete set of variable values.
//!
//! Invariants / Assumptions:
//! - Every catalogued variable is removed from the child environment, so the
//!   host running the tests cannot leak configuration in.

use assert_cmd::Command;
use twin_config::catalog::{self, VARIABLES};

/// Returns a hermetic `twin-env` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Every digital twin variable is cleared from the inherited environment.
pub fn twin_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("twin-env");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for spec in VARIABLES {
        cmd.env_remove(spec.name);
    }

    cmd
}

/// Same as `twin_cmd()`, with env file loading left enabled.
pub fn twin_cmd_with_dotenv() -> Command {
    let mut cmd = twin_cmd();
    cmd.env_remove("DOTENV_DISABLED");
    cmd
}

/// A value for every required variable.
pub fn required_vars() -> Vec<(&'static str, String)> {
    catalog::required()
        .map(|spec| (spec.name, format!("secret-{}", spec.name.to_lowercase())))
        .collect()
}

/// `required_vars()` in `KEY=VALUE` env file syntax.
pub fn required_env_file() -> String {
    required_vars()
        .into_iter()
        .map(|(k, v)| format!("{k}={v}\n"))
        .collect()
}
