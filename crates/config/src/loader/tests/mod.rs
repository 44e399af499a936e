//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test full resolution of `EnvConfig` from an in-memory source.
//! - Test env file loading and its precedence against the process environment.
//! - Test resolution against the real process environment.
//!
//! Invariants:
//! - Tests that touch process-global state (cwd/env) use `serial_test` and
//!   `global_test_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::collections::HashMap;
use std::sync::Mutex;

pub mod dotenv_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every required variable set to a plausible value.
pub fn complete_env() -> HashMap<String, String> {
    [
        ("STATSNZ_API_KEY", "statsnz-key"),
        ("LINZ_API_KEY", "linz-key"),
        ("MFE_API_KEY", "mfe-key"),
        ("NIWA_API_KEY", "niwa-key"),
        ("DATA_DIR", "./stored_data"),
        ("DATA_DIR_MODEL_OUTPUT", "./stored_data/model_output"),
        ("DATA_DIR_GEOSERVER", "./stored_data/geoserver"),
        ("FLOOD_MODEL_DIR", "/opt/bg_flood"),
        ("POSTGRES_PASSWORD", "pg-password"),
        ("LIDAR_DIR", "./stored_data/LiDAR"),
        ("DEM_DIR", "./stored_data/DEM"),
        ("LAND_FILE", ""),
        ("INSTRUCTIONS_FILE", "./instructions.json"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// `complete_env()` as `temp_env` overrides, with every optional catalogued
/// variable explicitly unset so the host environment cannot leak in.
pub fn complete_env_vars() -> Vec<(String, Option<String>)> {
    let env = complete_env();
    crate::catalog::VARIABLES
        .iter()
        .map(|spec| (spec.name.to_string(), env.get(spec.name).cloned()))
        .collect()
}
