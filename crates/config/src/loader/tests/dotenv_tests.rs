//! Tests for env file loading behavior.
//!
//! Responsibilities:
//! - Test that missing env files are silently ignored.
//! - Test that file values never override the process environment.
//! - Test that invalid env files return errors without leaking secrets.
//! - Test that `DOTENV_DISABLED=1`/`true` skips env file loading.
//! - Test that env files in parent directories are never picked up.
//!
//! Invariants / Assumptions:
//! - Tests use `env_lock()` to prevent cross-test contamination.
//! - Every variable a test file defines is listed in `temp_env::with_vars`
//!   so it is restored after the test.
//! - Error messages must never contain secret values from env files.

use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(dir: &Path) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(dir).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

fn write_env_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[test]
#[serial]
fn test_missing_env_files_are_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(temp_dir.path());

    temp_env::with_vars([("DOTENV_DISABLED", None::<&str>)], || {
        // Neither .env nor api_keys.env exists in temp_dir
        let result = ConfigLoader::new().load_dotenv();
        assert!(result.is_ok(), "Missing env files should be silently ignored");
    });
}

#[test]
#[serial]
fn test_default_files_loaded_from_working_directory() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(temp_dir.path());

    write_env_file(temp_dir.path(), ".env", "_TWIN_DOTENV_MAIN=from-dotenv\n");
    write_env_file(
        temp_dir.path(),
        "api_keys.env",
        "_TWIN_DOTENV_KEY=from-api-keys\n",
    );

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("_TWIN_DOTENV_MAIN", None),
            ("_TWIN_DOTENV_KEY", None),
        ],
        || {
            ConfigLoader::new().load_dotenv().unwrap();
            assert_eq!(var("_TWIN_DOTENV_MAIN").as_deref(), Some("from-dotenv"));
            assert_eq!(var("_TWIN_DOTENV_KEY").as_deref(), Some("from-api-keys"));
        },
    );
}

#[test]
#[serial]
fn test_process_env_wins_over_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(
        temp_dir.path(),
        "twin.env",
        "_TWIN_DOTENV_PRECEDENCE=from-file\n_TWIN_DOTENV_FILL=from-file\n",
    );

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("_TWIN_DOTENV_PRECEDENCE", Some("from-process")),
            ("_TWIN_DOTENV_FILL", None),
        ],
        || {
            ConfigLoader::new()
                .with_env_files([&path])
                .load_dotenv()
                .unwrap();
            assert_eq!(
                var("_TWIN_DOTENV_PRECEDENCE").as_deref(),
                Some("from-process")
            );
            assert_eq!(var("_TWIN_DOTENV_FILL").as_deref(), Some("from-file"));
        },
    );
}

#[test]
#[serial]
fn test_earlier_file_wins_over_later_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let first = write_env_file(temp_dir.path(), "first.env", "_TWIN_DOTENV_ORDER=first\n");
    let second = write_env_file(
        temp_dir.path(),
        "second.env",
        "_TWIN_DOTENV_ORDER=second\n",
    );

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("_TWIN_DOTENV_ORDER", None),
        ],
        || {
            ConfigLoader::new()
                .with_env_files([first.clone()])
                .with_env_file(second.clone())
                .load_dotenv()
                .unwrap();
            assert_eq!(var("_TWIN_DOTENV_ORDER").as_deref(), Some("first"));
        },
    );
}

#[test]
#[serial]
fn test_invalid_env_file_returns_parse_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(temp_dir.path(), "bad.env", "INVALID_LINE_WITHOUT_EQUALS");

    temp_env::with_vars([("DOTENV_DISABLED", None::<&str>)], || {
        match ConfigLoader::new().with_env_files([&path]).load_dotenv() {
            Err(ConfigError::DotenvParse {
                path: error_path, ..
            }) => assert_eq!(error_path, path),
            Err(other) => panic!("Invalid env file should return DotenvParse, got {}", other),
            Ok(_) => panic!("Invalid env file should return DotenvParse, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_parse_error_does_not_leak_secrets() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let secret_value = "supersecret_password_12345";
    let path = write_env_file(
        temp_dir.path(),
        "api_keys.env",
        &format!("_TWIN_DOTENV_SECRET={secret_value}\nINVALID_LINE_WITHOUT_EQUALS"),
    );

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("_TWIN_DOTENV_SECRET", None),
        ],
        || {
            let result = ConfigLoader::new().with_env_files([&path]).load_dotenv();
            match &result {
                Err(e) => {
                    let error_string = e.to_string();
                    assert!(
                        !error_string.contains(secret_value),
                        "Error message should NOT contain the secret value: {}",
                        error_string
                    );
                    assert!(
                        error_string.contains("api_keys.env"),
                        "Error message should name the file: {}",
                        error_string
                    );
                    assert!(
                        error_string.contains("DOTENV_DISABLED"),
                        "Error should hint about DOTENV_DISABLED: {}",
                        error_string
                    );
                }
                Ok(_) => panic!("Expected error for invalid env file, got Ok"),
            }
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_invalid_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(temp_dir.path(), ".env", "INVALID_LINE_WITHOUT_EQUALS");

    for disabled in ["1", "true"] {
        temp_env::with_vars([("DOTENV_DISABLED", Some(disabled))], || {
            let result = ConfigLoader::new().with_env_files([&path]).load_dotenv();
            assert!(
                result.is_ok(),
                "DOTENV_DISABLED={disabled} should skip env file loading even if the file is invalid"
            );
        });
    }
}

#[test]
#[serial]
fn test_dotenv_disabled_other_values_not_disabled() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(temp_dir.path(), ".env", "INVALID_LINE_WITHOUT_EQUALS");

    temp_env::with_vars([("DOTENV_DISABLED", Some("false"))], || {
        match ConfigLoader::new().with_env_files([&path]).load_dotenv() {
            Err(ConfigError::DotenvParse { .. }) => {}
            Err(other) => panic!(
                "DOTENV_DISABLED=false should NOT disable env file loading, got {}",
                other
            ),
            Ok(_) => panic!("DOTENV_DISABLED=false should NOT disable env file loading, got Ok"),
        }
    });
}

#[cfg(unix)]
#[test]
#[serial]
fn test_io_error_on_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(temp_dir.path(), ".env", "_TWIN_DOTENV_PERM=value\n");

    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o000);
    fs::set_permissions(&path, permissions).unwrap();

    let result = temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("_TWIN_DOTENV_PERM", None),
        ],
        || ConfigLoader::new().with_env_files([&path]).load_dotenv(),
    );

    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o644);
    fs::set_permissions(&path, permissions).unwrap();

    match &result {
        Err(ConfigError::DotenvIo { kind, .. }) => {
            assert!(
                matches!(
                    kind,
                    std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::Other
                ),
                "Expected PermissionDenied or Other, got {:?}",
                kind
            );
        }
        Ok(_) => {
            // Running as root can still read the file.
        }
        Err(other) => panic!("Expected DotenvIo error, got {}", other),
    }
}

#[test]
#[serial]
fn test_env_files_in_parent_directory_are_ignored() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    write_env_file(temp_dir.path(), ".env", "_TWIN_DOTENV_PARENT_MAIN=from-parent\n");
    write_env_file(
        temp_dir.path(),
        "api_keys.env",
        "_TWIN_DOTENV_PARENT_KEY=from-parent\n",
    );
    let service_dir = temp_dir.path().join("service");
    fs::create_dir(&service_dir).unwrap();

    let _cwd_guard = CwdGuard::new(&service_dir);

    let (files, main, key) = temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("_TWIN_DOTENV_PARENT_MAIN", None),
            ("_TWIN_DOTENV_PARENT_KEY", None),
        ],
        || {
            let loaded = crate::loader::dotenv::load_env_files(ConfigLoader::new().env_files());
            (
                loaded.map_err(|e| e.to_string()),
                var("_TWIN_DOTENV_PARENT_MAIN"),
                var("_TWIN_DOTENV_PARENT_KEY"),
            )
        },
    );

    assert_eq!(files.unwrap(), Vec::<PathBuf>::new());
    assert_eq!(main, None, ".env must not be read from a parent directory");
    assert_eq!(key, None, "api_keys.env must not be read from a parent directory");
}

#[test]
#[serial]
fn test_load_env_files_reports_files_read() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let present = write_env_file(temp_dir.path(), "present.env", "_TWIN_DOTENV_REPORT=1\n");
    let absent = temp_dir.path().join("absent.env");

    let loaded = temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("_TWIN_DOTENV_REPORT", None),
        ],
        || crate::loader::dotenv::load_env_files(&[absent.clone(), present.clone()]),
    )
    .unwrap();

    assert_eq!(loaded, [present]);
}
