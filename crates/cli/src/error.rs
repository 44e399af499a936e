//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that deployment scripts can branch on.
//! - Map errors in an `anyhow` chain to exit codes.
//!
//! Invariants:
//! - A `ConfigError` anywhere in the chain maps to `ConfigurationError`.

use twin_config::ConfigError;

/// Structured exit codes for twin-env.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - a variable is missing or invalid, or an env
    /// file could not be loaded.
    ///
    /// The application would refuse to start with this environment.
    ConfigurationError = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait to extract exit codes from errors.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self.chain().any(|cause| cause.is::<ConfigError>()) {
            ExitCode::ConfigurationError
        } else {
            ExitCode::GeneralError
        }
    }
}
