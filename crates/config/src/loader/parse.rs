//! Typed parsers for raw environment strings.
//!
//! Invariants:
//! - Boolean parsing accepts exactly the literals below, compared ASCII
//!   case-insensitively. Everything else, including the empty string, fails.
//! - Path parsing never touches the filesystem.

use std::path::PathBuf;

use super::error::ConfigError;

/// Literals accepted as `true`.
pub const TRUE_LITERALS: [&str; 3] = ["true", "t", "1"];

/// Literals accepted as `false`.
pub const FALSE_LITERALS: [&str; 3] = ["false", "f", "0"];

/// Parse a boolean literal, returning `None` if `value` is not recognised.
pub fn bool_literal(value: &str) -> Option<bool> {
    if TRUE_LITERALS.iter().any(|lit| value.eq_ignore_ascii_case(lit)) {
        Some(true)
    } else if FALSE_LITERALS.iter().any(|lit| value.eq_ignore_ascii_case(lit)) {
        Some(false)
    } else {
        None
    }
}

/// Parse the value of boolean variable `var`.
pub fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    bool_literal(value).ok_or_else(|| ConfigError::InvalidBool {
        var: var.to_string(),
        value: value.to_string(),
    })
}

/// Literal a boolean default is stringified to before resolution.
pub const fn bool_to_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Wrap a resolved value as a path. An empty value means "no path".
pub fn optional_path(value: String) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}
