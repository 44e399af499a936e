//! Configuration loader for env files and environment variables.
//!
//! Responsibilities:
//! - Load `.env` and `api_keys.env` into the process environment.
//! - Resolve every recognised variable into a typed `EnvConfig`.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Reading `std::env` directly (delegated to `source.rs`).
//!
//! Invariants / Assumptions:
//! - Process environment variables take precedence over env file values.
//! - `load_dotenv()` must be called explicitly to enable env file loading.
//! - Resolution fails fast; there is no partially resolved configuration.

mod builder;
mod dotenv;
mod error;
pub(crate) mod parse;
mod resolve;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use error::ConfigError;
pub use parse::{FALSE_LITERALS, TRUE_LITERALS, bool_literal};
pub use resolve::Resolver;
