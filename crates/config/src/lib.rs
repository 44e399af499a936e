//! Environment configuration for the flood resilience digital twin.
//!
//! This crate loads env files, resolves and validates every environment
//! variable the digital twin depends on, and exposes the result as one
//! immutable, typed [`EnvConfig`] built at startup.

pub mod catalog;
pub mod constants;
mod loader;
pub mod source;
pub mod types;

pub use catalog::{Requirement, VarKind, VarSpec};
pub use loader::{
    ConfigError, ConfigLoader, FALSE_LITERALS, Resolver, TRUE_LITERALS, bool_literal,
};
pub use source::{EnvSource, ProcessEnv};
pub use types::{
    ApiKeys, DataDirs, DatabaseConfig, ElevationConfig, EnvConfig, FeatureFlags,
    GeoServerConfig, MessageBrokerConfig,
};

/// Load the default env files and resolve the configuration from the process environment.
///
/// This is what an application calls once at startup.
pub fn load() -> Result<EnvConfig, ConfigError> {
    ConfigLoader::new().load_dotenv()?.build()
}
