//! Configuration type definitions for the digital twin.
//!
//! Responsibilities:
//! - Define the typed sections of the resolved configuration.
//! - Provide a redacting serializer for secrets.
//!
//! Does NOT handle:
//! - Loading from env files or the environment (see `loader` module).
//!
//! Invariants:
//! - All secret fields use `secrecy::SecretString` to prevent accidental logging.
//! - Serializing a config never writes secret material.

mod config;
mod paths;
mod secret;
mod services;

pub use config::{EnvConfig, FeatureFlags};
pub use paths::{DataDirs, ElevationConfig};
pub use services::{ApiKeys, DatabaseConfig, GeoServerConfig, MessageBrokerConfig};
