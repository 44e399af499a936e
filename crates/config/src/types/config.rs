//! The resolved configuration.
//!
//! Responsibilities:
//! - Group every resolved variable into typed sections.
//!
//! Does NOT handle:
//! - Resolution itself (see `loader::builder`).
//!
//! Invariants:
//! - An `EnvConfig` only exists fully resolved; there is no partial state.
//! - Fields are public for reading; nothing in the crate mutates a built config.

use serde::Serialize;

use super::paths::{DataDirs, ElevationConfig};
use super::services::{ApiKeys, DatabaseConfig, GeoServerConfig, MessageBrokerConfig};

/// Feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    /// Include tracebacks in API error responses.
    pub debug_traceback: bool,
    /// Run tests that need a live database.
    pub test_database_integration: bool,
}

/// Every environment-derived setting of the digital twin, resolved once at startup.
#[derive(Debug, Clone, Serialize)]
pub struct EnvConfig {
    pub api_keys: ApiKeys,
    pub flags: FeatureFlags,
    pub data: DataDirs,
    pub database: DatabaseConfig,
    pub message_broker: MessageBrokerConfig,
    pub geoserver: GeoServerConfig,
    pub elevation: ElevationConfig,
}
