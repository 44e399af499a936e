//! Centralized constants for the digital twin environment configuration.
//!
//! Variable names are defined once here so the loader, the variable
//! catalogue, and the CLI all agree on spelling.

// =============================================================================
// Environment Files
// =============================================================================

/// Default environment file, read from the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Secondary environment file holding external service API keys.
pub const API_KEYS_ENV_FILE: &str = "api_keys.env";

/// Set to `true` or `1` to skip loading environment files entirely.
pub const DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// External API Keys
// =============================================================================

pub const STATSNZ_API_KEY: &str = "STATSNZ_API_KEY";
pub const LINZ_API_KEY: &str = "LINZ_API_KEY";
pub const MFE_API_KEY: &str = "MFE_API_KEY";
pub const NIWA_API_KEY: &str = "NIWA_API_KEY";

// =============================================================================
// Feature Flags
// =============================================================================

pub const DEBUG_TRACEBACK: &str = "DEBUG_TRACEBACK";
pub const TEST_DATABASE_INTEGRATION: &str = "TEST_DATABASE_INTEGRATION";

/// Tracebacks are hidden from API responses unless explicitly enabled.
pub const DEFAULT_DEBUG_TRACEBACK: bool = false;

/// Database integration tests run unless explicitly disabled.
pub const DEFAULT_TEST_DATABASE_INTEGRATION: bool = true;

// =============================================================================
// Data Directories
// =============================================================================

pub const DATA_DIR: &str = "DATA_DIR";
pub const DATA_DIR_MODEL_OUTPUT: &str = "DATA_DIR_MODEL_OUTPUT";
pub const DATA_DIR_GEOSERVER: &str = "DATA_DIR_GEOSERVER";
pub const FLOOD_MODEL_DIR: &str = "FLOOD_MODEL_DIR";

// =============================================================================
// Database
// =============================================================================

pub const POSTGRES_HOST: &str = "POSTGRES_HOST";
pub const POSTGRES_PORT: &str = "POSTGRES_PORT";
pub const POSTGRES_DB: &str = "POSTGRES_DB";
pub const POSTGRES_USER: &str = "POSTGRES_USER";
pub const POSTGRES_PASSWORD: &str = "POSTGRES_PASSWORD";

pub const DEFAULT_POSTGRES_HOST: &str = "localhost";
/// Non-standard port so a development database does not clash with a system postgres.
pub const DEFAULT_POSTGRES_PORT: &str = "5431";
pub const DEFAULT_POSTGRES_DB: &str = "db";
pub const DEFAULT_POSTGRES_USER: &str = "postgres";

// =============================================================================
// Message Broker
// =============================================================================

pub const MESSAGE_BROKER_HOST: &str = "MESSAGE_BROKER_HOST";
pub const DEFAULT_MESSAGE_BROKER_HOST: &str = "localhost";

// =============================================================================
// GeoServer
// =============================================================================

pub const GEOSERVER_HOST: &str = "GEOSERVER_HOST";
pub const GEOSERVER_PORT: &str = "GEOSERVER_PORT";
pub const GEOSERVER_INTERNAL_HOST: &str = "GEOSERVER_INTERNAL_HOST";
pub const GEOSERVER_INTERNAL_PORT: &str = "GEOSERVER_INTERNAL_PORT";
pub const GEOSERVER_ADMIN_NAME: &str = "GEOSERVER_ADMIN_NAME";
pub const GEOSERVER_ADMIN_PASSWORD: &str = "GEOSERVER_ADMIN_PASSWORD";

pub const DEFAULT_GEOSERVER_HOST: &str = "http://localhost";
pub const DEFAULT_GEOSERVER_PORT: &str = "8088";
pub const DEFAULT_GEOSERVER_ADMIN_NAME: &str = "admin";
pub const DEFAULT_GEOSERVER_ADMIN_PASSWORD: &str = "geoserver";

/// Path segment GeoServer is mounted under.
pub const GEOSERVER_PATH: &str = "geoserver";

// =============================================================================
// Elevation Pipeline
// =============================================================================

pub const LIDAR_DIR: &str = "LIDAR_DIR";
pub const DEM_DIR: &str = "DEM_DIR";
pub const LAND_FILE: &str = "LAND_FILE";
pub const INSTRUCTIONS_FILE: &str = "INSTRUCTIONS_FILE";

/// Placeholder printed in place of secret values.
pub const REDACTED: &str = "********";
