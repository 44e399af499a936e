//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that loads env files and then
//!   resolves every variable into an `EnvConfig`.
//! - Let callers choose the env files and the source variables are read from.
//!
//! Does NOT handle:
//! - Single-variable resolution rules (delegated to resolve.rs).
//! - Env file parsing (delegated to dotenv.rs).
//!
//! Invariants / Assumptions:
//! - Env files never override variables already in the process environment.
//! - `load_dotenv()` must be called explicitly to enable env file loading.
//! - The `DOTENV_DISABLED` variable is checked before any file is read.
//! - `build()` stops at the first failure and never returns a partial config.

use std::path::PathBuf;

use super::dotenv::load_env_files;
use super::error::ConfigError;
use super::parse::optional_path;
use super::resolve::Resolver;
use crate::constants::*;
use crate::source::{EnvSource, ProcessEnv};
use crate::types::{
    ApiKeys, DataDirs, DatabaseConfig, ElevationConfig, EnvConfig, FeatureFlags,
    GeoServerConfig, MessageBrokerConfig,
};

/// Configuration loader that builds an `EnvConfig` from env files and an environment source.
pub struct ConfigLoader<S = ProcessEnv> {
    env_files: Vec<PathBuf>,
    source: S,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader reading the process environment, with the default
    /// env files `.env` and `api_keys.env`.
    pub fn new() -> Self {
        Self {
            env_files: vec![
                PathBuf::from(DEFAULT_ENV_FILE),
                PathBuf::from(API_KEYS_ENV_FILE),
            ],
            source: ProcessEnv,
        }
    }
}

impl<S: EnvSource> ConfigLoader<S> {
    /// Resolve variables from `source` instead of the process environment.
    pub fn with_source<T: EnvSource>(self, source: T) -> ConfigLoader<T> {
        ConfigLoader {
            env_files: self.env_files,
            source,
        }
    }

    /// Replace the list of env files. Earlier files take precedence.
    pub fn with_env_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.env_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Append an env file after the existing ones.
    pub fn with_env_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.env_files.push(file.into());
        self
    }

    /// The env files `load_dotenv()` will read, in order.
    pub fn env_files(&self) -> &[PathBuf] {
        &self.env_files
    }

    /// Load variables from the configured env files into the process environment.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", no file is read.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// Missing files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw env file contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        let loaded = load_env_files(&self.env_files)?;
        tracing::debug!(loaded = ?loaded, "Env files loaded");
        Ok(self)
    }

    /// Resolve every variable into an `EnvConfig`.
    ///
    /// # Errors
    ///
    /// `ConfigError::MissingEnvVar` for the first required variable that is
    /// unset or empty, or `ConfigError::InvalidBool` for a flag that is not a
    /// recognised boolean literal.
    pub fn build(&self) -> Result<EnvConfig, ConfigError> {
        let env = Resolver::new(&self.source);

        let api_keys = ApiKeys {
            statsnz: env.get_secret(STATSNZ_API_KEY, None)?,
            linz: env.get_secret(LINZ_API_KEY, None)?,
            mfe: env.get_secret(MFE_API_KEY, None)?,
            niwa: env.get_secret(NIWA_API_KEY, None)?,
        };

        let flags = FeatureFlags {
            debug_traceback: env.get_bool(DEBUG_TRACEBACK, Some(DEFAULT_DEBUG_TRACEBACK))?,
            test_database_integration: env.get_bool(
                TEST_DATABASE_INTEGRATION,
                Some(DEFAULT_TEST_DATABASE_INTEGRATION),
            )?,
        };

        let data = DataDirs {
            data_dir: env.get_path(DATA_DIR)?,
            model_output: env.get_path(DATA_DIR_MODEL_OUTPUT)?,
            geoserver: env.get_path(DATA_DIR_GEOSERVER)?,
            flood_model: env.get_path(FLOOD_MODEL_DIR)?,
        };

        let database = DatabaseConfig {
            host: env.or_default(POSTGRES_HOST, DEFAULT_POSTGRES_HOST)?,
            port: env.or_default(POSTGRES_PORT, DEFAULT_POSTGRES_PORT)?,
            name: env.or_default(POSTGRES_DB, DEFAULT_POSTGRES_DB)?,
            user: env.or_default(POSTGRES_USER, DEFAULT_POSTGRES_USER)?,
            password: env.get_secret(POSTGRES_PASSWORD, None)?,
        };

        let message_broker = MessageBrokerConfig {
            host: env.or_default(MESSAGE_BROKER_HOST, DEFAULT_MESSAGE_BROKER_HOST)?,
        };

        let geoserver_host = env.or_default(GEOSERVER_HOST, DEFAULT_GEOSERVER_HOST)?;
        let geoserver_port = env.or_default(GEOSERVER_PORT, DEFAULT_GEOSERVER_PORT)?;
        let geoserver = GeoServerConfig {
            internal_host: env.or_default(GEOSERVER_INTERNAL_HOST, &geoserver_host)?,
            internal_port: env.or_default(GEOSERVER_INTERNAL_PORT, &geoserver_port)?,
            host: geoserver_host,
            port: geoserver_port,
            admin_name: env.or_default(GEOSERVER_ADMIN_NAME, DEFAULT_GEOSERVER_ADMIN_NAME)?,
            admin_password: env.get_secret(
                GEOSERVER_ADMIN_PASSWORD,
                Some(DEFAULT_GEOSERVER_ADMIN_PASSWORD),
            )?,
        };

        let elevation = ElevationConfig {
            lidar_dir: env.get_path(LIDAR_DIR)?,
            dem_dir: env.get_path(DEM_DIR)?,
            land_file: optional_path(env.get_string(LAND_FILE, None, true)?),
            instructions_file: env.get_path(INSTRUCTIONS_FILE)?,
        };

        tracing::info!(
            debug_traceback = flags.debug_traceback,
            postgres_host = %database.host,
            geoserver_host = %geoserver.host,
            "Resolved environment configuration"
        );

        Ok(EnvConfig {
            api_keys,
            flags,
            data,
            database,
            message_broker,
            geoserver,
            elevation,
        })
    }
}
