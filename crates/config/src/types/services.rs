//! Connection settings for the external services the digital twin talks to.
//!
//! Responsibilities:
//! - Hold API keys for the four external data providers.
//! - Hold database, message broker, and GeoServer connection parameters.
//! - Derive connection URLs from those parameters.
//!
//! Does NOT handle:
//! - Resolving values from the environment (see `loader` module).
//! - Opening connections.
//!
//! Invariants:
//! - Credentials are `SecretString` and serialize as a placeholder.
//! - Ports are kept as the strings they were configured with; they are only
//!   validated when a URL is derived.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use super::secret;
use crate::constants::GEOSERVER_PATH;

/// API keys for external data providers.
#[derive(Debug, Clone, Serialize)]
pub struct ApiKeys {
    /// Stats NZ datafinder.
    #[serde(serialize_with = "secret::serialize")]
    pub statsnz: SecretString,
    /// LINZ data service.
    #[serde(serialize_with = "secret::serialize")]
    pub linz: SecretString,
    /// Ministry for the Environment data service.
    #[serde(serialize_with = "secret::serialize")]
    pub mfe: SecretString,
    /// NIWA tide API.
    #[serde(serialize_with = "secret::serialize")]
    pub niwa: SecretString,
}

/// PostGIS database connection parameters.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: String,
    pub name: String,
    pub user: String,
    #[serde(serialize_with = "secret::serialize")]
    pub password: SecretString,
}

impl DatabaseConfig {
    /// Build a `postgresql://` connection URL including the password.
    ///
    /// User and password are percent-encoded. The result is a secret because
    /// it embeds the password.
    pub fn connection_url(&self) -> Result<SecretString, url::ParseError> {
        let mut url = Url::parse(&format!(
            "postgresql://{}:{}/{}",
            self.host, self.port, self.name
        ))?;
        url.set_username(&self.user)
            .map_err(|()| url::ParseError::EmptyHost)?;
        url.set_password(Some(self.password.expose_secret()))
            .map_err(|()| url::ParseError::EmptyHost)?;
        Ok(SecretString::new(String::from(url).into()))
    }
}

/// Message broker used by the task queue.
#[derive(Debug, Clone, Serialize)]
pub struct MessageBrokerConfig {
    pub host: String,
}

/// GeoServer connection parameters.
///
/// The public host/port is what browsers use; the internal pair is what
/// backend services use, and defaults to the public pair.
#[derive(Debug, Clone, Serialize)]
pub struct GeoServerConfig {
    /// Public host including scheme, e.g. `http://localhost`.
    pub host: String,
    pub port: String,
    pub internal_host: String,
    pub internal_port: String,
    pub admin_name: String,
    #[serde(serialize_with = "secret::serialize")]
    pub admin_password: SecretString,
}

impl GeoServerConfig {
    /// Public GeoServer base URL, e.g. `http://localhost:8088/geoserver`.
    pub fn public_url(&self) -> Result<Url, url::ParseError> {
        geoserver_url(&self.host, &self.port)
    }

    /// GeoServer base URL for backend services.
    pub fn internal_url(&self) -> Result<Url, url::ParseError> {
        geoserver_url(&self.internal_host, &self.internal_port)
    }
}

fn geoserver_url(host: &str, port: &str) -> Result<Url, url::ParseError> {
    let url = Url::parse(&format!("{host}:{port}/{GEOSERVER_PATH}"))?;
    // A host without a scheme parses as an opaque URL with no host.
    if url.host().is_none() {
        return Err(url::ParseError::EmptyHost);
    }
    Ok(url)
}
