//! Environment-driven server configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

const BACKEND_URL_VAR: &str = "BACKEND_URL";
const PORT_VAR: &str = "PORT";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BACKEND_URL must be set to the ML backend base URL")]
    MissingBackendUrl,
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Runtime configuration assembled from the process environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base URL of the external ML backend every `/api` and `/nn` request is
    /// forwarded to.
    pub backend_url: String,
    /// Port this host binds on.
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// # Errors
    ///
    /// Fails when `BACKEND_URL` is missing or `PORT` is not a valid port
    /// number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_url =
            std::env::var(BACKEND_URL_VAR).map_err(|_| ConfigError::MissingBackendUrl)?;
        let port = match std::env::var(PORT_VAR) {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            backend_url: normalize_base_url(&backend_url),
            port,
        })
    }
}

/// Strip trailing slashes so joining request paths never doubles a `/`.
fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}
