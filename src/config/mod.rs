use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gateway::{ApiKeySet, CorsPolicy};

/// Environment variable holding the comma-separated API keys.
pub const API_KEYS_ENV: &str = "API_KEYS";

/// Environment variable overriding the listen address.
pub const BIND_ENV: &str = "JOBSKILLS_BIND";

/// Listen address when neither the CLI nor the config file sets one.
pub const DEFAULT_BIND: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8000));

/// Startup configuration errors.  All of them are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_KEYS environment variable is not set")]
    MissingApiKeys,

    #[error("API_KEYS does not contain any API keys")]
    NoApiKeys,

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    #[error("invalid CORS origin: {0:?}")]
    InvalidOrigin(String),
}

/// Optional on-disk server settings (`--config path`).
///
/// API keys are never read from this file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Listen address, e.g. `127.0.0.1:8000`.
    #[serde(default)]
    pub bind: Option<SocketAddr>,
    /// Allowed browser origins.  Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl FileConfig {
    /// Read and parse a YAML configuration file.
    pub async fn load(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse(&contents)?;
        tracing::debug!(path = %path.display(), "config file loaded");
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<FileConfig, ConfigError> {
        Ok(serde_yaml_ng::from_str(contents)?)
    }

    fn cors_policy(&self) -> Result<CorsPolicy, ConfigError> {
        if self.cors_origins.is_empty() {
            return Ok(CorsPolicy::Permissive);
        }
        self.cors_origins
            .iter()
            .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.clone())))
            .collect::<Result<Vec<_>, _>>()
            .map(CorsPolicy::Origins)
    }
}

/// Fully resolved settings the server runs with.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind: SocketAddr,
    pub api_keys: ApiKeySet,
    pub cors: CorsPolicy,
}

impl Settings {
    /// Combine the key source, an optional bind override and the optional
    /// config file.  The override beats the file, the file beats
    /// [`DEFAULT_BIND`].
    pub fn resolve(
        api_keys: Option<&str>,
        bind_override: Option<SocketAddr>,
        file: FileConfig,
    ) -> Result<Settings, ConfigError> {
        let api_keys = ApiKeySet::parse(api_keys.ok_or(ConfigError::MissingApiKeys)?)?;
        let bind = bind_override.or(file.bind).unwrap_or(DEFAULT_BIND);
        let cors = file.cors_policy()?;

        Ok(Settings {
            bind,
            api_keys,
            cors,
        })
    }
}
