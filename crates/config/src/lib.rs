#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for pokerep
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/pokerep/config.toml)
//! - Environment variables
//! - CLI flags (applied by the binary)

use serde::{Deserialize, Serialize};
use pokerep_errors::{ConfigError, Error};
use std::path::{Path, PathBuf};
use tokio::fs;
use url::Url;

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default category catalog URL (public PokéAPI type listing)
pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2/type";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            network: NetworkConfig::default(),
        }
    }
}

/// Backend endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the report backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// URL of the category catalog
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            catalog_url: default_catalog_url(),
        }
    }
}

/// Network tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Retry count for idempotent requests
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
    /// Base delay between retries in milliseconds
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            retry_count: default_retry_count(),
            retry_delay_ms: default_retry_delay(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    1000
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::ReadFailed {
            path: "~/.config/pokerep/config.toml".to_string(),
            message: "HOME environment variable not set".to_string(),
        })?;
        Ok(PathBuf::from(home).join(".config/pokerep/config.toml"))
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseFailed {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be
    /// read or parsed.
    pub async fn load() -> Result<Self, Error> {
        let config_path = Self::default_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default behavior
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load().await,
        }
    }

    /// Merge with environment variables
    ///
    /// `POKEREP_BASE_URL` and `POKEREP_CATALOG_URL` override the file
    /// configuration.
    pub fn merge_env(&mut self) {
        if let Ok(base_url) = std::env::var("POKEREP_BASE_URL") {
            self.backend.base_url = base_url;
        }
        if let Ok(catalog_url) = std::env::var("POKEREP_CATALOG_URL") {
            self.backend.catalog_url = catalog_url;
        }
    }

    /// Validate URL fields
    ///
    /// # Errors
    ///
    /// Returns an error if a configured URL does not parse.
    pub fn validate(&self) -> Result<(), Error> {
        for (field, value) in [
            ("backend.base_url", &self.backend.base_url),
            ("backend.catalog_url", &self.backend.catalog_url),
        ] {
            Url::parse(value).map_err(|e| ConfigError::InvalidValue {
                field: field.to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Build an absolute backend URL from an API path
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        let base = self.backend.base_url.trim_end_matches('/');
        format!("{base}/{}", path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.network.retry_count, 3);
    }

    #[test]
    fn api_url_joins_without_duplicate_slash() {
        let mut config = Config::default();
        config.backend.base_url = "http://backend:9000/".to_string();
        assert_eq!(
            config.api_url("/api/request"),
            "http://backend:9000/api/request"
        );
        assert_eq!(
            config.api_url("api/report/3"),
            "http://backend:9000/api/report/3"
        );
    }

    #[test]
    fn invalid_url_fails_validation() {
        let mut config = Config::default();
        config.backend.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn load_from_file_parses_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[backend]\nbase_url = \"http://reports.internal\"\n",
        )
        .unwrap();

        let config = Config::load_from_file(&path).await.unwrap();
        assert_eq!(config.backend.base_url, "http://reports.internal");
        // unspecified sections fall back to defaults
        assert_eq!(config.backend.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.network.timeout_seconds, 60);
    }

    #[tokio::test]
    async fn load_from_missing_file_errors() {
        let result = Config::load_from_file(Path::new("/nonexistent/config.toml")).await;
        assert!(result.is_err());
    }
}
