// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Client configuration and config file loading.

mod duration_serde;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Timeout for a single Consul query
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);
/// Idle connections kept open to the Consul agent
pub const DEFAULT_QUERY_MAX_IDLE_CONNECTION_COUNT: usize = 100;
/// How long an idle connection is kept before closing
pub const DEFAULT_QUERY_IDLE_CONNECTION_TIMEOUT: Duration = Duration::from_secs(90);

/// Config file looked up in the home directory when nothing else is given
pub const HOME_CONFIG_FILE: &str = ".consulate.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Settings for the HTTP client talking to Consul
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Query timeout, in whole seconds in config files
    #[serde(with = "duration_serde")]
    pub query_timeout: Duration,

    pub query_max_idle_connection_count: usize,

    /// Idle connection timeout, in whole seconds in config files
    #[serde(with = "duration_serde")]
    pub query_idle_connection_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            query_max_idle_connection_count: DEFAULT_QUERY_MAX_IDLE_CONNECTION_COUNT,
            query_idle_connection_timeout: DEFAULT_QUERY_IDLE_CONNECTION_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Reject zero durations
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query_timeout.is_zero() {
            return Err(ConfigError::Validation(
                "client.query_timeout must be greater than zero".to_string(),
            ));
        }
        if self.query_idle_connection_timeout.is_zero() {
            return Err(ConfigError::Validation(
                "client.query_idle_connection_timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Client defaults: 5s query timeout, 100 idle connections, 90s idle timeout
pub fn default_client_config() -> ClientConfig {
    ClientConfig::default()
}

/// Top-level config file contents
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub client: ClientConfig,
}

impl Config {
    /// Load a TOML or JSON config file (JSON when the extension is `.json`)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = if path.extension().is_some_and(|e| e == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.client.validate()
    }
}

/// Where config files may come from besides `--config`.
///
/// The command layer takes these from its caller so tests can run without
/// the process environment or the user's home directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigSources {
    /// Value of `CONSULATE_CONFIG`
    pub config_env: Option<PathBuf>,
    /// Directory searched for `.consulate.toml`
    pub home: Option<PathBuf>,
}

impl ConfigSources {
    /// Sources read from the process environment
    pub fn from_process() -> Self {
        Self {
            config_env: crate::env::config_path(),
            home: crate::env::home(),
        }
    }
}

/// A config file candidate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// Explicitly requested files must exist; the home file is optional
    pub required: bool,
}

impl ConfigLocation {
    /// Pick the config file: `--config`, then `CONSULATE_CONFIG`, then `$HOME/.consulate.toml`
    pub fn discover(flag: Option<&Path>, sources: &ConfigSources) -> Option<Self> {
        if let Some(path) = flag {
            return Some(Self {
                path: path.to_path_buf(),
                required: true,
            });
        }
        if let Some(path) = &sources.config_env {
            return Some(Self {
                path: path.clone(),
                required: true,
            });
        }
        sources.home.as_ref().map(|home| Self {
            path: home.join(HOME_CONFIG_FILE),
            required: false,
        })
    }

    /// Load the file, or `None` when an optional file does not exist
    pub fn load(&self) -> Result<Option<Config>, ConfigError> {
        if !self.required && !self.path.is_file() {
            tracing::debug!(path = %self.path.display(), "optional config file not present");
            return Ok(None);
        }
        Config::load(&self.path).map(Some)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
