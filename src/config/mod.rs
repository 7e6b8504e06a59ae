//! Configuration module
//!
//! This module handles application configuration, including loading from
//! different sources (files, environment variables, command line arguments)
//! and validating the configuration.

mod defaults;

pub use defaults::{DEFAULT_CONFIG_FILE, ENV_PREFIX};

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::common::{AdminError, Result};

/// Valid diagnostic log levels
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Console configuration
///
/// Contains all configuration options needed for the admin console.
/// Supports loading from command-line arguments, environment variables,
/// and configuration files; the built-in defaults reproduce the embedded
/// endpoint constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Key-management endpoint URL
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Service API key sent as both the `apikey` header and the bearer token
    #[serde(default = "defaults::service_key")]
    pub service_key: String,

    /// Optional prefill for the operator's admin secret key.
    /// Only read from the environment or command line; this tool never
    /// writes it anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "defaults::request_timeout")]
    pub request_timeout: u64,

    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
}

impl Default for ConsoleConfig {
    /// Create a default configuration using centralized defaults
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            service_key: defaults::service_key(),
            admin_key: defaults::admin_key(),
            request_timeout: defaults::request_timeout(),
            log_level: defaults::log_level(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AdminError::Config(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            AdminError::Config(format!(
                "Failed to parse JSON configuration file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load configuration from environment variables
    ///
    /// Each option is read from `KEYPOOL_ADMIN_<NAME>`; unset variables keep
    /// their default values.
    pub fn from_env() -> Result<Self> {
        let get_env = |name: &str| -> Option<String> {
            let full_name = format!("{}{}", ENV_PREFIX, name);
            env::var(&full_name).ok()
        };

        let mut config = Self::default();

        if let Some(endpoint) = get_env("ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Some(service_key) = get_env("SERVICE_KEY") {
            config.service_key = service_key;
        }

        if let Some(admin_key) = get_env("ADMIN_KEY") {
            config.admin_key = Some(admin_key);
        }

        if let Some(timeout) = get_env("TIMEOUT") {
            config.request_timeout = timeout.parse().map_err(|_| {
                AdminError::Config(format!("Invalid value for {}TIMEOUT: {}", ENV_PREFIX, timeout))
            })?;
        }

        if let Some(log_level) = get_env("LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Merge another configuration into this one
    ///
    /// Values from `other` override values in `self` if they are not the
    /// default values. This implements the configuration priority system:
    /// defaults < file < environment < command line.
    pub fn merge(&self, other: Self) -> Self {
        let base = Self::default();
        Self {
            endpoint: if other.endpoint != base.endpoint {
                other.endpoint
            } else {
                self.endpoint.clone()
            },
            service_key: if other.service_key != base.service_key {
                other.service_key
            } else {
                self.service_key.clone()
            },
            admin_key: other.admin_key.or_else(|| self.admin_key.clone()),
            request_timeout: if other.request_timeout != base.request_timeout {
                other.request_timeout
            } else {
                self.request_timeout
            },
            log_level: if other.log_level != base.log_level {
                other.log_level
            } else {
                self.log_level.clone()
            },
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(AdminError::Config(
                "Endpoint URL must not be empty".to_string(),
            ));
        }

        if !self.endpoint.starts_with("https://") && !self.endpoint.starts_with("http://") {
            return Err(AdminError::Config(format!(
                "Endpoint URL must use http or https: {}",
                self.endpoint
            )));
        }

        if self.service_key.trim().is_empty() {
            return Err(AdminError::Config(
                "Service API key must not be empty".to_string(),
            ));
        }

        if self.request_timeout == 0 {
            return Err(AdminError::Config(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(AdminError::Config(format!(
                "Invalid log level: {}. Valid values are: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
