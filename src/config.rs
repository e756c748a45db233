//! # Configuration
//!
//! Application configuration loading and management.
//!
//! Configuration is loaded in the following order (later sources override
//! earlier):
//! 1. Default values
//! 2. Configuration file (if exists)
//! 3. Environment variables (prefixed with `CAMBIO_API_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `CAMBIO_API_REST_HOST` | REST server host | `0.0.0.0` |
//! | `CAMBIO_API_REST_PORT` | REST server port | `8080` |
//! | `CAMBIO_API_LOG_LEVEL` | Log level | `info` |
//! | `CAMBIO_API_LOG_FORMAT` | Log format (json/pretty) | `json` |
//! | `CAMBIO_API_QUOTATION_URL` | Upstream quotation endpoint | Bluelytics v2 |
//! | `BLUELYTICS_API_URL` | Legacy alias for the quotation endpoint | — |

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

// ============================================================================
// Server Configuration
// ============================================================================

/// REST/HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestConfig {
    /// Server host address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_rest_port")]
    pub port: u16,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_rest_port(),
        }
    }
}

impl RestConfig {
    /// Returns the socket address for the REST server.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be parsed.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                field: "rest.host:port".to_string(),
                message: format!("{e}"),
            })
    }
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    #[default]
    Json,
    /// Pretty format (human-readable).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Json,
        }
    }
}

// ============================================================================
// Upstream Configuration
// ============================================================================

/// Upstream quotation provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Quotation endpoint URL.
    #[serde(default = "default_quotation_url")]
    pub quotation_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            quotation_url: default_quotation_url(),
        }
    }
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// REST server configuration.
    #[serde(default)]
    pub rest: RestConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Upstream provider configuration.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Service name for tracing.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rest: RestConfig::default(),
            log: LogConfig::default(),
            upstream: UpstreamConfig::default(),
            service_name: default_service_name(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let config_path =
            std::env::var("CAMBIO_API_CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        if Path::new(&config_path).exists() {
            config = Self::from_file(&config_path)?;
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("CAMBIO_API_REST_HOST") {
            self.rest.host = host;
        }
        if let Ok(port) = std::env::var("CAMBIO_API_REST_PORT")
            && let Ok(p) = port.parse()
        {
            self.rest.port = p;
        }

        if let Ok(level) = std::env::var("CAMBIO_API_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Ok(format) = std::env::var("CAMBIO_API_LOG_FORMAT") {
            self.log.format = match format.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                _ => LogFormat::Json,
            };
        }

        // Legacy variable from the original deployment, kept for
        // compatibility; the prefixed variable wins when both are set.
        if let Ok(url) = std::env::var("BLUELYTICS_API_URL") {
            self.upstream.quotation_url = url;
        }
        if let Ok(url) = std::env::var("CAMBIO_API_QUOTATION_URL") {
            self.upstream.quotation_url = url;
        }

        if let Ok(name) = std::env::var("CAMBIO_API_SERVICE_NAME") {
            self.service_name = name;
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rest.socket_addr()?;

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log.level".to_string(),
                message: format!(
                    "invalid log level '{}', must be one of: {:?}",
                    self.log.level, valid_levels
                ),
            });
        }

        if self.upstream.quotation_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "upstream.quotation_url".to_string(),
                message: "quotation URL cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_rest_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_quotation_url() -> String {
    "https://api.bluelytics.com.ar/v2/latest".to_string()
}

fn default_service_name() -> String {
    "cambio-api".to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.rest.port, 8080);
        assert_eq!(config.log.level, "info");
        assert_eq!(
            config.upstream.quotation_url,
            "https://api.bluelytics.com.ar/v2/latest"
        );
    }

    #[test]
    fn rest_config_socket_addr() {
        let config = RestConfig::default();
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn rest_config_invalid_address() {
        let config = RestConfig {
            host: "invalid host with spaces".to_string(),
            ..Default::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn log_format_default() {
        assert_eq!(LogFormat::default(), LogFormat::Json);
    }

    #[test]
    fn app_config_validate_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn app_config_validate_invalid_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn app_config_validate_empty_quotation_url() {
        let mut config = AppConfig::default();
        config.upstream.quotation_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn app_config_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            service_name = "cambio-api-test"

            [rest]
            port = 9090

            [upstream]
            quotation_url = "http://localhost:9999/v2/latest"
            "#,
        )
        .unwrap();
        assert_eq!(config.rest.port, 9090);
        assert_eq!(config.rest.host, "0.0.0.0");
        assert_eq!(config.upstream.quotation_url, "http://localhost:9999/v2/latest");
        assert_eq!(config.service_name, "cambio-api-test");
    }
}
