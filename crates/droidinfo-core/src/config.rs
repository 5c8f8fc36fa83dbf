//! Configuration module for droidinfo.
//!
//! Provides typed configuration structs that map to the YAML configuration file,
//! with loading, validation, defaults, and a builder pattern for programmatic use.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::TelephonyReadPolicy;
use crate::usecases::resolve_connectivity::MODERN_API_LEVEL;

// ---------------------------------------------------------------------------
// Config struct with sub-sections
// ---------------------------------------------------------------------------

/// Top-level configuration for droidinfo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub network: NetworkConfig,
    pub device: DeviceConfig,
    pub logging: LoggingConfig,
}

/// HTTP endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind, e.g. `"127.0.0.1:6790"`.
    pub bind: String,
    /// Whether to expose request metrics on `/metrics`.
    pub metrics: bool,
}

/// Network report settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// First API level resolved with the capability strategy; lower levels
    /// use the legacy info-object strategy.
    pub modern_api_level: u32,
    /// When the capability strategy reads telephony fields: `when_denied` or `when_granted`.
    pub telephony_read: TelephonyReadPolicy,
}

/// Device source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Recorded device profile (YAML or JSON). `None` until one is configured.
    pub profile: Option<PathBuf>,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
    /// Output format: `text` or `json`.
    pub format: String,
}

// ---------------------------------------------------------------------------
// Config::load()
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/droidinfo/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("droidinfo")
            .join("config.yaml")
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:6790".to_string(),
            metrics: true,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            modern_api_level: MODERN_API_LEVEL,
            telephony_read: TelephonyReadPolicy::WhenDenied,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config::validate()
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"server.bind"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid values for `logging.format`.
const VALID_LOG_FORMATS: &[&str] = &["text", "json"];

/// Highest API level accepted for `network.modern_api_level`.
const MAX_API_LEVEL: u32 = 100;

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- server ---
        if self.server.bind.trim().is_empty() {
            errors.push(ValidationError {
                field: "server.bind".into(),
                message: "must not be empty".into(),
            });
        } else if self.server.bind.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError {
                field: "server.bind".into(),
                message: format!("not a valid socket address: {}", self.server.bind),
            });
        }

        // --- network ---
        if self.network.modern_api_level == 0 || self.network.modern_api_level > MAX_API_LEVEL {
            errors.push(ValidationError {
                field: "network.modern_api_level".into(),
                message: format!("must be between 1 and {MAX_API_LEVEL}"),
            });
        }

        // --- device ---
        if let Some(profile) = &self.device.profile {
            if !profile.exists() {
                errors.push(ValidationError {
                    field: "device.profile".into(),
                    message: format!("file does not exist: {}", profile.display()),
                });
            }
        }

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "must be one of {:?}, got {:?}",
                    VALID_LOG_LEVELS, self.logging.level
                ),
            });
        }
        if !VALID_LOG_FORMATS.contains(&self.logging.format.as_str()) {
            errors.push(ValidationError {
                field: "logging.format".into(),
                message: format!(
                    "must be one of {:?}, got {:?}",
                    VALID_LOG_FORMATS, self.logging.format
                ),
            });
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// ConfigBuilder
// ---------------------------------------------------------------------------

/// Builder for constructing a [`Config`] programmatically.
///
/// Starts from [`Config::default`] and lets callers override individual fields.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder seeded with default values.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    // -- server --

    pub fn server_bind(mut self, bind: impl Into<String>) -> Self {
        self.config.server.bind = bind.into();
        self
    }

    pub fn server_metrics(mut self, enabled: bool) -> Self {
        self.config.server.metrics = enabled;
        self
    }

    // -- network --

    pub fn network_modern_api_level(mut self, level: u32) -> Self {
        self.config.network.modern_api_level = level;
        self
    }

    pub fn network_telephony_read(mut self, policy: TelephonyReadPolicy) -> Self {
        self.config.network.telephony_read = policy;
        self
    }

    // -- device --

    pub fn device_profile(mut self, profile: PathBuf) -> Self {
        self.config.device.profile = Some(profile);
        self
    }

    // -- logging --

    pub fn logging_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn logging_format(mut self, format: impl Into<String>) -> Self {
        self.config.logging.format = format.into();
        self
    }

    /// Consume the builder and return the [`Config`] without validation.
    pub fn build(self) -> Config {
        self.config
    }

    /// Consume the builder, validate, and return the [`Config`] or errors.
    pub fn build_validated(self) -> Result<Config, Vec<ValidationError>> {
        let errors = self.config.validate();
        if errors.is_empty() {
            Ok(self.config)
        } else {
            Err(errors)
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
