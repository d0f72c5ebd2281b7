//! Configuration loading and typed config structures.
//!
//! The canonical configuration lives in `reclaimer-config.yaml` in the
//! working directory. Every section and field has a default, so a missing
//! file, an empty file and a partial file are all valid.
//!
//! Environment variables override YAML values for deployment settings:
//!
//! - `RECLAIMER_HOST` overrides `server.host`
//! - `RECLAIMER_PORT` overrides `server.port`
//! - `RECLAIMER_HISTORY_PATH` overrides `history.path`
//! - `RECLAIMER_LOG_LEVEL` overrides `logging.level`

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::ConversionConstants;

/// Default configuration file name, resolved against the working directory.
pub const CONFIG_FILE_NAME: &str = "reclaimer-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held a value of the wrong type.
    #[error("invalid value {value:?} for {variable}: {reason}")]
    InvalidOverride {
        /// The environment variable name.
        variable: &'static str,
        /// The rejected value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReclaimerConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: HttpConfig,

    /// Calculation history file.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Defaults offered by the interactive terminal.
    #[serde(default)]
    pub mission: MissionConfig,

    /// Yield and cost factors passed to the allocation engine.
    #[serde(default)]
    pub conversion: ConversionConstants,
}

impl ReclaimerConfig {
    /// Load configuration from a YAML file, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidOverride`] if an override does not parse.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise start from defaults. Environment
    /// overrides apply in both cases.
    ///
    /// # Errors
    ///
    /// Same as [`ReclaimerConfig::from_file`].
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::from_file(path);
        }
        tracing::info!(path = %path.display(), "config file not found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No environment overrides
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if `RECLAIMER_PORT` is not
    /// a valid port number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides using `lookup` to resolve variable names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if the port override is not
    /// a valid port number.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("RECLAIMER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("RECLAIMER_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidOverride {
                    variable: "RECLAIMER_PORT",
                    value: port.clone(),
                    reason: e.to_string(),
                })?;
        }
        if let Some(path) = lookup("RECLAIMER_HISTORY_PATH") {
            self.history.path = PathBuf::from(path);
        }
        if let Some(level) = lookup("RECLAIMER_LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Calculation history configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryConfig {
    /// Path of the JSON history file.
    #[serde(default = "default_history_path")]
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. `info`,
    /// `reclaimer_core=debug`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Defaults offered by the interactive terminal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MissionConfig {
    /// Crew size suggested at the prompt.
    #[serde(default = "default_crew")]
    pub default_crew: u32,

    /// Mission length suggested at the prompt.
    #[serde(default = "default_days")]
    pub default_days: u32,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            default_crew: default_crew(),
            default_days: default_days(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8000
}

fn default_history_path() -> PathBuf {
    PathBuf::from("data").join("history.json")
}

fn default_log_level() -> String {
    String::from("info")
}

const fn default_crew() -> u32 {
    8
}

const fn default_days() -> u32 {
    365
}
