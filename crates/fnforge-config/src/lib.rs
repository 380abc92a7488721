//! Configuration system for FnForge.
//!
//! Load memoization and logging settings from TOML or YAML files so cache
//! sizing and log verbosity can change without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use fnforge_config::FnForgeConfig;
//!
//! let config = FnForgeConfig::from_toml_str(r#"
//!     [memoize]
//!     initial_capacity = 256
//!
//!     [logging]
//!     default_directive = "fnforge_core=trace"
//! "#).unwrap();
//!
//! assert_eq!(config.memoize.initial_capacity, 256);
//! assert_eq!(config.logging.default_directive, "fnforge_core=trace");
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use fnforge_config::FnForgeConfig;
//!
//! let config = FnForgeConfig::load("fnforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main FnForge configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FnForgeConfig {
    /// Memoization cache settings.
    #[serde(default)]
    pub memoize: MemoizeConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FnForgeConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the initial memoization cache capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.memoize.initial_capacity = capacity;
        self
    }

    /// Sets the default log filter directive.
    pub fn with_log_directive(mut self, directive: impl Into<String>) -> Self {
        self.logging.default_directive = directive.into();
        self
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.default_directive.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "logging.default_directive must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Memoization cache configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MemoizeConfig {
    /// Number of keys the cache reserves room for up front.
    #[serde(default)]
    pub initial_capacity: usize,
}

impl MemoizeConfig {
    /// Creates a config with the given initial capacity.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}

/// Log output configuration, consumed by the facade's console initializer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_directive")]
    pub default_directive: String,

    /// Whether to emit ANSI colors.
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_directive: default_directive(),
            ansi: default_ansi(),
        }
    }
}

fn default_directive() -> String {
    "fnforge_core=info".to_string()
}

fn default_ansi() -> bool {
    true
}
