use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::CatalogConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl CatalogConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/stockroom/config.toml` on Unix/macOS, or
    /// equivalent on other platforms via `dirs::config_dir()`. Falls
    /// back to the current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("stockroom").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `CatalogConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(CatalogConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: CatalogConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Filter categories are non-blank
    /// - No category is listed twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.filter.categories.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: "Filter categories must not be blank".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for category in &self.filter.categories {
            if !seen.insert(category.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate filter category '{}'", category),
                });
            }
        }

        Ok(())
    }
}
