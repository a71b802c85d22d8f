use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/launchargs/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("launchargs").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Tables missing from the file keep their built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            languages = config.languages.len(),
            localizations = config.localizations.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - No language or localization key is empty
    /// - No two languages share an id
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.languages.keys().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: "Language names must not be empty".to_string(),
            });
        }

        if self.localizations.keys().any(|code| code.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: "Localization codes must not be empty".to_string(),
            });
        }

        let mut seen: HashMap<u16, &str> = HashMap::new();
        for (name, id) in &self.languages {
            if let Some(previous) = seen.insert(*id, name) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Languages '{}' and '{}' share id {}",
                        previous, name, id
                    ),
                });
            }
        }

        Ok(())
    }
}
