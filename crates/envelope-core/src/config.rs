// Rust guideline compliant 2026-10-18

//! Configuration for response builders.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Configuration for envelope building and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeConfig {
    /// Server name reported to the log hook.
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Log level for binaries that install a subscriber.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Default server name.
fn default_server_name() -> String {
    "response-api".to_string()
}

/// Default log level.
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            server_name: default_server_name(),
            log_level: default_log_level(),
        }
    }
}

impl EnvelopeConfig {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. TOML file at `path`, when given
    /// 3. Environment variables with `ENVELOPE_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A configuration path is given but the file cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = path {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `ENVELOPE_SERVER_NAME` - Server name reported to the log hook
    /// - `ENVELOPE_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ENVELOPE_SERVER_NAME") {
            self.server_name = val;
        }

        if let Ok(val) = std::env::var("ENVELOPE_LOG_LEVEL") {
            self.log_level = val.to_ascii_lowercase();
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - server_name is blank
    /// - log_level is not one of [`LOG_LEVELS`]
    pub fn validate(&self) -> Result<()> {
        if self.server_name.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "server_name cannot be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join("/"),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
