//! Application configuration
//!
//! Defaults work out of the box; a TOML file can override the service
//! settings and replace the difficulty alias table, and a couple of
//! environment variables override the service settings on top of that.

use crate::error::TierBoardError;
use crate::filter::DifficultyAliases;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceSettings,
    /// Surface difficulty spelling -> canonical label
    #[serde(default = "default_difficulty_aliases")]
    pub difficulty_aliases: HashMap<String, String>,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "tier-board".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceSettings::default(),
            difficulty_aliases: default_difficulty_aliases(),
        }
    }
}

fn default_difficulty_aliases() -> HashMap<String, String> {
    HashMap::from([("Для новичков".to_string(), "Лёгкий".to_string())])
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to the service settings
    pub fn apply_env_overrides(&mut self) {
        if let Ok(name) = env::var("TIER_BOARD_SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(level) = env::var("TIER_BOARD_LOG_LEVEL") {
            self.service.log_level = level;
        }
    }

    /// Validate settings that cannot be checked by deserialization alone
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.service.log_level.as_str()) {
            return Err(TierBoardError::ConfigurationError {
                message: format!("invalid log level: {}", self.service.log_level),
            }
            .into());
        }
        // Surfaces alias-table problems at startup instead of first use
        self.difficulty_aliases()?;
        Ok(())
    }

    /// Build the validated, immutable alias table from this config
    pub fn difficulty_aliases(&self) -> Result<DifficultyAliases> {
        Ok(DifficultyAliases::new(self.difficulty_aliases.clone())?)
    }
}
