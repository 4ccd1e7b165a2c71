// Configuration module for reading Snake.toml
// Runtime tunables and appearance metadata for the fieldsnake bot

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub engine: EngineConfig,
    pub appearance: AppearanceConfig,
    pub debug: DebugConfig,
}

/// Decision engine constants
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Below this health the objective flips from staying alive to
    /// hunting food
    pub low_health_threshold: i32,
}

/// Metadata returned on GET /
#[derive(Debug, Deserialize, Clone)]
pub struct AppearanceConfig {
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
}

/// Per-turn JSONL decision logging
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            engine: EngineConfig {
                low_health_threshold: 20,
            },
            appearance: AppearanceConfig {
                author: "mheikal".to_string(),
                color: "#00ffff".to_string(),
                head: "silly".to_string(),
                tail: "bwc-ice-skate".to_string(),
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "debug_log.jsonl".to_string(),
            },
        }
    }

    /// Loads Snake.toml, falling back to hardcoded defaults on any error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Snake.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_can_be_created() {
        let config = Config::default_hardcoded();
        assert_eq!(config.engine.low_health_threshold, 20);
        assert!(!config.debug.enabled);
    }

    #[test]
    fn test_snake_toml_can_be_parsed() {
        let result = Config::from_file("Snake.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Snake.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_snake_toml_matches_hardcoded_defaults() {
        let from_file = Config::from_file("Snake.toml").expect("Snake.toml should be parseable");
        let hardcoded = Config::default_hardcoded();
        assert_eq!(
            from_file.engine.low_health_threshold,
            hardcoded.engine.low_health_threshold
        );
        assert_eq!(from_file.appearance.color, hardcoded.appearance.color);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let result = Config::from_file("nonexistent.toml");
        assert!(result.is_err());
    }
}
