// ABOUTME: Configuration management for the stencil application
// ABOUTME: Handles loading logging preferences from configuration files

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Configuration covers ambient preferences only. Template variables are
// never sourced from here: the inline < JSON < YAML precedence is a closed
// contract.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_yaml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".stencil").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        let possible_paths = [
            PathBuf::from("stencil.yaml"),
            PathBuf::from("stencil.yml"),
            PathBuf::from(".stencil.yaml"),
            PathBuf::from(".stencil.yml"),
        ];

        for path in possible_paths {
            if path.exists() {
                return path;
            }
        }

        // Default path (may not exist)
        PathBuf::from("stencil.yaml")
    }
}
