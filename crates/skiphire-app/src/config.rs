//! Configuration management for skiphire
//!
//! Config stored at: ~/.config/skiphire/config.json

use serde::{Deserialize, Serialize};
use skiphire_source::DEFAULT_BASE_URL;
use skiphire_types::{ConfigError, OutputFormat, Result};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Location postcode for the skip lookup
    #[serde(default = "default_postcode")]
    pub postcode: String,

    /// Location area for the skip lookup
    #[serde(default = "default_area")]
    pub area: String,

    /// Base URL of the skip source API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_postcode() -> String {
    "NR32".to_string()
}

fn default_area() -> String {
    "Lowestoft".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            postcode: default_postcode(),
            area: default_area(),
            base_url: default_base_url(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("skiphire");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Skiphire Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Postcode:       {}", self.postcode)?;
        writeln!(f, "Area:           {}", self.area)?;
        writeln!(f, "Base URL:       {}", self.base_url)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_production_lookup() {
        let config = Config::default();
        assert_eq!(config.postcode, "NR32");
        assert_eq!(config.area, "Lowestoft");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"postcode": "LE10"}"#).unwrap();
        assert_eq!(config.postcode, "LE10");
        assert_eq!(config.area, "Lowestoft");
    }
}
