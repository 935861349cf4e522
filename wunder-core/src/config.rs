use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::PathBuf};

/// Unit and forecast display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show imperial values (Fahrenheit, mph, inHg). Both unit flags may be
    /// enabled at once; when neither is, both are shown.
    pub imperial: bool,

    /// Show metric values (Celsius, km/h, kPa).
    pub metric: bool,

    /// Include the multi-day forecast after the current conditions.
    pub show_forecast: bool,

    /// How many forecast days to show; 0 shows every day the provider
    /// returns.
    pub forecast_days: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { imperial: true, metric: true, show_forecast: true, forecast_days: 0 }
    }
}

/// Read/write access to the remembered last location per user.
///
/// A query with no location argument falls back to the stored value, and
/// every query overwrites it before any fetch happens.
pub trait LocationStore {
    fn last_location(&self, user: &str) -> Option<String>;
    fn set_last_location(&mut self, user: &str, location: &str);
}

/// In-memory store for embedders and tests.
impl LocationStore for HashMap<String, String> {
    fn last_location(&self, user: &str) -> Option<String> {
        self.get(user).cloned()
    }

    fn set_last_location(&mut self, user: &str, location: &str) {
        self.insert(user.to_string(), location.to_string());
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    /// Example TOML:
    /// [last_locations]
    /// alice = "10001"
    #[serde(default)]
    pub last_locations: HashMap<String, String>,
}

impl LocationStore for Config {
    fn last_location(&self, user: &str) -> Option<String> {
        self.last_locations.get(user).cloned()
    }

    fn set_last_location(&mut self, user: &str, location: &str) {
        self.last_locations.insert(user.to_string(), location.to_string());
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wunder", "wunder-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_defaults_show_everything() {
        let display = DisplayConfig::default();

        assert!(display.imperial);
        assert!(display.metric);
        assert!(display.show_forecast);
        assert_eq!(display.forecast_days, 0);
    }

    #[test]
    fn empty_toml_parses_to_defaults() {
        let cfg: Config = toml::from_str("").expect("empty config must parse");

        assert!(cfg.display.imperial);
        assert!(cfg.last_locations.is_empty());
    }

    #[test]
    fn partial_display_section_keeps_other_defaults() {
        let cfg: Config = toml::from_str("[display]\nmetric = false\n")
            .expect("partial config must parse");

        assert!(cfg.display.imperial);
        assert!(!cfg.display.metric);
        assert_eq!(cfg.display.forecast_days, 0);
    }

    #[test]
    fn last_location_roundtrip() {
        let mut cfg = Config::default();
        assert_eq!(cfg.last_location("alice"), None);

        cfg.set_last_location("alice", "10001");
        assert_eq!(cfg.last_location("alice"), Some("10001".to_string()));

        cfg.set_last_location("alice", "London, UK");
        assert_eq!(cfg.last_location("alice"), Some("London, UK".to_string()));
        assert_eq!(cfg.last_location("bob"), None);
    }

    #[test]
    fn config_serializes_last_locations() {
        let mut cfg = Config::default();
        cfg.set_last_location("alice", "10001");

        let toml = toml::to_string_pretty(&cfg).expect("config must serialize");
        let parsed: Config = toml::from_str(&toml).expect("serialized config must parse");

        assert_eq!(parsed.last_location("alice"), Some("10001".to_string()));
    }
}
