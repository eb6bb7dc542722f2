//! TOML-based application configuration.
//!
//! Stores the backend endpoint and dashboard defaults at
//! `~/.config/investlens/config.toml`. Every field is serde-defaulted so a
//! partial (or absent) file still loads.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Dashboard view defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_ticker")]
    pub default_ticker: String,
    #[serde(default = "default_period")]
    pub default_period: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_ticker: default_ticker(),
            default_period: default_period(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/investlens/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

// Default functions
fn default_base_url() -> String {
    "http://localhost:5000".into()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_ticker() -> String {
    "AAPL".into()
}
fn default_period() -> String {
    "1y".into()
}

impl Config {
    /// Path of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("investlens").join("config.toml"))
    }

    /// Load from the default path; a missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save to the default path, creating parent directories.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read a value by dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api.base_url" => Some(self.api.base_url.clone()),
            "api.timeout_secs" => Some(self.api.timeout_secs.to_string()),
            "dashboard.default_ticker" => Some(self.dashboard.default_ticker.clone()),
            "dashboard.default_period" => Some(self.dashboard.default_period.clone()),
            _ => None,
        }
    }

    /// Set a value by dotted key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "api.base_url" => {
                url::Url::parse(value).map_err(|e| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
                self.api.base_url = value.to_string();
            }
            "api.timeout_secs" => {
                self.api.timeout_secs =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("'{value}' is not a positive integer"),
                    })?;
            }
            "dashboard.default_ticker" => {
                self.dashboard.default_ticker = value.trim().to_uppercase();
            }
            "dashboard.default_period" => {
                self.dashboard.default_period = value.to_string();
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.dashboard.default_ticker, "AAPL");
        assert_eq!(config.dashboard.default_period, "1y");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[api]\nbase_url = \"http://api.example.com\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://api.example.com");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.dashboard.default_ticker, "AAPL");
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut config = Config::default();
        config.set("dashboard.default_ticker", "googl").unwrap();
        assert_eq!(config.get("dashboard.default_ticker").unwrap(), "GOOGL");

        config.set("api.timeout_secs", "30").unwrap();
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_set_rejects_bad_url() {
        let mut config = Config::default();
        assert!(config.set("api.base_url", "not a url").is_err());
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("nope", "x"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set("api.base_url", "http://10.0.0.2:8080").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.base_url, "http://10.0.0.2:8080");
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded.api.base_url, "http://localhost:5000");
    }
}
