//! Application configuration and credentials.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the API username.
pub const USERNAME_VAR: &str = "BROWSERSTACK_USERNAME";
/// Environment variable holding the API access key.
pub const ACCESS_KEY_VAR: &str = "BROWSERSTACK_KEY";

/// User-facing configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub search: SearchTuning,
}

impl AppConfig {
    /// Returns the config file path under the platform config directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoHome)?;
        Ok(dir.join("brocat").join("config.toml"))
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let ratio = self.search.good_match_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            errors.push("good_match_ratio must lie in (0, 1]".to_string());
        }

        if self.api.endpoint.trim().is_empty() {
            errors.push("api endpoint must not be empty".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let ratio = self.search.good_match_ratio;
        Self {
            api: if self.api.endpoint.trim().is_empty() {
                defaults.api
            } else {
                self.api.clone()
            },
            cache: self.cache.clone(),
            search: SearchTuning {
                good_match_ratio: if ratio > 0.0 && ratio <= 1.0 {
                    ratio
                } else {
                    defaults.search.good_match_ratio
                },
            },
        }
    }
}

/// Upstream API settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    crate::client::DEFAULT_ENDPOINT.to_string()
}

/// Catalog cache settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_expiry_hours")]
    pub expiry_hours: u64,
}

impl CacheConfig {
    /// Returns the catalog cache file path under the platform cache directory.
    pub fn default_cache_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::cache_dir().ok_or(ConfigError::NoHome)?;
        Ok(dir.join("brocat").join("browsers.json"))
    }

    pub fn expiry(&self) -> Duration {
        Duration::from_secs(self.expiry_hours * 3600)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            expiry_hours: default_expiry_hours(),
        }
    }
}

fn default_expiry_hours() -> u64 {
    24
}

/// Match cutoff tuning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchTuning {
    #[serde(default = "default_good_match_ratio")]
    pub good_match_ratio: f64,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            good_match_ratio: default_good_match_ratio(),
        }
    }
}

fn default_good_match_ratio() -> f64 {
    0.65
}

/// API credentials, read from the environment.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub access_key: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self, ConfigError> {
        let username =
            std::env::var(USERNAME_VAR).map_err(|_| ConfigError::MissingEnv(USERNAME_VAR))?;
        let access_key =
            std::env::var(ACCESS_KEY_VAR).map_err(|_| ConfigError::MissingEnv(ACCESS_KEY_VAR))?;
        Ok(Self {
            username,
            access_key,
        })
    }
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no home directory for the current user")]
    NoHome,

    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.api.endpoint, crate::client::DEFAULT_ENDPOINT);
        assert_eq!(config.cache.expiry_hours, 24);
        assert_eq!(config.search.good_match_ratio, 0.65);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.search.good_match_ratio, 0.65);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = AppConfig {
            search: SearchTuning {
                good_match_ratio: 0.8,
            },
            ..AppConfig::default()
        };

        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();

        assert_eq!(loaded.search.good_match_ratio, 0.8);
        assert_eq!(loaded.cache.expiry_hours, 24);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[cache]\nexpiry_hours = 1\n").unwrap();

        let config = AppConfig::load(&path).unwrap();

        assert_eq!(config.cache.expiry_hours, 1);
        assert_eq!(config.search.good_match_ratio, 0.65);
    }

    #[test]
    fn test_validate_flags_bad_ratio() {
        let config = AppConfig {
            search: SearchTuning {
                good_match_ratio: 1.5,
            },
            ..AppConfig::default()
        };

        let errors = config.validate();

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("good_match_ratio"));
    }

    #[test]
    fn test_with_defaults_for_invalid_restores_ratio() {
        let config = AppConfig {
            search: SearchTuning {
                good_match_ratio: 0.0,
            },
            ..AppConfig::default()
        };

        let fixed = config.with_defaults_for_invalid();

        assert_eq!(fixed.search.good_match_ratio, 0.65);
        assert!(fixed.validate().is_empty());
    }

    #[test]
    fn test_cache_expiry_duration() {
        let cache = CacheConfig { expiry_hours: 2 };
        assert_eq!(cache.expiry(), Duration::from_secs(7200));
    }
}
