//! Top-level application configuration.
//!
//! Configuration is stored in `<config dir>/config.yaml` and includes:
//! - Backend base URL and request timeout
//! - Default listing view and sort order
//!
//! The config dir is `$LOSTFOUND_HOME` when set, otherwise the platform
//! config directory for `lostfound`.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{LostFoundError, Result};
use crate::listing::presenter::{SortOption, ViewMode};

pub const HOME_ENV: &str = "LOSTFOUND_HOME";
pub const API_URL_ENV: &str = "LOSTFOUND_API_URL";

/// Keys accepted by `config set`
pub const VALID_KEYS: &[&str] = &[
    "api_url",
    "request_timeout",
    "default_view",
    "default_sort",
    "grid_columns",
];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Listing layout used when no `--view` is given
    #[serde(default)]
    pub default_view: ViewMode,

    /// Sort order used when no `--sort` is given
    #[serde(default)]
    pub default_sort: SortOption,

    /// Number of columns in grid view
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_grid_columns() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout: default_request_timeout(),
            default_view: ViewMode::default(),
            default_sort: SortOption::default(),
            grid_columns: default_grid_columns(),
        }
    }
}

/// Directory holding `config.yaml` and `session.yaml`
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(home) = env::var(HOME_ENV)
        && !home.is_empty()
    {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("", "", "lostfound")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| LostFoundError::Config("could not determine a config directory".into()))
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found.
    ///
    /// `LOSTFOUND_API_URL` overrides the file's `api_url`.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                LostFoundError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to read config at {}: {}", path.display(), e),
                ))
            })?;
            serde_yaml_ng::from_str::<Config>(&content)?
        } else {
            Config::default()
        };

        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            config.api_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api_url).map_err(|e| {
            LostFoundError::Config(format!("invalid api_url '{}': {}", self.api_url, e))
        })?;
        if self.request_timeout == 0 {
            return Err(LostFoundError::Config(
                "request_timeout must be at least 1 second".into(),
            ));
        }
        if self.grid_columns == 0 {
            return Err(LostFoundError::Config(
                "grid_columns must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Set a single key from its string form.
    ///
    /// A rejected value leaves the config unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        match key {
            "api_url" => next.api_url = value.to_string(),
            "request_timeout" => {
                next.request_timeout = value.parse().map_err(|_| {
                    LostFoundError::Config(format!("request_timeout must be a number, got '{value}'"))
                })?
            }
            "default_view" => next.default_view = value.parse()?,
            "default_sort" => next.default_sort = value.parse()?,
            "grid_columns" => {
                next.grid_columns = value.parse().map_err(|_| {
                    LostFoundError::Config(format!("grid_columns must be a number, got '{value}'"))
                })?
            }
            _ => {
                return Err(LostFoundError::Config(format!(
                    "unknown config key '{key}', expected one of: {}",
                    VALID_KEYS.join(", ")
                )));
            }
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Get a single key as a string
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api_url" => Ok(self.api_url.clone()),
            "request_timeout" => Ok(self.request_timeout.to_string()),
            "default_view" => Ok(self.default_view.to_string()),
            "default_sort" => Ok(self.default_sort.to_string()),
            "grid_columns" => Ok(self.grid_columns.to_string()),
            _ => Err(LostFoundError::Config(format!("unknown config key '{key}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config: Config = serde_yaml_ng::from_str("api_url: https://lf.example.com\n").unwrap();
        assert_eq!(config.api_url, "https://lf.example.com");
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.grid_columns, 3);
        assert_eq!(config.default_view, ViewMode::Grid);
        assert_eq!(config.default_sort, SortOption::Newest);
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = Config::default();
        let err = config.set("api.url", "x").unwrap_err();
        assert!(err.to_string().contains("unknown config key"));
    }

    #[test]
    fn test_set_validates_url_and_columns() {
        let mut config = Config::default();
        assert!(config.set("api_url", "not a url").is_err());
        assert!(config.set("grid_columns", "0").is_err());
        config.set("grid_columns", "4").unwrap();
        assert_eq!(config.get("grid_columns").unwrap(), "4");
        config.set("default_view", "list").unwrap();
        assert_eq!(config.default_view, ViewMode::List);
    }

    #[test]
    fn test_rejected_value_keeps_previous_config() {
        let mut config = Config::default();
        config.set("api_url", "https://lf.example.com").unwrap();

        assert!(config.set("api_url", "not a url").is_err());
        assert_eq!(config.api_url, "https://lf.example.com");

        assert!(config.set("grid_columns", "0").is_err());
        assert_eq!(config.grid_columns, 3);

        // Later unrelated keys still apply
        config.set("grid_columns", "2").unwrap();
        assert_eq!(config.grid_columns, 2);
    }

    #[test]
    fn test_zero_request_timeout_rejected() {
        let mut config = Config::default();
        let err = config.set("request_timeout", "0").unwrap_err();
        assert!(err.to_string().contains("request_timeout"));
        assert_eq!(config.request_timeout, 30);

        let config: Config = serde_yaml_ng::from_str("request_timeout: 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_home_env_redirects_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { env::set_var(HOME_ENV, dir.path()) };
        unsafe { env::remove_var(API_URL_ENV) };

        let mut config = Config::load().unwrap();
        assert_eq!(config.api_url, "http://localhost:8080");
        config.set("request_timeout", "5").unwrap();
        config.save().unwrap();

        assert!(dir.path().join("config.yaml").exists());
        assert_eq!(Config::load().unwrap().request_timeout, 5);
        unsafe { env::remove_var(HOME_ENV) };
    }

    #[test]
    #[serial]
    fn test_api_url_env_overrides_file() {
        let dir = tempfile::TempDir::new().unwrap();
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { env::set_var(HOME_ENV, dir.path()) };
        fs::write(
            dir.path().join("config.yaml"),
            "api_url: https://file.example.com\n",
        )
        .unwrap();

        unsafe { env::set_var(API_URL_ENV, "https://env.example.com") };
        assert_eq!(Config::load().unwrap().api_url, "https://env.example.com");

        unsafe { env::remove_var(API_URL_ENV) };
        assert_eq!(Config::load().unwrap().api_url, "https://file.example.com");
        unsafe { env::remove_var(HOME_ENV) };
    }
}
