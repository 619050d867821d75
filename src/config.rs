use color_eyre::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Overrides `server.base_url` when set
pub const BASE_URL_ENV: &str = "CONFUSION_BASE_URL";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dish API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Config {
    /// Loads configuration from disk or creates default if not found
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.apply_base_url_override(&base_url);
        }
        Ok(config)
    }

    /// Loads configuration from `path`, writing defaults there when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    fn apply_base_url_override(&mut self, base_url: &str) {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return;
        }
        info!(base_url = trimmed, "base url overridden from {}", BASE_URL_ENV);
        self.server.base_url = trimmed.to_string();
    }

    /// Returns the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Log file location, from config or the platform data directory
    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.logging.file {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_local_dir().join("confusion.log")),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "confusion")
        .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(path.exists());
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nbase_url = \"http://menu.test/\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.server.base_url, "http://menu.test/");
        assert_eq!(config.server.timeout_secs, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "server = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_base_url_override_ignores_blank() {
        let mut config = Config::default();
        config.apply_base_url_override("   ");
        assert_eq!(config.server.base_url, "http://localhost:3000/");
        config.apply_base_url_override(" http://other:8080/ ");
        assert_eq!(config.server.base_url, "http://other:8080/");
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let server = ServerConfig {
            base_url: String::new(),
            timeout_secs: 0,
        };
        assert_eq!(server.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_explicit_log_path_wins() {
        let mut config = Config::default();
        config.logging.file = Some(PathBuf::from("/tmp/menu.log"));
        assert_eq!(config.log_path().unwrap(), PathBuf::from("/tmp/menu.log"));
    }
}
