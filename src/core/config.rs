//! Application configuration management
//!
//! Handles loading optional user settings:
//! - GitHub API endpoint (for GitHub Enterprise installations)
//! - Entries preselected in the `.gitignore` prompt

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{PhonitError, Result};

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "PHONIT_CONFIG_DIR";

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Directory entries preselected in the ignore prompt, when present
    #[serde(default = "default_ignores")]
    pub default_ignores: Vec<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_ignores() -> Vec<String> {
    [
        "node_modules",
        "bower_components",
        "target",
        "dist",
        "build",
        ".DS_Store",
        "Thumbs.db",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            default_ignores: default_ignores(),
        }
    }
}

impl Config {
    /// Load configuration from file, or the defaults if it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the configuration directory
    ///
    /// `PHONIT_CONFIG_DIR` takes precedence over the platform directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        let project_dirs = ProjectDirs::from("com", "phonit", "phonit")
            .ok_or_else(|| PhonitError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://api.github.com");
        assert!(config.default_ignores.contains(&"node_modules".to_string()));
        assert!(config.default_ignores.contains(&".DS_Store".to_string()));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_url = \"https://github.example.com/api/v3\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_url, "https://github.example.com/api/v3");
        assert_eq!(config.default_ignores, default_ignores());
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_url = [").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(PhonitError::Toml(_))
        ));
    }
}
