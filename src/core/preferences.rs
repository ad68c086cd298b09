//! Token storage in the local preferences file
//!
//! The GitHub access token obtained on first run is kept in
//! `preferences.toml` inside the application config directory:
//!
//! ```toml
//! [github]
//! token = "..."
//! ```
//!
//! The token is reused on every later run. It is never validated or refreshed.

use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::core::config::Config;
use crate::error::Result;

const PREFERENCES_FILE: &str = "preferences.toml";

/// Storage for the GitHub access token
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore {
    /// Return the cached token, if any
    fn load_token(&self) -> Result<Option<SecretString>>;

    /// Persist a freshly obtained token
    fn save_token(&mut self, token: &SecretString) -> Result<()>;
}

/// On-disk shape of the preferences file
#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    github: Option<GitHubPreferences>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct GitHubPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// Preferences store backed by a TOML file
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    /// Open the store in the application config directory
    pub fn open() -> Result<Self> {
        Ok(Self::at(Config::config_dir()?.join(PREFERENCES_FILE)))
    }

    /// Open a store at an explicit file path
    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read(&self) -> Result<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn write(&self, preferences: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(preferences)?;
        fs::write(&self.path, contents)?;

        // Owner-only: the file holds a repo-scoped token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}

impl TokenStore for PreferencesStore {
    fn load_token(&self) -> Result<Option<SecretString>> {
        let token = self
            .read()?
            .github
            .and_then(|github| github.token)
            .filter(|token| !token.is_empty())
            .map(SecretString::from);
        Ok(token)
    }

    fn save_token(&mut self, token: &SecretString) -> Result<()> {
        let mut preferences = self.read()?;
        preferences
            .github
            .get_or_insert_with(GitHubPreferences::default)
            .token = Some(token.expose_secret().to_string());
        self.write(&preferences)?;
        tracing::debug!(path = %self.path.display(), "stored GitHub token");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_has_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::at(dir.path().join("preferences.toml"));
        assert!(store.load_token().unwrap().is_none());
    }

    #[test]
    fn test_saved_token_is_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let mut store = PreferencesStore::at(&path);
        store
            .save_token(&SecretString::from("ghp_example"))
            .unwrap();

        let reopened = PreferencesStore::at(&path);
        let token = reopened.load_token().unwrap().unwrap();
        assert_eq!(token.expose_secret(), "ghp_example");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[github]"));
        assert!(contents.contains("token = \"ghp_example\""));
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "[github]\ntoken = \"\"\n").unwrap();

        let store = PreferencesStore::at(&path);
        assert!(store.load_token().unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        let mut store = PreferencesStore::at(&path);
        store.save_token(&SecretString::from("secret")).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
