//! Custom error types for phonit
//!
//! User-friendly error messages for every way a run can be aborted.

use thiserror::Error;

use crate::core::git::GitStep;

/// Main error type for the phonit application
#[derive(Error, Debug)]
pub enum PhonitError {
    /// GitHub rejected the username/password (HTTP 401)
    #[error("Could not log you in. Please try again.\n\n  → Check your username and password.\n  → Accounts with two-factor authentication need a personal access token.")]
    InvalidCredentials(String),

    /// An authorization with the same note already exists (HTTP 422)
    #[error("You already have an access token.\n\n  → Delete the existing 'phonit' token at https://github.com/settings/tokens and run phonit again.")]
    TokenAlreadyExists(String),

    /// Any other authentication failure
    #[error("GitHub authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The create-repository call failed
    #[error("An error occurred while creating the repository: {0}")]
    RepositoryCreation(String),

    /// The create-repository call succeeded but returned no clone URL
    #[error("No valid url was returned for the new repository.")]
    MissingCloneUrl,

    /// One of the local git steps failed
    #[error("An error occurred while setting up the local repository ({step}): {message}")]
    LocalSetup { step: GitStep, message: String },

    /// GitHub API error that was not classified further
    #[error("GitHub API request failed: {0}\n\n  → Check your internet connection.")]
    GitHubApi(String),

    /// Git operation error
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Interactive prompt error
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

impl From<toml::de::Error> for PhonitError {
    fn from(err: toml::de::Error) -> Self {
        PhonitError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for PhonitError {
    fn from(err: toml::ser::Error) -> Self {
        PhonitError::Toml(err.to_string())
    }
}

impl From<dialoguer::Error> for PhonitError {
    fn from(err: dialoguer::Error) -> Self {
        PhonitError::Prompt(err.to_string())
    }
}

impl From<octocrab::Error> for PhonitError {
    fn from(err: octocrab::Error) -> Self {
        crate::github::error_handler::classify_github_error(err)
    }
}

/// Result type alias using PhonitError
pub type Result<T> = std::result::Result<T, PhonitError>;
