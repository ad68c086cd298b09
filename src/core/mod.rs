//! Core functionality for phonit
//!
//! This module contains the local side of the tool:
//! - Application configuration
//! - Token preferences store
//! - Working directory helpers
//! - Git repository operations

pub mod config;
pub mod files;
pub mod git;
pub mod preferences;

pub use config::Config;
pub use git::{GitRepository, GitStep, SourceControl};
pub use preferences::{PreferencesStore, TokenStore};
