//! GitHub API integration module
//!
//! This module provides what phonit needs from the GitHub API:
//! - Exchanging credentials for an access token
//! - Creating a repository
//! - Error classification

pub mod auth;
pub mod client;
pub mod error_handler;
pub mod repository;

pub use auth::{AuthorizationRequest, Credentials};
pub use client::{GitHubApi, GitHubClient};
pub use repository::{CreatedRepository, NewRepository, Visibility};
