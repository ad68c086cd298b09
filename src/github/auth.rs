//! Username/password exchange for a personal access token
//!
//! Uses the OAuth Authorizations API (`POST /authorizations`) with basic
//! authentication. The token it returns is stored and reused for every later
//! API call.
//! See: https://docs.github.com/en/rest/oauth-authorizations

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Scopes requested for the phonit token
pub const TOKEN_SCOPES: &[&str] = &["user", "public_repo", "repo", "repo:status"];

/// Note attached to the token so users can recognize it in their settings
pub const TOKEN_NOTE: &str = "phonit, a command-line tool for initializing Git repos";

/// Username and password, held only for the duration of the exchange
#[derive(Debug)]
pub struct Credentials {
    /// GitHub username or email address
    pub username: String,
    /// Account password
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Authorization request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationRequest {
    /// Requested scopes
    pub scopes: Vec<String>,
    /// Human-readable label for the token
    pub note: String,
}

impl AuthorizationRequest {
    pub fn new(scopes: &[&str], note: &str) -> Self {
        Self {
            scopes: scopes.iter().map(|s| s.to_string()).collect(),
            note: note.to_string(),
        }
    }
}

impl Default for AuthorizationRequest {
    fn default() -> Self {
        Self::new(TOKEN_SCOPES, TOKEN_NOTE)
    }
}

/// Authorization response from GitHub
#[derive(Debug, Deserialize)]
pub struct AuthorizationResponse {
    /// The access token; GitHub omits it for some legacy responses
    #[serde(default)]
    pub token: Option<String>,
    /// Granted scopes
    #[serde(default)]
    pub scopes: Vec<String>,
}
