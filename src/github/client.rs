//! GitHub API client wrapper using octocrab

use async_trait::async_trait;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{PhonitError, Result};
use crate::github::auth::{AuthorizationRequest, AuthorizationResponse, Credentials};
use crate::github::error_handler::{classify_authorization_error, classify_repository_error};
use crate::github::repository::{CreatedRepository, NewRepository};

/// The two GitHub endpoints phonit consumes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Exchange a username and password for an access token
    async fn create_authorization(
        &self,
        credentials: &Credentials,
        request: &AuthorizationRequest,
    ) -> Result<SecretString>;

    /// Create a repository for the authenticated user
    async fn create_repository(
        &self,
        token: &SecretString,
        repository: &NewRepository,
    ) -> Result<CreatedRepository>;
}

/// GitHub API client backed by octocrab
///
/// A new octocrab instance is built per call, since the exchange uses basic
/// authentication and everything after it uses the token.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    base_uri: String,
}

impl GitHubClient {
    /// Create a client for the given API base URL
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
        }
    }

    fn with_basic_auth(&self, credentials: &Credentials) -> Result<Octocrab> {
        let octocrab = Octocrab::builder()
            .base_uri(self.base_uri.as_str())?
            .basic_auth(
                credentials.username.clone(),
                credentials.password.expose_secret().to_string(),
            )
            .build()?;
        Ok(octocrab)
    }

    fn with_token(&self, token: &SecretString) -> Result<Octocrab> {
        let octocrab = Octocrab::builder()
            .base_uri(self.base_uri.as_str())?
            .personal_token(token.expose_secret().to_string())
            .build()?;
        Ok(octocrab)
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn create_authorization(
        &self,
        credentials: &Credentials,
        request: &AuthorizationRequest,
    ) -> Result<SecretString> {
        let octocrab = self.with_basic_auth(credentials)?;

        // GitHub API: POST /authorizations
        let response: AuthorizationResponse = octocrab
            .post("/authorizations", Some(request))
            .await
            .map_err(classify_authorization_error)?;

        tracing::debug!(scopes = ?response.scopes, "authorization created");

        response
            .token
            .filter(|token| !token.is_empty())
            .map(SecretString::from)
            .ok_or_else(|| {
                PhonitError::AuthenticationFailed("GitHub did not return a token".to_string())
            })
    }

    async fn create_repository(
        &self,
        token: &SecretString,
        repository: &NewRepository,
    ) -> Result<CreatedRepository> {
        let octocrab = self.with_token(token)?;

        // GitHub API: POST /user/repos
        let created: CreatedRepository = octocrab
            .post("/user/repos", Some(&repository.to_request()))
            .await
            .map_err(classify_repository_error)?;

        tracing::debug!(full_name = ?created.full_name, "repository created");
        Ok(created)
    }
}
