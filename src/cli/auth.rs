//! Credential resolution
//!
//! Returns the cached GitHub token, or asks for a username and password and
//! exchanges them for a new token which is then cached.

use secrecy::SecretString;

use crate::cli::prompt::Prompter;
use crate::cli::ui::Spinner;
use crate::core::preferences::TokenStore;
use crate::error::Result;
use crate::github::auth::{AuthorizationRequest, Credentials};
use crate::github::client::GitHubApi;

/// Produce an access token, from the cache or by interactive exchange
pub async fn resolve_token(
    store: &mut dyn TokenStore,
    github: &dyn GitHubApi,
    prompter: &dyn Prompter,
) -> Result<SecretString> {
    if let Some(token) = store.load_token()? {
        tracing::debug!("using cached GitHub token");
        return Ok(token);
    }

    let credentials = prompt_credentials(prompter)?;

    let spinner = Spinner::start("Authenticating you, please wait...");
    let result = github
        .create_authorization(&credentials, &AuthorizationRequest::default())
        .await;
    spinner.stop();

    let token = result?;
    store.save_token(&token)?;
    Ok(token)
}

/// Ask for a username and password, both required
fn prompt_credentials(prompter: &dyn Prompter) -> Result<Credentials> {
    let username = prompter.input(
        "Enter your Github username or email address:",
        None,
        Some("Please enter your username or email address."),
    )?;
    let password = prompter.password("Enter your password:", "Please enter your password.")?;

    Ok(Credentials::new(username, password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::scripted::{Answer, ScriptedPrompter};
    use crate::core::preferences::MockTokenStore;
    use crate::error::PhonitError;
    use crate::github::auth::{TOKEN_NOTE, TOKEN_SCOPES};
    use crate::github::client::MockGitHubApi;
    use secrecy::ExposeSecret;

    #[tokio::test]
    async fn test_cached_token_skips_prompt_and_exchange() {
        let mut store = MockTokenStore::new();
        store
            .expect_load_token()
            .times(1)
            .returning(|| Ok(Some(SecretString::from("cached"))));
        store.expect_save_token().never();

        let mut github = MockGitHubApi::new();
        github.expect_create_authorization().never();

        let prompter = ScriptedPrompter::new(vec![]);

        let token = resolve_token(&mut store, &github, &prompter).await.unwrap();
        assert_eq!(token.expose_secret(), "cached");
        assert!(prompter.asked().is_empty());
    }

    #[tokio::test]
    async fn test_exchange_once_and_persist_once() {
        let mut store = MockTokenStore::new();
        store.expect_load_token().times(1).returning(|| Ok(None));
        store
            .expect_save_token()
            .withf(|token| token.expose_secret() == "fresh")
            .times(1)
            .returning(|_| Ok(()));

        let mut github = MockGitHubApi::new();
        github
            .expect_create_authorization()
            .withf(|credentials, request| {
                credentials.username == "octocat"
                    && credentials.password.expose_secret() == "hunter2"
                    && request.note == TOKEN_NOTE
                    && request.scopes.len() == TOKEN_SCOPES.len()
            })
            .times(1)
            .returning(|_, _| Ok(SecretString::from("fresh")));

        let prompter =
            ScriptedPrompter::new(vec![Answer::Text("octocat"), Answer::Text("hunter2")]);

        let token = resolve_token(&mut store, &github, &prompter).await.unwrap();
        assert_eq!(token.expose_secret(), "fresh");
        assert_eq!(prompter.asked().len(), 2);
    }

    #[tokio::test]
    async fn test_blank_credentials_are_asked_again() {
        let mut store = MockTokenStore::new();
        store.expect_load_token().returning(|| Ok(None));
        store.expect_save_token().times(1).returning(|_| Ok(()));

        let mut github = MockGitHubApi::new();
        github
            .expect_create_authorization()
            .withf(|credentials, _| {
                credentials.username == "octocat"
                    && credentials.password.expose_secret() == "hunter2"
            })
            .times(1)
            .returning(|_, _| Ok(SecretString::from("fresh")));

        let prompter = ScriptedPrompter::new(vec![
            Answer::Text(""),
            Answer::Text("octocat"),
            Answer::Text(""),
            Answer::Text("hunter2"),
        ]);

        resolve_token(&mut store, &github, &prompter).await.unwrap();

        let prompts: Vec<_> = prompter.asked().into_iter().map(|a| a.prompt).collect();
        assert_eq!(
            prompts,
            vec![
                "Enter your Github username or email address:",
                "Enter your Github username or email address:",
                "Enter your password:",
                "Enter your password:",
            ]
        );
        assert_eq!(
            prompter.rejected(),
            vec![
                "Please enter your username or email address.",
                "Please enter your password.",
            ]
        );
        assert_eq!(prompter.remaining(), 0);
    }

    #[tokio::test]
    async fn test_failed_exchange_is_not_persisted() {
        let mut store = MockTokenStore::new();
        store.expect_load_token().returning(|| Ok(None));
        store.expect_save_token().never();

        let mut github = MockGitHubApi::new();
        github
            .expect_create_authorization()
            .times(1)
            .returning(|_, _| Err(PhonitError::InvalidCredentials("Bad credentials".into())));

        let prompter =
            ScriptedPrompter::new(vec![Answer::Text("octocat"), Answer::Text("wrong")]);

        let err = resolve_token(&mut store, &github, &prompter)
            .await
            .unwrap_err();
        assert!(matches!(err, PhonitError::InvalidCredentials(_)));
    }
}
