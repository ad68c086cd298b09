//! Remote repository creation

use secrecy::SecretString;

use crate::cli::prompt::Prompter;
use crate::cli::ui::Spinner;
use crate::error::Result;
use crate::github::client::GitHubApi;
use crate::github::repository::{CreatedRepository, NewRepository, Visibility};

/// Values used to pre-fill the repository prompts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryDefaults {
    pub name: String,
    pub description: Option<String>,
}

/// Ask for the repository details and create it on GitHub
pub async fn create_repository(
    github: &dyn GitHubApi,
    token: &SecretString,
    prompter: &dyn Prompter,
    defaults: &RepositoryDefaults,
) -> Result<CreatedRepository> {
    let repository = prompt_repository(prompter, defaults)?;
    tracing::debug!(name = %repository.name, visibility = %repository.visibility, "creating repository");

    let spinner = Spinner::start("Creating repository...");
    let result = github.create_repository(token, &repository).await;
    spinner.stop();

    result
}

/// Collect name, description and visibility
pub fn prompt_repository(
    prompter: &dyn Prompter,
    defaults: &RepositoryDefaults,
) -> Result<NewRepository> {
    let name = prompter.input(
        "Enter a name for the repository:",
        Some(defaults.name.as_str()),
        Some("Please enter a name for the repo."),
    )?;

    let description = prompter.input(
        "Optional - enter a description of the repo:",
        defaults.description.as_deref(),
        None,
    )?;

    let labels: Vec<String> = Visibility::all()
        .iter()
        .map(|v| v.label().to_string())
        .collect();
    let index = prompter.select("Public or private?", &labels, 0)?;
    let visibility = Visibility::all()
        .get(index)
        .copied()
        .unwrap_or_default();

    Ok(NewRepository {
        name,
        description: Some(description).filter(|d| !d.is_empty()),
        visibility,
    })
}
