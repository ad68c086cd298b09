//! Setup pipeline
//!
//! Runs the stages of a phonit invocation in order:
//!
//! `check-existing → authenticate → create-remote → build-ignore → init-and-push`
//!
//! Each stage must succeed before the next one starts. A failure stops the
//! pipeline and is returned as an [`Abort`] naming the stage it happened in.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cli::auth::resolve_token;
use crate::cli::commands::Cli;
use crate::cli::create::{create_repository, RepositoryDefaults};
use crate::cli::gitignore::build_ignore_file;
use crate::cli::prompt::Prompter;
use crate::cli::setup::setup_repository;
use crate::cli::ui;
use crate::core::config::Config;
use crate::core::files::{directory_base_name, is_git_repository};
use crate::core::git::SourceControl;
use crate::core::preferences::TokenStore;
use crate::error::{PhonitError, Result};
use crate::github::client::GitHubApi;

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CheckExisting,
    Authenticate,
    CreateRemote,
    BuildIgnore,
    InitAndPush,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::CheckExisting => "check-existing",
            Stage::Authenticate => "authenticate",
            Stage::CreateRemote => "create-remote",
            Stage::BuildIgnore => "build-ignore",
            Stage::InitAndPush => "init-and-push",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shown when the working directory already is a git repository
pub const ALREADY_INITIALIZED: &str = "Git repo already exists!";

/// How a run that was not aborted ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The directory already was a git repository; nothing was done
    AlreadyInitialized,
    /// Repository created, committed and pushed
    Completed {
        clone_url: String,
        html_url: Option<String>,
    },
}

/// A failed run: the stage that failed and why
#[derive(Debug, Error)]
#[error("{error}")]
pub struct Abort {
    pub stage: Stage,
    pub error: PhonitError,
}

/// Process-wide collaborators, built once at startup
pub struct Context {
    /// Directory being turned into a repository
    pub workdir: PathBuf,
    pub config: Config,
    /// Pre-fill values for the repository prompts
    pub defaults: RepositoryDefaults,
    pub preferences: Box<dyn TokenStore>,
    pub github: Box<dyn GitHubApi>,
}

impl Context {
    /// Repository defaults from the positional arguments, falling back to
    /// the working directory's name
    pub fn repository_defaults(cli: &Cli, workdir: &Path) -> RepositoryDefaults {
        RepositoryDefaults {
            name: cli
                .name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| directory_base_name(workdir)),
            description: cli.description.clone(),
        }
    }
}

/// One phonit run
pub struct App<'a> {
    context: Context,
    prompter: &'a dyn Prompter,
    git: &'a mut dyn SourceControl,
}

impl<'a> App<'a> {
    pub fn new(
        context: Context,
        prompter: &'a dyn Prompter,
        git: &'a mut dyn SourceControl,
    ) -> Self {
        Self {
            context,
            prompter,
            git,
        }
    }

    /// Run every stage in order
    pub async fn run(&mut self) -> std::result::Result<Outcome, Abort> {
        tracing::debug!(stage = %Stage::CheckExisting, workdir = %self.context.workdir.display());
        if is_git_repository(&self.context.workdir) {
            return Ok(Outcome::AlreadyInitialized);
        }

        tracing::debug!(stage = %Stage::Authenticate);
        let token = checked(
            Stage::Authenticate,
            resolve_token(
                self.context.preferences.as_mut(),
                self.context.github.as_ref(),
                self.prompter,
            )
            .await,
        )?;
        ui::success("Authentication successful!");

        tracing::debug!(stage = %Stage::CreateRemote);
        let created = checked(
            Stage::CreateRemote,
            create_repository(
                self.context.github.as_ref(),
                &token,
                self.prompter,
                &self.context.defaults,
            )
            .await,
        )?;
        let clone_url = checked(
            Stage::CreateRemote,
            created
                .clone_url()
                .map(str::to_string)
                .ok_or(PhonitError::MissingCloneUrl),
        )?;

        tracing::debug!(stage = %Stage::BuildIgnore);
        checked(
            Stage::BuildIgnore,
            build_ignore_file(
                &self.context.workdir,
                self.prompter,
                &self.context.config.default_ignores,
            ),
        )?;

        tracing::debug!(stage = %Stage::InitAndPush);
        checked(Stage::InitAndPush, setup_repository(self.git, &clone_url))?;

        Ok(Outcome::Completed {
            clone_url,
            html_url: created.html_url,
        })
    }
}

/// Turn a stage failure into an abort
fn checked<T>(stage: Stage, result: Result<T>) -> std::result::Result<T, Abort> {
    result.map_err(|error| {
        tracing::debug!(%stage, %error, "aborting");
        Abort { stage, error }
    })
}
