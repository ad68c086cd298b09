//! phonit - A command-line tool for initializing Git repos
//!
//! Run inside a new project directory. Optionally pass the repository name
//! and description: `phonit [NAME] [DESCRIPTION]`.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use phonit::app::{App, Context, Outcome, Stage, ALREADY_INITIALIZED};
use phonit::cli::{ui, Cli, TerminalPrompter};
use phonit::core::files::is_git_repository;
use phonit::core::{Config, GitRepository, PreferencesStore};
use phonit::error::Result;
use phonit::github::GitHubClient;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    ui::print_banner();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            ui::failure(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let workdir = std::env::current_dir()?;

    // Nothing is loaded, asked or written inside an existing repository
    if is_git_repository(&workdir) {
        tracing::debug!(stage = %Stage::CheckExisting, "already a git repository");
        ui::failure(ALREADY_INITIALIZED);
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::load()?;

    let context = Context {
        defaults: Context::repository_defaults(&cli, &workdir),
        github: Box::new(GitHubClient::new(config.api_url.clone())),
        preferences: Box::new(PreferencesStore::open()?),
        workdir: workdir.clone(),
        config,
    };

    let prompter = TerminalPrompter::new();
    let mut git = GitRepository::new(&workdir);
    let mut app = App::new(context, &prompter, &mut git);

    match app.run().await {
        Ok(Outcome::AlreadyInitialized) => {
            ui::failure(ALREADY_INITIALIZED);
            Ok(ExitCode::SUCCESS)
        }
        Ok(Outcome::Completed { html_url, .. }) => {
            if let Some(url) = html_url {
                println!("Repository: {}", url);
            }
            ui::success("All done!");
            Ok(ExitCode::SUCCESS)
        }
        Err(abort) => {
            tracing::debug!(stage = %abort.stage, "run aborted");
            ui::failure(&abort.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}
