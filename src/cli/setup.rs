//! Local repository setup: init, first commit, remote and push

use crate::cli::ui::Spinner;
use crate::core::files::IGNORE_FILE;
use crate::core::git::{GitStep, SourceControl};
use crate::error::{PhonitError, Result};

/// Message of the first commit
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Name the created repository is registered under
pub const REMOTE_NAME: &str = "origin";

/// Run the fixed setup sequence against `clone_url`
///
/// Stops at the first failing step and reports which one it was.
pub fn setup_repository(git: &mut dyn SourceControl, clone_url: &str) -> Result<()> {
    let spinner = Spinner::start("Setting up the repository...");
    let result = run_steps(git, clone_url);
    spinner.stop();
    result
}

fn run_steps(git: &mut dyn SourceControl, clone_url: &str) -> Result<()> {
    step(GitStep::Init, git.init())?;
    step(GitStep::StageIgnoreFile, git.stage(IGNORE_FILE))?;
    step(GitStep::StageAll, git.stage_all())?;
    let commit = step(GitStep::Commit, git.commit(INITIAL_COMMIT_MESSAGE))?;
    let branch = step(GitStep::ResolveBranch, git.current_branch())?;
    step(GitStep::AddRemote, git.add_remote(REMOTE_NAME, clone_url))?;
    step(GitStep::Push, git.push(REMOTE_NAME, &branch))?;

    tracing::debug!(%commit, %branch, remote = REMOTE_NAME, "repository set up");
    Ok(())
}

fn step<T>(step: GitStep, result: Result<T>) -> Result<T> {
    match result {
        Ok(value) => {
            tracing::debug!(%step, "step completed");
            Ok(value)
        }
        Err(e) => Err(PhonitError::LocalSetup {
            step,
            message: e.to_string(),
        }),
    }
}
