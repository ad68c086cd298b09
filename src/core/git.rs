//! Local git repository operations
//!
//! This module provides a wrapper around git2 for the operations phonit
//! runs on a fresh project directory:
//! - Repository initialization
//! - Staging files and creating the first commit
//! - Registering the remote
//! - Pushing (through the system `git` binary)

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use git2::{IndexAddOption, Repository, Signature};

use crate::error::{PhonitError, Result};

/// One step of the local setup sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStep {
    Init,
    StageIgnoreFile,
    StageAll,
    Commit,
    ResolveBranch,
    AddRemote,
    Push,
}

impl GitStep {
    /// Human-readable name of the step
    pub fn describe(&self) -> &'static str {
        match self {
            GitStep::Init => "git init",
            GitStep::StageIgnoreFile => "staging .gitignore",
            GitStep::StageAll => "staging files",
            GitStep::Commit => "creating the initial commit",
            GitStep::ResolveBranch => "resolving the current branch",
            GitStep::AddRemote => "adding the remote",
            GitStep::Push => "git push",
        }
    }
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Local source control operations used by the setup sequence
#[cfg_attr(test, mockall::automock)]
pub trait SourceControl {
    /// Create a new repository in the working directory
    fn init(&mut self) -> Result<()>;

    /// Stage a single path, relative to the working directory
    fn stage(&mut self, path: &str) -> Result<()>;

    /// Stage every file not excluded by the ignore file
    fn stage_all(&mut self) -> Result<()>;

    /// Commit the index, returning the new commit id
    fn commit(&mut self, message: &str) -> Result<String>;

    /// Name of the branch HEAD points to
    fn current_branch(&mut self) -> Result<String>;

    /// Register a remote
    fn add_remote(&mut self, name: &str, url: &str) -> Result<()>;

    /// Push `branch` to `remote` and set it as upstream
    fn push(&mut self, remote: &str, branch: &str) -> Result<()>;
}

/// Wrapper for local git repository operations in one working directory
pub struct GitRepository {
    workdir: PathBuf,
    repo: Option<Repository>,
}

impl GitRepository {
    /// Prepare operations for `workdir`; nothing is created until `init`
    pub fn new<P: AsRef<Path>>(workdir: P) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
            repo: None,
        }
    }

    fn repo(&self) -> Result<&Repository> {
        self.repo
            .as_ref()
            .ok_or_else(|| PhonitError::Custom("Repository has not been initialized".into()))
    }
}

impl SourceControl for GitRepository {
    fn init(&mut self) -> Result<()> {
        let repo = Repository::init(&self.workdir)?;
        tracing::debug!(path = %self.workdir.display(), "initialized repository");
        self.repo = Some(repo);
        Ok(())
    }

    fn stage(&mut self, path: &str) -> Result<()> {
        let mut index = self.repo()?.index()?;
        index.add_path(Path::new(path))?;
        index.write()?;
        Ok(())
    }

    fn stage_all(&mut self) -> Result<()> {
        let mut index = self.repo()?.index()?;
        index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
        index.write()?;
        Ok(())
    }

    fn commit(&mut self, message: &str) -> Result<String> {
        let repo = self.repo()?;
        let mut index = repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        let signature = repo.signature().or_else(|_| {
            // Fallback signature if not configured
            Signature::now("phonit", "phonit@localhost")
        })?;

        // Fresh repositories have an unborn HEAD
        let parent = match repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => None,
            Err(e) => return Err(e.into()),
        };
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let commit_id = repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        Ok(commit_id.to_string())
    }

    fn current_branch(&mut self) -> Result<String> {
        let repo = self.repo()?;
        match repo.head() {
            Ok(head) => Ok(head.shorthand().unwrap_or("HEAD").to_string()),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
                // HEAD is a symbolic ref to the branch that will be born
                let head = repo.find_reference("HEAD")?;
                let target = head.symbolic_target().unwrap_or("refs/heads/master");
                Ok(target
                    .strip_prefix("refs/heads/")
                    .unwrap_or(target)
                    .to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn add_remote(&mut self, name: &str, url: &str) -> Result<()> {
        self.repo()?.remote(name, url)?;
        Ok(())
    }

    /// Uses system git so credential helpers and SSH agents apply
    fn push(&mut self, remote: &str, branch: &str) -> Result<()> {
        let output = Command::new("git")
            .args(["push", "-u", remote, branch])
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| PhonitError::Custom(format!("Failed to execute git push: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PhonitError::Custom(format!("Push failed: {}", stderr.trim())));
        }

        Ok(())
    }
}
