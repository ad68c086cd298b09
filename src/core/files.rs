//! Working directory helpers

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Directory git uses to mark a repository
pub const GIT_DIR: &str = ".git";

/// Name of the ignore file phonit writes
pub const IGNORE_FILE: &str = ".gitignore";

/// Base name of a directory, used as the default repository name
pub fn directory_base_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Check whether `dir` already holds a git metadata directory
pub fn is_git_repository(dir: &Path) -> bool {
    dir.join(GIT_DIR).is_dir()
}

/// List entry names of `dir` that may go into the ignore file
///
/// Skips the git metadata directory and any existing ignore file.
/// Names are sorted so the prompt order is stable.
pub fn ignore_candidates(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name != GIT_DIR && name != IGNORE_FILE {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_base_name() {
        assert_eq!(directory_base_name(Path::new("/home/me/my-app")), "my-app");
        assert_eq!(directory_base_name(Path::new("/")), "");
    }

    #[test]
    fn test_is_git_repository() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_git_repository(dir.path()));

        fs::create_dir(dir.path().join(".git")).unwrap();
        assert!(is_git_repository(dir.path()));
    }

    #[test]
    fn test_ignore_candidates_skip_git_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        fs::write(dir.path().join(".gitignore"), "").unwrap();
        fs::write(dir.path().join("README.md"), "hi").unwrap();
        fs::write(dir.path().join(".env"), "A=1").unwrap();

        let names = ignore_candidates(dir.path()).unwrap();
        assert_eq!(names, vec![".env", "README.md", "target"]);
    }

    #[test]
    fn test_ignore_candidates_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ignore_candidates(dir.path()).unwrap().is_empty());
    }
}
