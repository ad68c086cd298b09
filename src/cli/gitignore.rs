//! `.gitignore` builder
//!
//! Offers the entries of the working directory for selection and writes the
//! chosen names to `.gitignore`. A `.gitignore` is always left in place, even
//! when nothing is selected.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::cli::prompt::Prompter;
use crate::core::files::{ignore_candidates, IGNORE_FILE};
use crate::error::Result;

/// Let the user pick entries to ignore and write the ignore file
///
/// Returns the path of the ignore file.
pub fn build_ignore_file(
    workdir: &Path,
    prompter: &dyn Prompter,
    default_ignores: &[String],
) -> Result<PathBuf> {
    let candidates = ignore_candidates(workdir)?;

    let selected = if candidates.is_empty() {
        Vec::new()
    } else {
        let defaults = preselection(&candidates, default_ignores);
        prompter
            .multi_select(
                "Select the files and/or folders you wish to ignore:",
                &candidates,
                &defaults,
            )?
            .into_iter()
            .filter_map(|index| candidates.get(index).cloned())
            .collect()
    };

    tracing::debug!(count = selected.len(), "writing ignore file");
    write_ignore_file(workdir, &selected)
}

/// Mark the candidates that appear in the configured defaults
pub fn preselection(candidates: &[String], default_ignores: &[String]) -> Vec<bool> {
    candidates
        .iter()
        .map(|name| default_ignores.contains(name))
        .collect()
}

/// Write the newline-joined selection, or touch an empty ignore file
pub fn write_ignore_file(workdir: &Path, selected: &[String]) -> Result<PathBuf> {
    let path = workdir.join(IGNORE_FILE);

    if selected.is_empty() {
        // Touch: keep any existing content
        OpenOptions::new().create(true).append(true).open(&path)?;
    } else {
        fs::write(&path, selected.join("\n"))?;
    }

    Ok(path)
}
