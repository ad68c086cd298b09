//! phonit - automates the first minutes of a new project
//!
//! Creates a GitHub repository, seeds a `.gitignore`, and pushes the current
//! directory as the first commit, driven by a short series of prompts.

pub mod app;
pub mod cli;
pub mod core;
pub mod error;
pub mod github;

pub use error::{PhonitError, Result};
