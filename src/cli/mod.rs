//! CLI module for phonit
//!
//! Argument parsing, terminal interaction, and one module per stage of the
//! setup pipeline.

pub mod auth;
pub mod commands;
pub mod create;
pub mod gitignore;
pub mod prompt;
pub mod setup;
pub mod ui;

pub use commands::Cli;
pub use prompt::{Prompter, TerminalPrompter};
