//! Interactive prompts
//!
//! All user input goes through the `Prompter` trait so the pipeline can be
//! driven by a script in tests. The terminal implementation uses dialoguer.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Password, Select};

use crate::error::Result;

/// Source of interactive answers
pub trait Prompter {
    /// Free text input
    ///
    /// When `required` is set, empty input is rejected with that message and
    /// the prompt is shown again. An empty answer accepts `default`.
    fn input(&self, prompt: &str, default: Option<&str>, required: Option<&str>)
        -> Result<String>;

    /// Hidden input, re-prompting with `empty_message` until non-empty
    fn password(&self, prompt: &str, empty_message: &str) -> Result<String>;

    /// Single choice, returning the selected index
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Multiple choice, returning the selected indices
    fn multi_select(&self, prompt: &str, items: &[String], defaults: &[bool])
        -> Result<Vec<usize>>;
}

/// Reject blank answers with `message`
pub(crate) fn require_non_empty(value: &str, message: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Prompter for an interactive terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        required: Option<&str>,
    ) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);

        if let Some(default) = default.filter(|d| !d.is_empty()) {
            input = input.default(default.to_string());
        }

        if let Some(message) = required {
            let message = message.to_string();
            input = input.validate_with(move |value: &String| -> std::result::Result<(), String> {
                require_non_empty(value, &message)
            });
        }

        Ok(input.interact_text()?.trim().to_string())
    }

    fn password(&self, prompt: &str, empty_message: &str) -> Result<String> {
        loop {
            let value = Password::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()?;

            match require_non_empty(&value, empty_message) {
                Ok(()) => return Ok(value),
                Err(message) => eprintln!("{}", message),
            }
        }
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?;
        Ok(index)
    }

    fn multi_select(
        &self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>> {
        let indices = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .interact()?;
        Ok(indices)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty_rejects_blank() {
        assert_eq!(
            require_non_empty("", "Please enter your password."),
            Err("Please enter your password.".to_string())
        );
        assert!(require_non_empty("   ", "blank").is_err());
    }

    #[test]
    fn test_require_non_empty_accepts_text() {
        assert_eq!(require_non_empty("octocat", "unused"), Ok(()));
        assert_eq!(require_non_empty(" my-app ", "unused"), Ok(()));
    }
}
