//! Terminal output: banner, status lines and spinners

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use indicatif::{ProgressBar, ProgressStyle};

const BANNER: &str = r#"
         __                   _ __
   ____ / /_   ____   ____   (_) /_
  / __ \/ __ \/ __ \ / __ \ / / __/
 / /_/ / / / / /_/ // / / // / /_
/ .___/_/ /_/\____//_/ /_//_/\__/
/_/
"#;

const TAGLINE: &str = "A command-line tool for initializing Git repos";

/// Clear the screen (on a terminal) and print the intro banner
pub fn print_banner() {
    let mut stdout = io::stdout();
    if stdout.is_terminal() {
        if let Err(e) = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0)) {
            tracing::debug!(error = %e, "could not clear the screen");
        }
    }
    println!("{}", BANNER.bold());
    println!("{}\n", TAGLINE.dim());
    let _ = stdout.flush();
}

/// Print a success line in green
pub fn success(message: &str) {
    println!("{}", message.green());
}

/// Print a failure line in red
pub fn failure(message: &str) {
    println!("{}", message.red());
}

/// Spinner shown while waiting on the network or git
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Start spinning with a message
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Stop and remove the spinner line
    pub fn stop(self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
