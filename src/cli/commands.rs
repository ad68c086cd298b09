//! CLI argument definitions using clap

use clap::Parser;

/// phonit - A command-line tool for initializing Git repos
///
/// Creates a GitHub repository, writes a .gitignore, and pushes the current
/// directory as its first commit.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "phonit", version, about, long_about = None)]
pub struct Cli {
    /// Repository name (defaults to the current directory name)
    pub name: Option<String>,

    /// Repository description
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["phonit"]).unwrap();
        assert_eq!(cli, Cli::default());
    }

    #[test]
    fn test_name_and_description() {
        let cli = Cli::try_parse_from(["phonit", "my-app", "demo project"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("my-app"));
        assert_eq!(cli.description.as_deref(), Some("demo project"));
    }

    #[test]
    fn test_too_many_arguments() {
        assert!(Cli::try_parse_from(["phonit", "a", "b", "c"]).is_err());
    }
}
