//! Command-line interface definitions and parsing
//!
//! `ffind` is prompt-driven: the directory, the search term and the action
//! selector are all read interactively. The only argument is an optional
//! directory that seeds the first prompt; when it is omitted or does not
//! exist the tool falls back to prompting for one.

use clap::Parser;
use std::path::PathBuf;

/// Interactive file finder
#[derive(Parser, Debug)]
#[command(
    name = "ffind",
    version,
    about = "Find files by name and reveal them in the system file manager"
)]
pub struct Cli {
    /// Directory to search; prompted for interactively when omitted
    pub directory: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::parse_from(["ffind"]);
        assert!(cli.directory.is_none());
    }

    #[test]
    fn test_directory_argument() {
        let cli = Cli::parse_from(["ffind", "/tmp"]);
        assert_eq!(cli.directory, Some(PathBuf::from("/tmp")));
    }
}
