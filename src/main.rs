//! Ffind CLI application entry point
//!
//! An interactive tool that searches a directory tree for files whose name
//! contains a search term, lists the matches, and can reveal an exactly
//! named match in the host file manager.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for everything interactively
//! ffind
//!
//! # Seed the directory prompt
//! ffind /games
//! ```

use ffind::{
    FfindError, cli::Cli, reveal::SystemFileManager, session, ui::TermConsole, walker::TreeWalker,
};

fn main() -> Result<(), FfindError> {
    let cli = Cli::parse_args();
    let mut console = TermConsole::new();
    session::run(&mut console, &SystemFileManager, &TreeWalker, cli.directory)
}
