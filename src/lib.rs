//! Ffind - an interactive file finder
//!
//! This library provides the building blocks for the `ffind` binary: query
//! normalization, recursive directory traversal with a progress spinner,
//! a file-manager reveal capability, and the interactive session that
//! drives them.

use thiserror::Error;

pub mod cli;
pub mod matcher;
pub mod reveal;
pub mod session;
pub mod spinner;
pub mod ui;
pub mod walker;

/// Error enum, contains the failure states that can escape the session
///
/// Traversal and reveal failures are reported and recovered from inside
/// the interaction loop; only console failures terminate the program.
#[derive(Debug, Error)]
pub enum FfindError {
    /// Console error
    #[error("Console error: {0}")]
    Ui(#[from] ui::UiError),
}
