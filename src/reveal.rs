//! Revealing files in the host file manager
//!
//! The reveal action opens the platform file browser with the target file
//! pre-selected in its containing folder. The capability sits behind a
//! trait so the session logic can be exercised with a mock; the real
//! implementation shells out to the platform file manager and does not
//! wait on the child process.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
#[cfg(any(target_os = "windows", target_os = "macos"))]
use std::process::Command;

use thiserror::Error;

/// Errors that can occur while revealing a file
#[derive(Debug, Error)]
pub enum RevealError {
    /// The file manager process could not be launched
    #[error("Failed to launch file manager: {0}")]
    Launch(#[from] std::io::Error),

    /// No file manager integration exists for this platform
    #[error("Revealing files is not supported on this platform")]
    Unsupported,
}

/// Capability for opening a path's containing folder with the file
/// pre-selected
pub trait Reveal {
    /// Reveal `path` in the host file manager.
    ///
    /// # Errors
    ///
    /// Returns [`RevealError`] if the file manager cannot be launched or
    /// the platform has no integration.
    fn reveal(&self, path: &Path) -> Result<(), RevealError>;
}

/// The host operating system's file manager
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFileManager;

impl Reveal for SystemFileManager {
    #[cfg(target_os = "windows")]
    fn reveal(&self, path: &Path) -> Result<(), RevealError> {
        // Spawned, not waited on: Explorer outlives the session.
        Command::new("explorer").arg("/select,").arg(path).spawn()?;
        Ok(())
    }

    #[cfg(target_os = "macos")]
    fn reveal(&self, path: &Path) -> Result<(), RevealError> {
        Command::new("open").arg("-R").arg(path).spawn()?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    fn reveal(&self, _path: &Path) -> Result<(), RevealError> {
        Err(RevealError::Unsupported)
    }
}

/// Mock reveal capability that records attempts
///
/// Useful for testing session flows without launching a file manager.
#[derive(Debug, Default)]
pub struct MockReveal {
    /// Paths reveal was asked to open, in order
    pub revealed: RefCell<Vec<PathBuf>>,
    /// Whether every attempt should fail
    pub should_fail: bool,
}

impl MockReveal {
    /// Create a mock that succeeds on every attempt
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every attempt
    #[must_use]
    pub fn failing() -> Self {
        Self {
            revealed: RefCell::new(Vec::new()),
            should_fail: true,
        }
    }

    /// Number of reveal attempts recorded
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.revealed.borrow().len()
    }
}

impl Reveal for MockReveal {
    fn reveal(&self, path: &Path) -> Result<(), RevealError> {
        self.revealed.borrow_mut().push(path.to_path_buf());
        if self.should_fail {
            Err(RevealError::Unsupported)
        } else {
            Ok(())
        }
    }
}
