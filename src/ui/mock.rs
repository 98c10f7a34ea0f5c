//! Mock console for testing
//!
//! Drives the interactive session from a scripted list of input tokens and
//! records everything that would have been printed, allowing tests to run
//! without user interaction.

use std::collections::VecDeque;

use super::Console;
use super::error::{Result, UiError};

/// Console implementation backed by predetermined input tokens
#[derive(Debug, Default)]
pub struct MockConsole {
    tokens: VecDeque<String>,
    /// Everything printed, in order: prompts, lines and error lines
    pub output: Vec<String>,
    /// Number of screen clears requested
    pub clears: usize,
}

impl MockConsole {
    /// Create a mock console that will serve the given input tokens
    #[must_use]
    pub fn new(tokens: &[&str]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| (*t).to_string()).collect(),
            output: Vec::new(),
            clears: 0,
        }
    }

    /// True if some recorded output contains `needle`
    #[must_use]
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|text| text.contains(needle))
    }
}

impl Console for MockConsole {
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        self.output.push(prompt.to_string());
        self.tokens.pop_front().ok_or(UiError::Eof)
    }

    fn line(&mut self, text: &str) -> Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn error_line(&mut self, text: &str) -> Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn acknowledge(&mut self) -> Result<()> {
        self.tokens.pop_front().map(|_| ()).ok_or(UiError::Eof)
    }
}
