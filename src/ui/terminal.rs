//! Terminal-backed console
//!
//! Prompts are printed in green and validation errors in red, matching the
//! tool's original color scheme. Input is tokenized on whitespace: a line
//! containing several tokens feeds several prompts before more input is
//! read from stdin.

use std::collections::VecDeque;
use std::io::{self, Write};

use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use super::Console;
use super::error::{Result, UiError};

/// Console implementation over stdin/stdout
#[derive(Debug, Default)]
pub struct TermConsole {
    tokens: VecDeque<String>,
}

impl TermConsole {
    /// Create a new terminal console
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                return Err(UiError::Eof);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl Console for TermConsole {
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt.green())?;
        stdout.flush()?;
        self.next_token()
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(io::stdout(), "{text}")?;
        Ok(())
    }

    fn error_line(&mut self, text: &str) -> Result<()> {
        writeln!(io::stdout(), "{}", text.red())?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn acknowledge(&mut self) -> Result<()> {
        self.next_token().map(|_| ())
    }
}
