//! Console abstraction layer
//!
//! The interactive session talks to the terminal through the [`Console`]
//! trait so the whole state machine can be exercised in tests with a
//! scripted mock. Input follows the original tool's read semantics: one
//! whitespace-delimited token per prompt, so a single input line can feed
//! several prompts in a row.

mod error;
pub mod mock;
mod terminal;

pub use error::{Result, UiError};
pub use mock::MockConsole;
pub use terminal::TermConsole;

/// Trait for interactive console operations
pub trait Console {
    /// Print a prompt and read the next whitespace-delimited input token.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if output fails or the input stream ends.
    fn prompt(&mut self, prompt: &str) -> Result<String>;

    /// Print a line of normal output.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if output fails.
    fn line(&mut self, text: &str) -> Result<()>;

    /// Print an error line.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if output fails.
    fn error_line(&mut self, text: &str) -> Result<()>;

    /// Clear the screen and move the cursor home.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be controlled.
    fn clear_screen(&mut self) -> Result<()>;

    /// Block until the user acknowledges with any input token.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the input stream ends.
    fn acknowledge(&mut self) -> Result<()>;
}
