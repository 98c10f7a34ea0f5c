//! Interactive session state machine
//!
//! The loop state (directory root, current query, last result set) is
//! threaded explicitly between transitions instead of living in ambient
//! variables: `AwaitQuery` produces an `AwaitAction` state carrying the
//! query and its results, and `AwaitAction` either consumes them (the
//! reveal action) or discards them by transitioning back to `AwaitQuery`.
//!
//! The directory root is validated exactly once, before the loop starts,
//! and never re-checked even if the filesystem changes underneath.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::FfindError;
use crate::matcher::Query;
use crate::reveal::Reveal;
use crate::ui::Console;
use crate::walker::Walk;

/// ASCII banner printed at startup
pub const BANNER: &str = r"
  __  __ _           _
 / _|/ _(_)_ __   __| |
| |_| |_| | '_ \ / _` |
|  _|  _| | | | | (_| |
|_| |_| |_|_| |_|\__,_|
";

const DIRECTORY_PROMPT: &str = "Enter the directory path: (ex. /games/) ";
const QUERY_PROMPT: &str = "Enter the file name: (ex. virmox.txt) ";
const ACTION_PROMPT: &str = "[1] to open the file\n[2] to exit\n";

/// Session state, threaded explicitly between transitions
enum State {
    AwaitQuery,
    AwaitAction {
        query: Query,
        results: Vec<PathBuf>,
    },
    Done,
}

/// Run one interactive session to completion.
///
/// Prompts for (or validates) the directory root once, then loops over
/// query, results and action until the user chooses to exit.
///
/// # Errors
///
/// Returns `FfindError` only for console failures (e.g. the input stream
/// closing); search and reveal errors are reported and recovered from
/// inside the loop.
pub fn run<C: Console, R: Reveal, W: Walk>(
    console: &mut C,
    reveal: &R,
    walker: &W,
    root_hint: Option<PathBuf>,
) -> Result<(), FfindError> {
    console.line(BANNER)?;
    let root = await_directory(console, root_hint)?;
    let mut state = State::AwaitQuery;
    loop {
        state = match state {
            State::AwaitQuery => await_query(console, walker, &root)?,
            State::AwaitAction { query, results } => {
                await_action(console, reveal, &query, &results)?
            }
            State::Done => return Ok(()),
        };
    }
}

/// AwaitDirectory: loop until an existing path is given.
///
/// A directory passed on the command line goes through the same validation
/// before the first prompt is skipped. Existence is the only requirement;
/// the root does not have to be a directory.
fn await_directory<C: Console>(
    console: &mut C,
    root_hint: Option<PathBuf>,
) -> Result<PathBuf, FfindError> {
    if let Some(root) = root_hint {
        if validate_root(console, &root)? {
            return Ok(root);
        }
    }
    loop {
        let token = console.prompt(DIRECTORY_PROMPT)?;
        let root = PathBuf::from(token);
        if validate_root(console, &root)? {
            return Ok(root);
        }
    }
}

fn validate_root<C: Console>(console: &mut C, root: &Path) -> Result<bool, FfindError> {
    match fs::metadata(root) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            console.clear_screen()?;
            console.error_line("Directory does not exist")?;
            Ok(false)
        }
        Err(_) => {
            console.clear_screen()?;
            console.error_line("Error accessing directory")?;
            Ok(false)
        }
    }
}

/// AwaitQuery: read a search term, run the walk and present the results.
///
/// An aborted walk is reported but not fatal: whatever partial results it
/// produced are presented and the loop continues.
fn await_query<C: Console, W: Walk>(
    console: &mut C,
    walker: &W,
    root: &Path,
) -> Result<State, FfindError> {
    let token = console.prompt(QUERY_PROMPT)?;
    let query = Query::new(&token);

    let results = match walker.walk(root, &query) {
        Ok(files) => files,
        Err(err) => {
            console.clear_screen()?;
            console.line("Could not find files")?;
            console.acknowledge()?;
            err.partial
        }
    };

    if results.is_empty() {
        console.clear_screen()?;
        console.line("Exactly named file not found")?;
        console.acknowledge()?;
    } else {
        console.clear_screen()?;
        console.line("Files found:")?;
        for file in &results {
            console.line(&file.display().to_string())?;
        }
    }
    console.line(&format!("{results:?}"))?;

    Ok(State::AwaitAction { query, results })
}

/// AwaitAction: offer to reveal exact-name matches or exit.
///
/// Unrecognized selectors, including non-numeric input, fall through to
/// the next query prompt without comment.
fn await_action<C: Console, R: Reveal>(
    console: &mut C,
    reveal: &R,
    query: &Query,
    results: &[PathBuf],
) -> Result<State, FfindError> {
    let token = console.prompt(ACTION_PROMPT)?;
    match token.parse::<i32>() {
        Ok(1) => {
            reveal_exact_matches(console, reveal, query, results)?;
            Ok(State::AwaitQuery)
        }
        Ok(2) => {
            console.clear_screen()?;
            console.line("Goodbye")?;
            thread::sleep(Duration::from_secs(1));
            Ok(State::Done)
        }
        _ => Ok(State::AwaitQuery),
    }
}

/// Reveal every result whose base name equals the raw query, reporting
/// each attempt individually.
///
/// A listed file whose name is only a substring match is deliberately not
/// openable this way.
fn reveal_exact_matches<C: Console, R: Reveal>(
    console: &mut C,
    reveal: &R,
    query: &Query,
    results: &[PathBuf],
) -> Result<(), FfindError> {
    for file in results {
        let Some(name) = file.file_name().map(|n| n.to_string_lossy()) else {
            continue;
        };
        if !query.is_exact_name(&name) {
            continue;
        }
        match reveal.reveal(file) {
            Ok(()) => {
                console.clear_screen()?;
                console.line("Opening folder...")?;
                console.acknowledge()?;
            }
            Err(err) => {
                let parent = file.parent().unwrap_or_else(|| Path::new(""));
                console.clear_screen()?;
                console.line(&format!("Error opening folder: {err} ({})", parent.display()))?;
                console.acknowledge()?;
            }
        }
    }
    Ok(())
}
