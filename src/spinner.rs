//! Search progress indicator
//!
//! A single status line overwritten in place while a walk is running. The
//! spinner runs on its own thread and shares no data with the search;
//! `stop` sends a one-shot signal and joins the thread after it has
//! cleared the line, so whatever is printed next starts on a clean line.

use std::io::{self, Write};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, Sender, bounded};

const FRAMES: [&str; 4] = [
    "Searching |",
    "Searching /",
    "Searching -",
    "Searching \\",
];

const FRAME_INTERVAL: Duration = Duration::from_millis(500);

/// Handle to a running spinner thread
#[derive(Debug)]
pub struct Spinner {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

impl Spinner {
    /// Spawn the spinner thread and start animating
    #[must_use]
    pub fn start() -> Self {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let handle = thread::spawn(move || {
            let mut frame = 0;
            loop {
                render(FRAMES[frame]);
                frame = (frame + 1) % FRAMES.len();
                match stop_rx.recv_timeout(FRAME_INTERVAL) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            clear_line();
        });
        Self { stop_tx, handle }
    }

    /// Signal the spinner to stop and wait for it to clear its line
    pub fn stop(self) {
        let _ = self.stop_tx.send(());
        let _ = self.handle.join();
    }
}

fn render(text: &str) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\r{text}");
    let _ = stdout.flush();
}

fn clear_line() {
    let blanks = " ".repeat(FRAMES[0].len());
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\r{blanks}\r");
    let _ = stdout.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_stop_joins_promptly() {
        let spinner = Spinner::start();
        let started = Instant::now();
        spinner.stop();
        // The stop signal must be observed before the next frame renders.
        assert!(started.elapsed() < FRAME_INTERVAL * 2);
    }

    #[test]
    fn test_stop_after_a_few_frames() {
        let spinner = Spinner::start();
        thread::sleep(Duration::from_millis(50));
        spinner.stop();
    }
}
