//! Busy-task runner
//!
//! Runs a long operation on a worker thread while the calling thread
//! keeps a live progress indication on screen.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::debug;

/// Run `task` on a dedicated worker thread while a ticking spinner
/// shows `message`.
///
/// The spinner is torn down when the worker finishes, whatever the
/// outcome; a panicking task is resumed on the caller after teardown.
/// Exactly one worker thread is spawned per invocation and the task's
/// own result is returned unchanged.
pub fn run_busy<T, F>(message: &str, task: F) -> T
where
    F: FnOnce() -> T + Send,
    T: Send,
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid progress bar template"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    debug!("busy task started: {}", message);

    let outcome = std::thread::scope(|scope| scope.spawn(task).join());

    spinner.finish_and_clear();
    debug!("busy task finished: {}", message);

    match outcome {
        Ok(value) => value,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}
