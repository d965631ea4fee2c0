//! Progress spinner utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::error::Result;

/// Create a spinner with the given message
///
/// Returns `None` in batch mode so scripted output stays clean.
pub fn create_spinner(message: &str, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Finish spinner with a message
pub fn finish_spinner(spinner: Option<ProgressBar>, message: &str) {
    if let Some(s) = spinner {
        s.finish_with_message(message.to_string());
    }
}

/// Finish spinner according to the outcome of a listing
///
/// Failures clear the line; the error itself is reported by the caller.
pub fn finish_spinner_with_status<T>(spinner: Option<ProgressBar>, result: &Result<Vec<T>>) {
    if let Some(s) = spinner {
        match result {
            Err(_) => s.finish_and_clear(),
            Ok(items) if items.is_empty() => s.finish_with_message("No results"),
            Ok(items) => s.finish_with_message(format!("Found {}", items.len())),
        }
    }
}
