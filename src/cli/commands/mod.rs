//! CLI command implementations.

pub mod browse;
pub mod check;
pub mod detail;
pub mod upcoming;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a fetch is in flight.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
