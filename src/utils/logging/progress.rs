//! Progress reporting for multi-series scoring runs
//!
//! Uses the indicatif crate; bars are hidden automatically when stderr is not
//! a terminal.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for the series progress bar
pub const DEFAULT_SERIES_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} series {msg}";

/// Create a progress bar counting scored series
///
/// # Arguments
/// * `length` - Number of series to score
/// * `description` - Optional description to display as the initial message
#[must_use]
pub fn create_series_progress_bar(length: u64, description: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new(length);
    if let Ok(style) = ProgressStyle::default_bar().template(DEFAULT_SERIES_TEMPLATE) {
        pb.set_style(style.progress_chars("#>-"));
    }

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }

    pb
}

/// Finish a progress bar with a completion message
///
/// # Arguments
/// * `pb` - The `ProgressBar` to finish
/// * `message` - Optional completion message
pub fn finish_progress_bar(pb: &ProgressBar, message: Option<&str>) {
    if let Some(msg) = message {
        pb.finish_with_message(msg.to_string());
    } else {
        pb.finish();
    }
}
