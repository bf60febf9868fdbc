//! Progress reporter implementation
//!
//! Uses an indicatif spinner with running file and byte counters. The
//! walk is single-pass, so totals are never known up front and the
//! display is indeterminate.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

/// Progress reporter for copy runs
pub struct ProgressReporter {
    /// Spinner line
    spinner: ProgressBar,
    /// Bytes copied so far
    bytes_copied: AtomicU64,
    /// Files copied so far
    files_copied: AtomicU64,
    /// Is progress enabled
    enabled: AtomicBool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {pos} files  {msg}")
                .expect("Invalid template"),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));

        Self {
            spinner,
            bytes_copied: AtomicU64::new(0),
            files_copied: AtomicU64::new(0),
            enabled: AtomicBool::new(true),
        }
    }

    /// Create a disabled progress reporter (for quiet mode)
    pub fn disabled() -> Self {
        let reporter = Self::new();
        reporter.enabled.store(false, Ordering::SeqCst);
        reporter.spinner.set_draw_target(ProgressDrawTarget::hidden());
        reporter
    }

    /// Increment bytes copied
    pub fn increment_bytes(&self, bytes: u64) {
        self.bytes_copied.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Increment files copied
    pub fn increment_files(&self, count: u64) {
        self.files_copied.fetch_add(count, Ordering::Relaxed);
        self.spinner.inc(count);
    }

    /// Set current file being copied
    pub fn set_current_file(&self, path: &str) {
        // Truncate long paths, keeping the tail. The cut must land on a
        // char boundary or slicing panics on multi-byte file names.
        let display = if path.len() > 60 {
            let mut idx = path.len() - 57;
            while !path.is_char_boundary(idx) {
                idx += 1;
            }
            format!("...{}", &path[idx..])
        } else {
            path.to_string()
        };
        self.spinner.set_message(display);
    }

    /// Finish progress with success message
    pub fn finish_success(&self, message: &str) {
        self.spinner.finish_with_message(message.to_string());
    }

    /// Finish progress with error message
    pub fn finish_error(&self, message: &str) {
        self.spinner.abandon_with_message(message.to_string());
    }

    /// Check if progress is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Files copied so far
    pub fn files_copied(&self) -> u64 {
        self.files_copied.load(Ordering::Relaxed)
    }

    /// Bytes copied so far
    pub fn bytes_copied(&self) -> u64 {
        self.bytes_copied.load(Ordering::Relaxed)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}
