//! Main copy engine
//!
//! Orchestrates the sequential copy run: creates the destination
//! directory, walks the source tree, and streams every matched file into
//! the flat destination while reporting progress.

use crate::config::CopyConfig;
use crate::error::Result;
use crate::fs::{ensure_destination, FileCopier, Walker};
use crate::progress::ProgressReporter;
use std::time::{Duration, Instant};

/// Copy operation result
#[derive(Debug)]
pub struct CopyResult {
    /// Total files copied
    pub files_copied: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Total duration
    pub duration: Duration,
    /// Average throughput in bytes/second
    pub throughput: f64,
}

impl CopyResult {
    /// Print summary to console
    pub fn print_summary(&self) {
        println!("\n=== Copy Summary ===");
        println!("Files copied:    {}", self.files_copied);
        println!(
            "Bytes copied:    {}",
            humansize::format_size(self.bytes_copied, humansize::BINARY)
        );
        println!("Duration:        {:.2?}", self.duration);
        println!(
            "Throughput:      {}/s",
            humansize::format_size(self.throughput as u64, humansize::BINARY)
        );
    }
}

/// Main copy engine
pub struct CopyEngine {
    /// Configuration
    config: CopyConfig,
    /// File copier
    copier: FileCopier,
    /// Progress reporter
    progress: Option<ProgressReporter>,
    /// Suppress per-file output lines
    quiet: bool,
}

impl CopyEngine {
    /// Create a new copy engine
    pub fn new(config: CopyConfig) -> Self {
        Self {
            config,
            copier: FileCopier::default_copier(),
            progress: None,
            quiet: false,
        }
    }

    /// Set progress reporter
    pub fn with_progress(mut self, progress: ProgressReporter) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Suppress the per-file `SOURCE:`/`Copied:` lines
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Execute the copy operation
    ///
    /// The destination directory is created up front; the walk then drives
    /// the copier once per matched file. The first error of any kind
    /// aborts the remaining traversal.
    pub fn execute(&self) -> Result<CopyResult> {
        let start_time = Instant::now();

        ensure_destination(&self.config.destination)?;

        let mut files_copied = 0u64;
        let mut bytes_copied = 0u64;

        let walker = Walker::new(&self.config);
        let walk_result = walker.walk(|source| {
            let (dest_path, stats) = self.copier.copy_flat(source, &self.config.destination)?;

            if !self.quiet {
                println!("SOURCE: {}", source.display());
                println!("Copied: {}", dest_path.display());
            }

            if let Some(progress) = &self.progress {
                progress.set_current_file(&source.display().to_string());
                progress.increment_files(1);
                progress.increment_bytes(stats.bytes_copied);
            }

            files_copied += 1;
            bytes_copied += stats.bytes_copied;
            Ok(())
        });

        if let Some(progress) = &self.progress {
            match &walk_result {
                Ok(()) => progress.finish_success("done"),
                Err(e) => progress.finish_error(&e.to_string()),
            }
        }
        walk_result?;

        let duration = start_time.elapsed();
        let throughput = if duration.as_secs_f64() > 0.0 {
            bytes_copied as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        Ok(CopyResult {
            files_copied,
            bytes_copied,
            duration,
            throughput,
        })
    }
}

/// Run a copy with an ad-hoc configuration and no progress display
pub fn simple_copy(config: CopyConfig) -> Result<CopyResult> {
    CopyEngine::new(config).quiet(true).execute()
}
