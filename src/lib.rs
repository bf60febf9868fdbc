//! # FlatCopy - Filtered, Flattening File Copy
//!
//! FlatCopy recursively copies files of configured extensions from a
//! source directory tree into a single flat destination directory,
//! pruning any subtree whose path contains a blacklisted fragment.
//!
//! ## Features
//!
//! - **Extension filtering**: only files listed in `fileTypes.txt` are copied
//! - **Subtree pruning**: path fragments in `blacklistedDirectories.txt`
//!   exclude whole subtrees before they are listed
//! - **Flattening**: every match lands under its base name in one directory
//! - **Single-pass**: one sequential walk, no pre-scan, no concurrency
//! - **Fail-fast**: the first error aborts the remaining traversal
//!
//! ## Quick Start
//!
//! ```no_run
//! use flatcopy::config::CopyConfig;
//! use flatcopy::core::simple_copy;
//! use std::path::PathBuf;
//!
//! let config = CopyConfig {
//!     source: PathBuf::from("/photos/camera"),
//!     destination: PathBuf::from("/photos/flat"),
//!     file_types: vec!["jpg".to_string(), "png".to_string()],
//!     blacklist: vec![".git".to_string()],
//! };
//!
//! let result = simple_copy(config).unwrap();
//! println!("Copied {} files ({} bytes)", result.files_copied, result.bytes_copied);
//! ```
//!
//! ## With Progress
//!
//! ```no_run
//! use flatcopy::config::CopyConfig;
//! use flatcopy::core::CopyEngine;
//! use flatcopy::progress::ProgressReporter;
//! use std::path::{Path, PathBuf};
//!
//! let config = CopyConfig::load(
//!     PathBuf::from("/photos/camera"),
//!     PathBuf::from("/photos/flat"),
//!     Path::new("."),
//! ).unwrap();
//!
//! let engine = CopyEngine::new(config).with_progress(ProgressReporter::new());
//! let result = engine.execute().unwrap();
//! result.print_summary();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod error;
pub mod fs;
pub mod progress;

// Re-export commonly used types
pub use config::{CliArgs, CopyConfig};
pub use core::{CopyEngine, CopyResult};
pub use error::{FlatCopyError, Result};
pub use progress::ProgressReporter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use flatcopy::prelude::*;
    //! ```

    pub use crate::config::{CliArgs, CopyConfig};
    pub use crate::core::{simple_copy, CopyEngine, CopyResult};
    pub use crate::error::{FlatCopyError, Result};
    pub use crate::fs::{ensure_destination, FileCopier, VisitOutcome, Walker};
    pub use crate::progress::ProgressReporter;
}
