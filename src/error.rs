//! Error types for FlatCopy
//!
//! This module defines all error types used throughout the application,
//! providing detailed error information for debugging and user feedback.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for FlatCopy operations
#[derive(Error, Debug)]
pub enum FlatCopyError {
    /// Insufficient or malformed command line arguments
    #[error("Not enough arguments\n\nUsage: flatcopy <source_directory> <destination_directory>")]
    Usage,

    /// Configuration list file missing or unreadable
    #[error("Configuration error: cannot read '{path}': {source}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory listing failed during traversal
    #[error("Traversal error: {0}")]
    Traversal(String),

    /// I/O error during file operations
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File or directory not found
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// Matched source file has no usable base name
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl FlatCopyError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration load error
    pub fn config_load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            source,
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::ConfigLoad { path, .. } | Self::Io { path, .. } | Self::NotFound(path) => {
                Some(path)
            }
            _ => None,
        }
    }
}

/// Result type alias for FlatCopy operations
pub type Result<T> = std::result::Result<T, FlatCopyError>;

impl From<walkdir::Error> for FlatCopyError {
    fn from(err: walkdir::Error) -> Self {
        FlatCopyError::Traversal(err.to_string())
    }
}

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| FlatCopyError::io(path, e))
    }
}
