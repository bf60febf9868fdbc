//! Pruning directory walker
//!
//! Depth-first traversal of the source tree that prunes blacklisted
//! subtrees before descending into them and hands every matching regular
//! file to a caller-supplied callback.

use crate::config::CopyConfig;
use crate::error::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Outcome of visiting a directory entry during traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitOutcome {
    /// Descend into the directory as usual
    Continue,
    /// Do not descend; nothing under this directory is listed or matched
    SkipSubtree,
}

/// Depth-first walker over the configured source tree
pub struct Walker<'a> {
    config: &'a CopyConfig,
}

impl<'a> Walker<'a> {
    /// Create a walker borrowing the run's configuration
    pub fn new(config: &'a CopyConfig) -> Self {
        Self { config }
    }

    /// Classify a directory entry against the blacklist
    pub fn classify_dir(&self, path: &Path) -> VisitOutcome {
        if self.config.is_blacklisted(path) {
            VisitOutcome::SkipSubtree
        } else {
            VisitOutcome::Continue
        }
    }

    /// Walk the source tree, invoking `on_file` for every regular file
    /// whose extension matches and whose path is not blacklisted.
    ///
    /// Traversal is a deterministic pre-order descent (entries sorted by
    /// file name). A directory listing error or a callback error aborts
    /// the whole walk; pruning a blacklisted subtree does not.
    pub fn walk<F>(&self, mut on_file: F) -> Result<()>
    where
        F: FnMut(&Path) -> Result<()>,
    {
        let mut it = WalkDir::new(&self.config.source)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = it.next() {
            let entry = entry?;
            let path = entry.path();

            if entry.file_type().is_dir() {
                if self.classify_dir(path) == VisitOutcome::SkipSubtree {
                    tracing::debug!(path = %path.display(), "pruning blacklisted subtree");
                    it.skip_current_dir();
                }
                continue;
            }

            if !entry.file_type().is_file() {
                continue;
            }

            if self.config.is_blacklisted(path) {
                tracing::trace!(path = %path.display(), "skipping blacklisted file");
                continue;
            }

            if self.config.is_target_file_type(path) {
                on_file(path)?;
            }
        }

        Ok(())
    }
}
