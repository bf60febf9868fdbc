//! File system operations module
//!
//! Provides the pruning directory walker and the buffered file copier
//! used by the copy engine.

mod operations;
mod walker;

pub use operations::*;
pub use walker::*;
