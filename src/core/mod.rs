//! Core copy engine module
//!
//! Ties the configuration, walker, and copier together into the
//! single-pass copy pipeline.

mod engine;

pub use engine::*;
