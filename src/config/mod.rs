//! Configuration module for FlatCopy
//!
//! Provides configuration management including CLI arguments,
//! the list files read at startup, and the filter predicates.

mod settings;

pub use settings::*;
