//! Progress reporting module
//!
//! Provides a spinner-based progress display for copy runs with running
//! file and byte counters.

mod reporter;

pub use reporter::*;
