//! Core module with pure utility functions
//!
//! Every function here takes plain values and returns plain values:
//! - No shared state between calls
//! - No file system, network, or other I/O
//! - No panics on malformed input; bad input yields `false`, `None` or an `Err`
//!
//! The only side effect is emitting `tracing` events from the classifiers.

pub mod formatting;
pub mod matrix;
pub mod sequences;
pub mod text;
pub mod units;
pub mod validation;
