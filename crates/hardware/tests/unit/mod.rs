//! # Unit Components
//!
//! Tests grouped by the simulator module they exercise.

/// Address decoding, access types, and error formatting.
pub mod common;


/// Cache state machine: scenarios, eviction accounting, and invariants.
pub mod cache;
