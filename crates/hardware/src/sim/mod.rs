//! Trace-driven simulation.
//!
//! Provides the trace reader that turns text records into accesses and the
//! simulator that feeds them to the cache.

/// Trace file parsing.
pub mod trace;

/// Trace processor owning the cache.
pub mod simulator;

pub use simulator::Simulator;
pub use trace::TraceReader;
