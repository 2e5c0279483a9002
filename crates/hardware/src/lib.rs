//! Trace-driven cache simulator library.
//!
//! This crate models a set-associative, write-back, write-allocate data cache
//! with true LRU replacement. It provides:
//! 1. **Common:** Address decoding, access types, and error types.
//! 2. **Configuration:** Raw `(s, E, b)` parameters and validated geometry.
//! 3. **Cache:** Lines, sets, the logical clock, and the cache state machine.
//! 4. **Simulation:** Trace reading and the trace processor.
//! 5. **Statistics:** Hit/miss/eviction counters, dirty-byte accounting, and reporting.
//!
//! # Examples
//!
//! ```
//! use csim_core::{CacheGeometry, Simulator, TraceReader};
//!
//! let trace = "S 10,1\nL 20,1\n";
//! let mut sim = Simulator::new(CacheGeometry::new(0, 1, 0).unwrap());
//! let stats = sim.run(TraceReader::new(trace.as_bytes())).unwrap();
//! assert_eq!(stats.summary(), "hits:0 misses:2 evictions:1 dirty_bytes_in_cache:0 dirty_bytes_evicted:1");
//! ```

/// The cache state machine (lines, sets, clock, cache).
pub mod cache;
/// Common types (address decoding, access types, errors).
pub mod common;
/// Cache configuration and validated geometry.
pub mod config;
/// Trace reading and the trace processor.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// The simulated cache; construct with `Cache::new`.
pub use crate::cache::Cache;
/// Validated geometry; build with `CacheGeometry::new` or `CacheConfig::validate`.
pub use crate::config::{CacheConfig, CacheGeometry};
/// Trace processor and trace reader.
pub use crate::sim::{Simulator, TraceReader};
/// Final statistics record.
pub use crate::stats::SimStats;
