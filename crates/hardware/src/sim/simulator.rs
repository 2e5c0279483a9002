//! Simulator: drives the cache with a stream of trace accesses.
//!
//! The simulator owns the [`Cache`] and applies accesses strictly in order,
//! each fully resolved before the next is read. A trace error aborts the run
//! and no statistics are returned.

use std::io::{self, Write};

use crate::cache::{AccessOutcome, Cache};
use crate::common::{MemoryAccess, SimError, TraceError};
use crate::config::CacheGeometry;
use crate::stats::SimStats;

/// Top-level trace processor.
pub struct Simulator {
    cache: Cache,
    verbose: Option<Box<dyn Write>>,
}

impl std::fmt::Debug for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("cache", &self.cache)
            .field("verbose", &self.verbose.is_some())
            .finish()
    }
}

impl Simulator {
    /// Creates a simulator with an empty cache.
    pub fn new(geometry: CacheGeometry) -> Self {
        Self {
            cache: Cache::new(geometry),
            verbose: None,
        }
    }

    /// Enables per-access reporting to `sink`.
    ///
    /// Each access is written as `OP ADDR,SIZE hit`, `... miss`, or
    /// `... miss eviction`.
    #[must_use]
    pub fn with_verbose(mut self, sink: impl Write + 'static) -> Self {
        self.verbose = Some(Box::new(sink));
        self
    }

    /// Enables per-access reporting to stdout.
    #[must_use]
    pub fn with_verbose_stdout(self) -> Self {
        self.with_verbose(io::stdout())
    }

    /// Applies a single access and returns what the cache did.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Report`] if verbose output cannot be written.
    pub fn step(&mut self, access: MemoryAccess) -> Result<AccessOutcome, SimError> {
        let outcome = self.cache.access(access.address, access.kind);
        if let Some(sink) = self.verbose.as_mut() {
            let event = match outcome {
                AccessOutcome::Hit => "hit",
                AccessOutcome::Miss => "miss",
                AccessOutcome::MissEviction { .. } => "miss eviction",
            };
            writeln!(sink, "{access} {event}")?;
        }
        Ok(outcome)
    }

    /// Applies every access in `trace`, in order, and returns the final statistics.
    ///
    /// # Errors
    ///
    /// Stops at the first [`TraceError`] yielded by the trace, or the first
    /// verbose-output failure. Statistics gathered before the failure are
    /// discarded by the caller's error path.
    pub fn run<I>(&mut self, trace: I) -> Result<SimStats, SimError>
    where
        I: IntoIterator<Item = Result<MemoryAccess, TraceError>>,
    {
        tracing::debug!("trace processing started");
        for access in trace {
            let _ = self.step(access?)?;
        }
        if let Some(sink) = self.verbose.as_mut() {
            sink.flush()?;
        }

        let stats = *self.cache.stats();
        tracing::debug!(
            accesses = stats.accesses(),
            hits = stats.hits,
            misses = stats.misses,
            evictions = stats.evictions,
            "trace processing finished"
        );
        Ok(stats)
    }

    /// The simulated cache, for inspection.
    pub const fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Statistics accumulated so far.
    pub const fn stats(&self) -> &SimStats {
        self.cache.stats()
    }
}
