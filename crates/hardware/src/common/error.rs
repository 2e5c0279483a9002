//! Error definitions.
//!
//! Every failure in the simulator is fatal and surfaces before any statistics
//! are reported:
//! 1. **Configuration errors:** Geometry that cannot describe a real cache.
//! 2. **Trace errors:** The trace cannot be opened, read, or parsed.
//! 3. **Simulation errors:** The union of the above plus report output failures.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid cache geometry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Associativity must be at least one line per set.
    #[error("associativity (-E) must be at least 1")]
    ZeroWays,

    /// Set-index and block-offset bits do not fit in a 64-bit address.
    #[error("set bits ({set_bits}) + block bits ({block_bits}) exceed the 64-bit address width")]
    AddressBitsOverflow {
        /// Requested set-index bits.
        set_bits: u32,
        /// Requested block-offset bits.
        block_bits: u32,
    },

    /// The block size `2^b` does not fit in a byte counter.
    #[error("block bits ({block_bits}) too large; block size 2^b must fit in 64 bits")]
    BlockTooLarge {
        /// Requested block-offset bits.
        block_bits: u32,
    },

    /// `2^s * E` lines cannot be allocated.
    #[error("cache with 2^{set_bits} sets of {ways} lines is too large to simulate")]
    TooManyLines {
        /// Requested set-index bits.
        set_bits: u32,
        /// Requested associativity.
        ways: usize,
    },

    /// The total capacity `2^s * E * 2^b` bytes does not fit in a byte counter.
    #[error(
        "cache of 2^{set_bits} sets x {ways} lines x 2^{block_bits} bytes exceeds 2^64 bytes"
    )]
    CapacityOverflow {
        /// Requested set-index bits.
        set_bits: u32,
        /// Requested associativity.
        ways: usize,
        /// Requested block-offset bits.
        block_bits: u32,
    },
}

/// Failure to obtain or parse a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace file could not be opened.
    #[error("unable to open trace file '{}': {source}", .path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Reading failed part way through the trace.
    #[error("failed to read trace at line {line}: {source}")]
    Read {
        /// 1-based line number being read.
        line: usize,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A line does not have the `OP ADDRESS[,SIZE]` shape.
    #[error("malformed trace line {line} ({content:?}): {reason}")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

/// Top-level simulation error.
#[derive(Debug, Error)]
pub enum SimError {
    /// Rejected geometry; no cache was built.
    #[error("invalid cache configuration: {0}")]
    Config(#[from] ConfigError),

    /// The trace could not be consumed to the end.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// Writing verbose output or a report failed.
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}
