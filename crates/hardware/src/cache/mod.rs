//! Set-Associative Write-Back Cache.
//!
//! This module implements the cache state machine driven by the trace. It
//! decodes each address into tag and set index, hands the access to exactly
//! one [`CacheSet`], and threads the shared [`LogicalClock`] and
//! [`SimStats`] through by mutable reference. Replacement is true LRU using
//! clock stamps; stores are write-allocate and write-back.

/// Logical access clock used for LRU stamps.
pub mod clock;

/// Cache lines, sets, and the per-set access algorithm.
pub mod set;

pub use self::clock::LogicalClock;
pub use self::set::{AccessOutcome, CacheLine, CacheSet};

use crate::common::{AccessType, decode};
use crate::config::CacheGeometry;
use crate::stats::SimStats;

/// The simulated cache: `2^s` sets of `E` lines plus clock and statistics.
#[derive(Clone, Debug)]
pub struct Cache {
    geometry: CacheGeometry,
    sets: Vec<CacheSet>,
    clock: LogicalClock,
    stats: SimStats,
}

impl Cache {
    /// Creates an empty cache for a validated geometry.
    ///
    /// All lines start invalid and clean; the clock and statistics start at zero.
    pub fn new(geometry: CacheGeometry) -> Self {
        tracing::info!(
            sets = geometry.num_sets(),
            ways = geometry.ways(),
            block_size = geometry.block_size(),
            capacity = geometry.capacity_bytes(),
            "building cache"
        );

        Self {
            sets: vec![CacheSet::new(geometry.ways()); geometry.num_sets()],
            geometry,
            clock: LogicalClock::new(),
            stats: SimStats::default(),
        }
    }

    /// Applies one access to the cache.
    ///
    /// Mutates exactly one set plus the shared clock and statistics; no other
    /// set is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use csim_core::cache::{AccessOutcome, Cache};
    /// use csim_core::common::AccessType;
    /// use csim_core::config::CacheGeometry;
    ///
    /// let mut cache = Cache::new(CacheGeometry::new(0, 1, 0).unwrap());
    /// assert_eq!(cache.access(0x10, AccessType::Load), AccessOutcome::Miss);
    /// assert_eq!(cache.access(0x10, AccessType::Load), AccessOutcome::Hit);
    /// ```
    pub fn access(&mut self, address: u64, kind: AccessType) -> AccessOutcome {
        let decoded = decode(
            address,
            self.geometry.set_bits(),
            self.geometry.block_bits(),
        );
        // set_index < 2^s == sets.len() by construction of the mask.
        let set = &mut self.sets[decoded.set_index as usize];
        let outcome = set.access(
            decoded.tag,
            kind.is_write(),
            &mut self.clock,
            &mut self.stats,
            self.geometry.block_size(),
        );

        tracing::trace!(
            op = %kind,
            address,
            set = decoded.set_index,
            tag = decoded.tag,
            ?outcome,
            "access"
        );
        outcome
    }

    /// Whether the block containing `address` is resident.
    pub fn contains(&self, address: u64) -> bool {
        let decoded = decode(
            address,
            self.geometry.set_bits(),
            self.geometry.block_bits(),
        );
        self.sets[decoded.set_index as usize].contains(decoded.tag)
    }

    /// Geometry this cache was built with.
    pub const fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// All sets, indexed by set index.
    pub fn sets(&self) -> &[CacheSet] {
        &self.sets
    }

    /// The access clock.
    pub const fn clock(&self) -> &LogicalClock {
        &self.clock
    }

    /// Statistics accumulated so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Number of valid dirty lines across every set.
    pub fn dirty_lines(&self) -> usize {
        self.sets
            .iter()
            .flat_map(CacheSet::lines)
            .filter(|line| line.is_valid() && line.is_dirty())
            .count()
    }

    /// Consumes the cache and returns its final statistics.
    pub fn into_stats(self) -> SimStats {
        self.stats
    }
}
