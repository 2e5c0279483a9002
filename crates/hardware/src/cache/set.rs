//! Cache lines and associative sets.
//!
//! A set holds `E` lines and resolves one access at a time:
//! 1. **Hit:** A valid line already carries the tag.
//! 2. **Cold miss:** The lowest-index invalid line is filled.
//! 3. **Conflict miss:** The least recently used line is evicted and refilled.
//!
//! Dirty accounting is applied in the same step, so `dirty_bytes` always
//! equals the block size times the number of dirty valid lines.

use super::clock::LogicalClock;
use crate::stats::SimStats;

/// Metadata for one cache line. No data bytes are modeled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    valid: bool,
    tag: u64,
    dirty: bool,
    last_used: u64,
}

impl CacheLine {
    /// Whether the line holds a block.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Tag of the held block. Meaningless when the line is invalid.
    #[inline]
    pub const fn tag(&self) -> u64 {
        self.tag
    }

    /// Whether the held block was modified by a store since it was installed.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clock stamp of the most recent access to this line.
    #[inline]
    pub const fn last_used(&self) -> u64 {
        self.last_used
    }

    #[inline]
    const fn holds(&self, tag: u64) -> bool {
        self.valid && self.tag == tag
    }
}

/// Result of applying one access to the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The block was resident.
    Hit,
    /// The block was installed into a free line.
    Miss,
    /// The block displaced the least recently used line.
    MissEviction {
        /// Whether the displaced block was dirty (written back).
        dirty_victim: bool,
    },
}

impl AccessOutcome {
    /// Returns `true` for [`AccessOutcome::Hit`].
    #[inline]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }

    /// Returns `true` when a valid line was displaced.
    #[inline]
    pub const fn is_eviction(self) -> bool {
        matches!(self, Self::MissEviction { .. })
    }
}

/// A fixed group of `E` lines searched associatively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheSet {
    lines: Vec<CacheLine>,
}

impl CacheSet {
    /// Creates a set of `ways` invalid lines.
    pub fn new(ways: usize) -> Self {
        Self {
            lines: vec![CacheLine::default(); ways],
        }
    }

    /// The lines of this set, in way order.
    pub fn lines(&self) -> &[CacheLine] {
        &self.lines
    }

    /// Whether a valid line carries `tag`.
    pub fn contains(&self, tag: u64) -> bool {
        self.lines.iter().any(|line| line.holds(tag))
    }

    /// Number of valid lines.
    pub fn occupancy(&self) -> usize {
        self.lines.iter().filter(|line| line.valid).count()
    }

    /// Way of the valid line with the smallest recency stamp, if any line is valid.
    pub fn lru_way(&self) -> Option<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.valid)
            .min_by_key(|(_, line)| line.last_used)
            .map(|(way, _)| way)
    }

    /// Applies one access for `tag` to this set.
    ///
    /// Advances `clock` exactly once and updates `stats` according to the
    /// hit / cold-miss / eviction rules. `block_size` is the byte weight of a
    /// line in the dirty counters.
    pub fn access(
        &mut self,
        tag: u64,
        is_write: bool,
        clock: &mut LogicalClock,
        stats: &mut SimStats,
        block_size: u64,
    ) -> AccessOutcome {
        if let Some(line) = self.lines.iter_mut().find(|line| line.holds(tag)) {
            line.last_used = clock.tick();
            stats.hits += 1;
            if is_write && !line.dirty {
                line.dirty = true;
                stats.dirty_bytes += block_size;
            }
            return AccessOutcome::Hit;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| !line.valid) {
            *line = CacheLine {
                valid: true,
                tag,
                dirty: is_write,
                last_used: clock.tick(),
            };
            stats.misses += 1;
            if is_write {
                stats.dirty_bytes += block_size;
            }
            return AccessOutcome::Miss;
        }

        // Every line is valid here, so the set has a unique LRU line.
        let victim_way = self.lru_way().unwrap_or(0);
        let victim = &mut self.lines[victim_way];
        let dirty_victim = victim.dirty;

        match (is_write, dirty_victim) {
            (false, true) => {
                victim.dirty = false;
                stats.dirty_bytes -= block_size;
                stats.dirty_evictions = stats.dirty_evictions.saturating_add(block_size);
            }
            // Old dirty block leaves, new dirty block arrives: resident count unchanged.
            (true, true) => {
                stats.dirty_evictions = stats.dirty_evictions.saturating_add(block_size);
            }
            (true, false) => {
                victim.dirty = true;
                stats.dirty_bytes += block_size;
            }
            (false, false) => {}
        }

        victim.tag = tag;
        victim.last_used = clock.tick();
        stats.misses += 1;
        stats.evictions += 1;

        AccessOutcome::MissEviction { dirty_victim }
    }
}
