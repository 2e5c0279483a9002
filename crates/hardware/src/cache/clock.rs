//! Logical clock for recency stamps.

/// Counts accesses applied to the cache.
///
/// Advanced exactly once per access, hit or miss. Every value returned by
/// [`tick`](Self::tick) is unique and strictly greater than the previous one,
/// so the smallest stamp in a full set always names a single LRU line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogicalClock {
    total_accesses: u64,
}

impl LogicalClock {
    /// Creates a clock that has seen no accesses.
    pub const fn new() -> Self {
        Self { total_accesses: 0 }
    }

    /// Advances the clock and returns the new stamp.
    #[inline]
    pub const fn tick(&mut self) -> u64 {
        self.total_accesses += 1;
        self.total_accesses
    }

    /// Number of accesses seen so far; also the most recent stamp handed out.
    #[inline]
    pub const fn now(&self) -> u64 {
        self.total_accesses
    }
}
