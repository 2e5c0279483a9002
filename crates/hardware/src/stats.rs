//! Simulation statistics collection and reporting.
//!
//! This module tracks the outcome of every access applied to the cache. It provides:
//! 1. **Counters:** Hits, misses, and evictions.
//! 2. **Dirty accounting:** Bytes currently dirty in the cache and cumulative dirty bytes evicted.
//! 3. **Reporting:** The one-line cachelab summary, a sectioned report, JSON, and a results file.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

/// Cache statistics, mutated only by the cache's access path.
///
/// Byte-valued fields are already scaled by the block size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Accesses that found their block resident.
    pub hits: u64,
    /// Accesses that had to install their block.
    pub misses: u64,
    /// Misses that displaced a valid line.
    pub evictions: u64,
    /// Bytes currently dirty in the cache. Rises and falls.
    #[serde(rename = "dirty_bytes_in_cache")]
    pub dirty_bytes: u64,
    /// Dirty bytes that have left the cache by eviction. Never decreases;
    /// saturates at `u64::MAX`.
    #[serde(rename = "dirty_bytes_evicted")]
    pub dirty_evictions: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"` and `"memory"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "memory"];

impl SimStats {
    /// Total accesses applied, `hits + misses`.
    #[inline]
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of accesses that hit, in percent. Zero when nothing was accessed.
    pub fn hit_rate(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            total => self.hits as f64 / total as f64 * 100.0,
        }
    }

    /// Fraction of accesses that missed, in percent. Zero when nothing was accessed.
    pub fn miss_rate(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            total => self.misses as f64 / total as f64 * 100.0,
        }
    }

    /// The cachelab summary line.
    ///
    /// # Examples
    ///
    /// ```
    /// use csim_core::stats::SimStats;
    ///
    /// let stats = SimStats { hits: 1, misses: 2, evictions: 1, dirty_bytes: 0, dirty_evictions: 1 };
    /// assert_eq!(
    ///     stats.summary(),
    ///     "hits:1 misses:2 evictions:1 dirty_bytes_in_cache:0 dirty_bytes_evicted:1"
    /// );
    /// ```
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// Serializes the statistics as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; unreachable for this plain struct but
    /// propagated rather than unwrapped.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the five counters, space separated, to `path`.
    ///
    /// This is the results-file format consumed by cachelab graders:
    /// `hits misses evictions dirty_bytes_in_cache dirty_bytes_evicted`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from creating or writing the file.
    pub fn write_results(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(
            path,
            format!(
                "{} {} {} {} {}\n",
                self.hits, self.misses, self.evictions, self.dirty_bytes, self.dirty_evictions
            ),
        )
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be `"summary"` or `"memory"`.
    /// Pass an empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);

        println!("\n==========================================================");
        println!("CACHE SIMULATION STATISTICS");
        println!("==========================================================");
        if want("summary") {
            println!("sim_accesses             {}", self.accesses());
            println!("sim_hits                 {}", self.hits);
            println!("sim_misses               {}", self.misses);
            println!("sim_evictions            {}", self.evictions);
            println!("sim_hit_rate             {:.2}%", self.hit_rate());
            println!("sim_miss_rate            {:.2}%", self.miss_rate());
            println!("----------------------------------------------------------");
        }
        if want("memory") {
            println!("DIRTY DATA");
            println!("  dirty.resident_bytes   {}", self.dirty_bytes);
            println!("  dirty.evicted_bytes    {}", self.dirty_evictions);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits:{} misses:{} evictions:{} dirty_bytes_in_cache:{} dirty_bytes_evicted:{}",
            self.hits, self.misses, self.evictions, self.dirty_bytes, self.dirty_evictions
        )
    }
}
