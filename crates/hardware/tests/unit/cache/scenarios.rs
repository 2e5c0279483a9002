//! Cache Scenario Tests.
//!
//! Small traces whose final statistics are worked out by hand. Geometry is
//! given as `(s, E, b)`.

use crate::common::run_trace;
use csim_core::stats::SimStats;
use pretty_assertions::assert_eq;

/// `s=0,E=1,b=0`: repeat load hits, a new tag evicts the clean line.
#[test]
fn direct_mapped_single_line_loads() {
    let stats = run_trace(0, 1, 0, "L 10,1\nL 10,1\nL 20,1\n");
    assert_eq!(
        stats,
        SimStats { hits: 1, misses: 2, evictions: 1, dirty_bytes: 0, dirty_evictions: 0 }
    );
}

/// `s=0,E=1,b=0`: a load evicting a stored line writes it back.
#[test]
fn load_evicts_dirty_line() {
    let stats = run_trace(0, 1, 0, "S 10,1\nL 20,1\n");
    assert_eq!(
        stats,
        SimStats { hits: 0, misses: 2, evictions: 1, dirty_bytes: 0, dirty_evictions: 1 }
    );
}

/// `s=0,E=2,b=0`: two misses fill both lines, the third access hits.
#[test]
fn two_way_fill_then_hit() {
    let stats = run_trace(0, 2, 0, "L 10,1\nL 20,1\nL 10,1\n");
    assert_eq!((stats.hits, stats.misses, stats.evictions), (1, 2, 0));
    assert_eq!(stats.dirty_bytes, 0);
}

/// A store evicting a dirty line keeps one dirty block resident.
#[test]
fn store_evicts_dirty_line() {
    let stats = run_trace(0, 1, 2, "S 0,4\nS 40,4\n");
    assert_eq!(
        stats,
        SimStats { hits: 0, misses: 2, evictions: 1, dirty_bytes: 4, dirty_evictions: 4 }
    );
}

/// A store evicting a clean line only adds resident dirty bytes.
#[test]
fn store_evicts_clean_line() {
    let stats = run_trace(0, 1, 3, "L 0,8\nS 100,8\n");
    assert_eq!(
        stats,
        SimStats { hits: 0, misses: 2, evictions: 1, dirty_bytes: 8, dirty_evictions: 0 }
    );
}

/// Repeated stores to one block are counted dirty once.
#[test]
fn repeated_stores_count_once() {
    let stats = run_trace(2, 1, 4, "S 0,1\nS 4,1\nS 8,1\nL c,1\n");
    assert_eq!(
        stats,
        SimStats { hits: 3, misses: 1, evictions: 0, dirty_bytes: 16, dirty_evictions: 0 }
    );
}

/// Different sets never interfere, even with identical tags.
#[test]
fn sets_are_independent() {
    // s=1, b=0: even addresses -> set 0, odd -> set 1; tag = address >> 1.
    let stats = run_trace(1, 1, 0, "S 0,1\nS 1,1\nL 0,1\nL 1,1\n");
    assert_eq!(
        stats,
        SimStats { hits: 2, misses: 2, evictions: 0, dirty_bytes: 2, dirty_evictions: 0 }
    );
}

/// Modify records are treated as plain stores.
#[test]
fn modify_is_a_store() {
    let stats = run_trace(0, 1, 0, "M 10,1\nL 20,1\n");
    assert_eq!(stats.dirty_evictions, 1);
    assert_eq!(stats.hits, 0);
}

/// A longer conflict-heavy trace on a 2-set, 2-way cache with 4-byte blocks.
#[test]
fn mixed_trace_two_way() {
    // set = (addr >> 2) & 1, tag = addr >> 3
    let trace = "\
L 0,4
S 8,4
L 10,4
S 0,4
L 18,4
L 8,4
S 4,4
L 14,4
";
    // L 0   set0 tag0 miss                      [t0]
    // S 8   set0 tag1 miss dirty                [t0, t1*]
    // L 10  set0 tag2 evict t0 (clean)          [t2, t1*]
    // S 0   set0 tag0 evict t1 (dirty), store   [t2, t0*]  dirty_evictions 4
    // L 18  set0 tag3 evict t2 (clean)          [t3, t0*]
    // L 8   set0 tag1 evict t0 (dirty), load    [t3, t1]   dirty_evictions 8
    // S 4   set1 tag0 miss dirty                set1 [t0*]
    // L 14  set1 tag2 miss                      set1 [t0*, t2]
    let stats = run_trace(1, 2, 2, trace);
    assert_eq!(
        stats,
        SimStats { hits: 0, misses: 8, evictions: 4, dirty_bytes: 4, dirty_evictions: 8 }
    );
}

/// Two dirty lines of `2^62` bytes fill the largest accepted capacity exactly.
#[test]
fn widest_cache_filled_with_dirty_lines() {
    let stats = run_trace(0, 2, 62, "S 0,1\nS 4000000000000000,1\n");
    assert_eq!(
        stats,
        SimStats { hits: 0, misses: 2, evictions: 0, dirty_bytes: 1 << 63, dirty_evictions: 0 }
    );
}

/// Cumulative evicted bytes saturate instead of wrapping.
#[test]
fn dirty_evictions_saturate_with_largest_block() {
    let stats = run_trace(0, 1, 63, "S 0,1\nS 8000000000000000,1\nS 0,1\n");
    assert_eq!(
        stats,
        SimStats {
            hits: 0,
            misses: 3,
            evictions: 2,
            dirty_bytes: 1 << 63,
            dirty_evictions: u64::MAX,
        }
    );
}
