//! LRU Replacement Tests.
//!
//! The victim in a full set must always be the valid line with the smallest
//! recency stamp. Stamps come from the cache-wide logical clock, so accesses
//! to other sets still advance time.

use crate::common::{cache, load, store};
use csim_core::cache::LogicalClock;

/// Helper for a fully associative cache (`s = 0`) with 1-byte blocks, where
/// the tag equals the address.
fn resident(c: &csim_core::Cache) -> Vec<u64> {
    let mut tags: Vec<u64> = c.sets()[0]
        .lines()
        .iter()
        .filter(|l| l.is_valid())
        .map(|l| l.tag())
        .collect();
    tags.sort_unstable();
    tags
}

#[test]
fn evicts_oldest_fill() {
    let mut c = cache(0, 3, 0);
    for a in [1, 2, 3, 4] {
        load(&mut c, a);
    }
    assert_eq!(resident(&c), vec![2, 3, 4]);
}

#[test]
fn hit_protects_line_from_eviction() {
    let mut c = cache(0, 3, 0);
    for a in [1, 2, 3, 1, 4] {
        load(&mut c, a);
    }
    assert_eq!(resident(&c), vec![1, 3, 4]);
}

#[test]
fn store_hit_also_refreshes_recency() {
    let mut c = cache(0, 2, 0);
    load(&mut c, 1);
    load(&mut c, 2);
    store(&mut c, 1);
    load(&mut c, 3);
    assert_eq!(resident(&c), vec![1, 3]);
}

/// Cycling through E+1 blocks thrashes: every access misses.
#[test]
fn cyclic_scan_larger_than_set_thrashes() {
    let mut c = cache(0, 4, 0);
    for _ in 0..3 {
        for a in 0..5 {
            load(&mut c, a);
        }
    }
    assert_eq!(c.stats().hits, 0);
    assert_eq!(c.stats().misses, 15);
    assert_eq!(c.stats().evictions, 11);
}

/// Stamps keep increasing across sets, so a set's LRU order depends only
/// on its own accesses.
#[test]
fn clock_is_shared_across_sets() {
    let mut c = cache(1, 2, 0);
    load(&mut c, 0b00); // set 0
    load(&mut c, 0b01); // set 1
    load(&mut c, 0b10); // set 0
    assert_eq!(c.clock().now(), 3);

    let stamps: Vec<u64> = c.sets()[0].lines().iter().map(|l| l.last_used()).collect();
    assert_eq!(stamps, vec![1, 3]);
    assert_eq!(c.sets()[0].lru_way(), Some(0));
}

#[test]
fn lru_way_tracks_smallest_stamp() {
    let mut c = cache(0, 3, 0);
    for a in [7, 8, 9, 7, 8] {
        load(&mut c, a);
    }
    let set = &c.sets()[0];
    let way = set.lru_way().unwrap();
    assert_eq!(set.lines()[way].tag(), 9);
}

#[test]
fn clock_stamps_strictly_increase() {
    let mut clock = LogicalClock::new();
    assert_eq!(clock.now(), 0);
    let a = clock.tick();
    let b = clock.tick();
    assert!(b > a);
    assert_eq!(clock.now(), 2);
}
