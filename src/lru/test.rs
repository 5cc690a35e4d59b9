/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

extern crate std;

use super::*;
use std::vec::Vec;

#[test]
fn new_cache_is_empty() {
    let cache: LruCache<i64, i64> = LruCache::new(4);
    assert_eq!(cache.size(), 0);
    assert!(cache.is_empty());
}

#[test]
fn insert_and_peek_do_not_affect_each_other() {
    let mut cache: LruCache<i64, i64> = LruCache::new(4);
    cache.insert(1, 100);
    cache.insert(2, 200);
    assert_eq!(cache.peek(&1), Some(&100));
    assert_eq!(cache.peek(&2), Some(&200));
    assert_eq!(cache.peek(&3), None);
}

#[test]
fn get_promotes_key_to_most_recently_used() {
    let mut cache: LruCache<i64, i64> = LruCache::new(4);
    cache.insert(1, 100);
    cache.insert(2, 200);
    cache.insert(3, 300);

    // Touch 1 so it becomes the most recently used, leaving 2 as the least.
    assert_eq!(cache.get(&1), Some(&100));

    let keys: Vec<i64> = cache.keys().copied().collect();
    assert_eq!(keys, alloc::vec![2, 3, 1]);
}

#[test]
fn batched_eviction_triggers_only_past_ten_percent_slack() {
    // suggested_size = 10, so the cache tolerates up to 11 entries (10 * 1.1)
    // before evicting back down to exactly 10.
    let mut cache: LruCache<i64, i64> = LruCache::new(10);
    for i in 0..11 {
        cache.insert(i, i * 10);
    }
    assert_eq!(cache.size(), 11, "no eviction yet at exactly the slack boundary");

    cache.insert(11, 110);
    assert_eq!(cache.size(), 10, "crossing the slack boundary evicts back to suggested_size");
}

#[test]
fn batched_eviction_removes_least_recently_used_entries_first() {
    let mut cache: LruCache<i64, i64> = LruCache::new(4);
    for i in 0..5 {
        cache.insert(i, i);
    }
    // suggested_size=4, slack threshold is 4*1.1=4.4, so 5 entries (>4.4) triggers
    // eviction back down to 4, removing key 0 (oldest).
    assert_eq!(cache.size(), 4);
    assert!(!cache.has(&0));
    assert!(cache.has(&1));
    assert!(cache.has(&4));
}

#[test]
fn getting_a_key_protects_it_from_the_next_eviction() {
    let mut cache: LruCache<i64, i64> = LruCache::new(4);
    for i in 0..4 {
        cache.insert(i, i);
    }
    // Touch key 0 so it is no longer the least recently used.
    assert_eq!(cache.get(&0), Some(&0));

    for i in 4..9 {
        cache.insert(i, i);
    }

    assert!(cache.has(&0), "touched key should have survived eviction");
}

#[test]
fn update_replaces_value_and_promotes_recency() {
    let mut cache: LruCache<i64, i64> = LruCache::new(4);
    cache.insert(1, 100);
    cache.insert(2, 200);

    assert_eq!(cache.update(&1, |v| v + 1), Some(&101));
    assert_eq!(cache.peek(&1), Some(&101));

    let keys: Vec<i64> = cache.keys().copied().collect();
    assert_eq!(keys, alloc::vec![2, 1]);
}

#[test]
fn update_on_absent_key_returns_none() {
    let mut cache: LruCache<i64, i64> = LruCache::new(4);
    assert_eq!(cache.update(&1, |v| v + 1), None);
}

#[test]
fn remove_drops_entry() {
    let mut cache: LruCache<i64, i64> = LruCache::new(4);
    cache.insert(1, 100);
    assert!(cache.remove(&1));
    assert!(!cache.remove(&1));
    assert_eq!(cache.size(), 0);
}

#[test]
fn iteration_order_is_least_to_most_recently_used() {
    let mut cache: LruCache<i64, i64> = LruCache::new(10);
    cache.insert(1, 1);
    cache.insert(2, 2);
    cache.insert(3, 3);
    cache.get(&1);

    let keys: Vec<i64> = cache.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, alloc::vec![2, 3, 1]);
}
