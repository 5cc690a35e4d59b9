/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

extern crate std;

use crate::{LruCache, SortedMap};
use pretty_assertions::assert_eq;
use std::vec::Vec;

#[test]
fn map_view_exposes_reads_without_exposing_mutation() {
    let mut map: SortedMap<i64, i64, i64> = SortedMap::new(|v| *v);
    map.insert(1, 10);
    map.insert(2, 20);
    map.insert(3, 30);

    let view = map.as_map_view();
    assert_eq!(view.size(), 3);
    assert_eq!(view.get(&2), Some(&20));
    assert_eq!(view.get(&99), None);
    assert!(view.contains_key(&1));

    let collected: Vec<(i64, i64)> = view.entries().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(collected, alloc::vec![(1, 10), (2, 20), (3, 30)]);
}

#[test]
fn set_view_exposes_key_membership_only() {
    let mut cache: LruCache<i64, i64> = LruCache::new(10);
    cache.insert(1, 100);
    cache.insert(2, 200);

    let view = cache.as_keys_view();
    assert_eq!(view.size(), 2);
    assert!(view.contains(&1));
    assert!(!view.contains(&3));

    let keys: Vec<i64> = view.keys().copied().collect();
    assert_eq!(keys, alloc::vec![1, 2]);
}

#[test]
fn map_view_for_each_visits_every_entry_in_order() {
    let mut map: SortedMap<i64, i64, i64> = SortedMap::new(|v| *v);
    map.insert(3, 30);
    map.insert(1, 10);
    map.insert(2, 20);

    let view = map.as_map_view();
    let mut visited: Vec<(i64, i64)> = Vec::new();
    view.for_each(|v, k, _| visited.push((*k, *v)));

    assert_eq!(visited, alloc::vec![(1, 10), (2, 20), (3, 30)]);
}

#[quickcheck_macros::quickcheck]
fn map_view_size_always_matches_backing_map(entries: Vec<(i64, i64)>) -> bool {
    let mut map: SortedMap<i64, i64, i64> = SortedMap::new(|v| *v);
    for (k, v) in &entries {
        map.insert(*k, *v);
    }
    let view = map.as_map_view();
    view.size() == map.size() && entries.iter().all(|(k, _)| view.contains_key(k) == map.contains_key(k))
}
