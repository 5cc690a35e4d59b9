/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! A least-recently-used cache built on [`crate::SortedMap`], ordered by a
//! monotonic recency counter with capacity-triggered batch eviction (C5).

use crate::sorted::map::{self, SortedMap};
use crate::views::Sequenced;
use crate::TrieKey;
use alloc::boxed::Box;

struct Entry<V> {
    payload: V,
    order: u64,
}

/// A mutable LRU cache. Touching a key (`get`, or `update`) moves it to the most
/// recently used end; `peek` reads without affecting recency.
///
/// Eviction is batched: once the cache grows more than 10% past `suggested_size`,
/// it evicts the least-recently-used entries down to exactly `suggested_size`
/// rather than evicting one-in-one-out. This trades a small, bounded amount of
/// extra memory for fewer costly top-level copies in a structural-sharing host
/// framework wrapping this cache.
pub struct LruCache<K, V> {
    inner: SortedMap<K, Entry<V>, u64>,
    next_order: u64,
    suggested_size: usize,
}

impl<K, V> LruCache<K, V>
where
    K: TrieKey + Eq + Clone,
{
    #[must_use]
    pub fn new(suggested_size: usize) -> Self {
        LruCache { inner: SortedMap::new(|entry: &Entry<V>| entry.order), next_order: 0, suggested_size }
    }

    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn has(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    /// Reads `key`'s value without affecting its recency.
    #[must_use]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.inner.get(key).map(|entry| &entry.payload)
    }

    /// Reads `key`'s value, marking it most-recently-used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if !self.inner.contains_key(key) {
            return None;
        }
        let order = self.bump_order();
        self.inner.update_with(key, |entry| entry.order = order);
        self.inner.get(key).map(|entry| &entry.payload)
    }

    /// Inserts `key`/`value`, marking it most-recently-used. If this pushes the
    /// cache more than 10% past `suggested_size`, evicts the least-recently-used
    /// entries until the size is back down to `suggested_size`.
    pub fn insert(&mut self, key: K, value: V) {
        let order = self.bump_order();
        self.inner.insert(key, Entry { payload: value, order });

        if self.inner.size() * 10 > self.suggested_size * 11 {
            while self.inner.size() > self.suggested_size {
                let oldest_key = match self.inner.first() {
                    Some((k, _)) => k.clone(),
                    None => break,
                };
                self.inner.remove(&oldest_key);
            }
        }
    }

    /// Replaces `key`'s value with `f(&value)`, marking it most-recently-used.
    /// Returns the new value, or `None` if `key` was absent.
    pub fn update<F>(&mut self, key: &K, f: F) -> Option<&V>
    where
        F: FnOnce(&V) -> V,
    {
        if !self.inner.contains_key(key) {
            return None;
        }
        let order = self.bump_order();
        self.inner.update(key, move |entry| Entry { payload: f(&entry.payload), order });
        self.inner.get(key).map(|entry| &entry.payload)
    }

    /// Removes `key`. Returns `true` if it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.inner.remove(key)
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { inner: self.inner.iter() }
    }

    #[must_use]
    pub fn keys(&self) -> IterKeys<'_, K, V> {
        self.iter().map(first)
    }

    #[must_use]
    pub fn values(&self) -> IterValues<'_, K, V> {
        self.iter().map(second)
    }

    /// A read-only `(key, value)` view over this cache. Note that reading through
    /// the view does not affect recency the way [`LruCache::get`] does.
    #[must_use]
    pub fn as_map_view(&self) -> crate::views::MapView<'_, K, V, Self> {
        crate::views::MapView::new(self)
    }

    /// A read-only key-set view over this cache.
    #[must_use]
    pub fn as_keys_view(&self) -> crate::views::SetView<'_, K, V, Self> {
        crate::views::SetView::new(self)
    }

    fn bump_order(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }
}

fn first<K, V>(pair: (&K, &V)) -> &K {
    pair.0
}

fn second<K, V>(pair: (&K, &V)) -> &V {
    pair.1
}

pub type IterKeys<'a, K, V> = core::iter::Map<Iter<'a, K, V>, fn((&'a K, &'a V)) -> &'a K>;
pub type IterValues<'a, K, V> = core::iter::Map<Iter<'a, K, V>, fn((&'a K, &'a V)) -> &'a V>;

/// Iterates `(&K, &V)` pairs in ascending order of recency (least recently used first).
pub struct Iter<'a, K, V> {
    inner: map::Iter<'a, K, Entry<V>, u64>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: TrieKey + Eq,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next().map(|(k, entry)| (k, &entry.payload))
    }
}

impl<K, V> Sequenced<K, V> for LruCache<K, V>
where
    K: TrieKey + Eq + Clone,
{
    fn get(&self, key: &K) -> Option<&V> {
        LruCache::peek(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        LruCache::has(self, key)
    }

    fn size(&self) -> usize {
        LruCache::size(self)
    }

    fn entries_boxed<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a> {
        Box::new(LruCache::iter(self))
    }
}

#[cfg(test)]
mod test;
