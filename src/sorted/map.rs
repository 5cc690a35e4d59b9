/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! A composite container giving unique-key associative lookups (via a
//! [`HashTrieMap`]) combined with ordered iteration by a caller-supplied ordering
//! key (via a [`SortedCollection`]) (C4).

use crate::map::HashTrieMap;
use crate::sorted::collection::{self, SortedCollection};
use crate::views::Sequenced;
use crate::TrieKey;
use alloc::boxed::Box;
use core::cmp::Ordering;

struct Tuple<K, O> {
    key: K,
    order: O,
}

/// A unique-key map that also supports efficient ordered iteration by a
/// caller-supplied ordering key (`getOrderingKey`), re-derived from the value.
///
/// Keeping the ordering key out of band (rather than requiring `V: Ord`) lets
/// [`crate::LruCache`] build its recency ordering on top of this type without the
/// payload type itself needing to know about recency.
pub struct SortedMap<K, V, O> {
    entries: HashTrieMap<K, V>,
    order: SortedCollection<Tuple<K, O>>,
    ordering_key: Box<dyn Fn(&V) -> O>,
}

impl<K, V, O> SortedMap<K, V, O>
where
    K: TrieKey + Eq + Clone,
    O: Ord,
{
    /// Creates an empty map ordered by `ordering_key(&value)` using `O`'s natural order.
    #[must_use]
    pub fn new<F>(ordering_key: F) -> Self
    where
        F: Fn(&V) -> O + 'static,
    {
        Self::with_comparer(ordering_key, |a, b| a.cmp(b))
    }
}

impl<K, V, O> SortedMap<K, V, O>
where
    K: TrieKey + Eq + Clone,
{
    /// Like [`SortedMap::new`], with an explicit ordering-key comparator rather
    /// than requiring `O: Ord`.
    #[must_use]
    pub fn with_comparer<F, C>(ordering_key: F, order_comparer: C) -> Self
    where
        F: Fn(&V) -> O + 'static,
        C: Fn(&O, &O) -> Ordering + 'static,
    {
        SortedMap {
            entries: HashTrieMap::new(),
            order: SortedCollection::with_comparers(
                move |a: &Tuple<K, O>, b: &Tuple<K, O>| order_comparer(&a.order, &b.order),
                |a: &Tuple<K, O>, b: &Tuple<K, O>| a.key == b.key,
            ),
            ordering_key: Box::new(ordering_key),
        }
    }

    #[must_use]
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    #[must_use]
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Size is read from the ordering collection, since that's the structure that
    /// can't diverge from the logical entry count even in a hypothetical
    /// shared-backing-map scenario.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.order.size()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Inserts `key`/`value`. If `key` is already present, this is equivalent to
    /// `update(key, |_| value)`: the stored ordering key is refreshed from the new
    /// value and the tuple is re-positioned if needed.
    pub fn insert(&mut self, key: K, value: V) {
        if self.entries.contains_key(&key) {
            self.update(&key, move |_| value);
        } else {
            let order = (self.ordering_key)(&value);
            self.order.insert(Tuple { key: key.clone(), order });
            self.entries.insert(key, value);
        }
    }

    /// Removes `key`. Returns `true` if it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        let order = match self.entries.get(key) {
            Some(value) => (self.ordering_key)(value),
            None => return false,
        };
        let removed_from_order = self.order.remove(&Tuple { key: key.clone(), order });
        debug_assert!(removed_from_order, "SortedMap's ordering collection is out of sync with its entries map");
        self.entries.remove(key)
    }

    /// Replaces the value for `key` with `f(&value)`, keeping the ordering
    /// collection consistent with the (possibly changed) ordering key. Returns
    /// `true` if `key` was present.
    ///
    /// # Panics
    ///
    /// Panics if the entries map and ordering collection have gone out of sync —
    /// this should never happen through this type's own API.
    pub fn update<F>(&mut self, key: &K, f: F) -> bool
    where
        F: FnOnce(&V) -> V,
    {
        let existing_order = match self.entries.get(key) {
            Some(value) => (self.ordering_key)(value),
            None => return false,
        };

        let new_value = f(self.entries.get(key).expect("key checked present above"));
        let new_order = (self.ordering_key)(&new_value);

        self.entries.update(key, move |_| new_value);

        let found = self.order.update_with(&Tuple { key: key.clone(), order: existing_order }, |tuple| {
            tuple.order = new_order;
        });
        assert!(found, "SortedMap's ordering collection is out of sync with its entries map");

        true
    }

    /// Mutates the value for `key` in place via `f`, keeping the ordering
    /// collection consistent with the (possibly changed) ordering key. Returns
    /// `true` if `key` was present.
    pub fn update_with<F>(&mut self, key: &K, f: F) -> bool
    where
        F: FnOnce(&mut V),
    {
        let existing_order = match self.entries.get(key) {
            Some(value) => (self.ordering_key)(value),
            None => return false,
        };

        self.entries.update_with(key, f);
        let new_order = (self.ordering_key)(self.entries.get(key).expect("just updated above"));

        let found = self.order.update_with(&Tuple { key: key.clone(), order: existing_order }, |tuple| {
            tuple.order = new_order;
        });
        assert!(found, "SortedMap's ordering collection is out of sync with its entries map");

        true
    }

    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        let tuple = self.order.first()?;
        let value = self.entries.get(&tuple.key).expect("SortedMap entries/order out of sync");
        Some((&tuple.key, value))
    }

    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        let tuple = self.order.last()?;
        let value = self.entries.get(&tuple.key).expect("SortedMap entries/order out of sync");
        Some((&tuple.key, value))
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V, O> {
        Iter { inner: self.order.iter(), entries: &self.entries }
    }

    #[must_use]
    pub fn keys(&self) -> IterKeys<'_, K, V, O> {
        self.iter().map(first)
    }

    #[must_use]
    pub fn values(&self) -> IterValues<'_, K, V, O> {
        self.iter().map(second)
    }

    /// A read-only `(key, value)` view over this map, suitable for handing to
    /// callers that should not be able to mutate it.
    #[must_use]
    pub fn as_map_view(&self) -> crate::views::MapView<'_, K, V, Self> {
        crate::views::MapView::new(self)
    }

    /// A read-only key-set view over this map.
    #[must_use]
    pub fn as_keys_view(&self) -> crate::views::SetView<'_, K, V, Self> {
        crate::views::SetView::new(self)
    }
}

fn first<K, V>(pair: (&K, &V)) -> &K {
    pair.0
}

fn second<K, V>(pair: (&K, &V)) -> &V {
    pair.1
}

pub type IterKeys<'a, K, V, O> = core::iter::Map<Iter<'a, K, V, O>, fn((&'a K, &'a V)) -> &'a K>;
pub type IterValues<'a, K, V, O> = core::iter::Map<Iter<'a, K, V, O>, fn((&'a K, &'a V)) -> &'a V>;

/// Iterates `(&K, &V)` pairs in ascending order of the ordering key.
pub struct Iter<'a, K, V, O> {
    inner: collection::Iter<'a, Tuple<K, O>>,
    entries: &'a HashTrieMap<K, V>,
}

impl<'a, K, V, O> Iterator for Iter<'a, K, V, O>
where
    K: TrieKey + Eq,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let tuple = self.inner.next()?;
        let value = self.entries.get(&tuple.key).expect("SortedMap entries/order out of sync");
        Some((&tuple.key, value))
    }
}

impl<K, V, O> Sequenced<K, V> for SortedMap<K, V, O>
where
    K: TrieKey + Eq + Clone,
{
    fn get(&self, key: &K) -> Option<&V> {
        SortedMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        SortedMap::contains_key(self, key)
    }

    fn size(&self) -> usize {
        SortedMap::size(self)
    }

    fn entries_boxed<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a> {
        Box::new(SortedMap::iter(self))
    }
}
