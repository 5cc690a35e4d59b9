/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Read-only view wrappers over [`crate::SortedMap`] and [`crate::LruCache`] (C7).
//!
//! A view borrows its backing container and exposes only the associative-read
//! surface (`get`, `contains_key`, `size`, `entries`/`keys`/`values`, `for_each`) —
//! there is no mutating method to enforce read-only-ness against, so the type
//! system is the only capability check needed.

use crate::Restartable;
use alloc::boxed::Box;
use core::marker::PhantomData;

/// Implemented by the two composite containers a view can wrap. Kept crate-visible
/// rather than public: it exists to let [`MapView`]/[`SetView`] be generic over
/// either container, not as an extension point for user types.
pub(crate) trait Sequenced<K, V> {
    fn get(&self, key: &K) -> Option<&V>;
    fn contains_key(&self, key: &K) -> bool;
    fn size(&self) -> usize;
    fn entries_boxed<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;
}

/// A borrowing, read-only view over a map-shaped container's `(key, value)` pairs.
pub struct MapView<'a, K, V, S> {
    container: &'a S,
    _marker: PhantomData<(K, V)>,
}

impl<'a, K, V, S: Sequenced<K, V>> MapView<'a, K, V, S> {
    pub fn new(container: &'a S) -> Self {
        MapView { container, _marker: PhantomData }
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&'a V> {
        self.container.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.container.contains_key(key)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.container.size()
    }

    #[must_use]
    pub fn entries(&self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a> {
        self.container.entries_boxed()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a K> + 'a {
        self.entries().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &'a V> + 'a {
        self.entries().map(|(_, v)| v)
    }

    /// Invokes `f(value, key, view)` for every entry, in iteration order.
    pub fn for_each<F: FnMut(&'a V, &'a K, &Self)>(&self, mut f: F) {
        for (k, v) in self.entries() {
            f(v, k, self);
        }
    }
}

impl<'a, K, V, S: Sequenced<K, V>> Restartable<'a> for MapView<'a, K, V, S> {
    type Item = (&'a K, &'a V);
    type Iter = Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

    fn restart(&'a self) -> Self::Iter {
        self.container.entries_boxed()
    }
}

/// A borrowing, read-only view over a map-shaped container's key set.
pub struct SetView<'a, K, V, S> {
    container: &'a S,
    _marker: PhantomData<(K, V)>,
}

impl<'a, K, V, S: Sequenced<K, V>> SetView<'a, K, V, S> {
    pub fn new(container: &'a S) -> Self {
        SetView { container, _marker: PhantomData }
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.container.contains_key(key)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.container.size()
    }

    #[must_use]
    pub fn keys(&self) -> impl Iterator<Item = &'a K> + 'a {
        self.container.entries_boxed().map(|(k, _)| k)
    }

    /// Invokes `f(key, key, view)` for every key, in iteration order — mirroring
    /// `MapView::for_each`'s `(value, key, view)` shape with the key standing in
    /// for the absent value.
    pub fn for_each<F: FnMut(&'a K, &'a K, &Self)>(&self, mut f: F) {
        for key in self.keys() {
            f(key, key, self);
        }
    }
}

impl<'a, K, V, S: Sequenced<K, V>> Restartable<'a> for SetView<'a, K, V, S> {
    type Item = &'a K;
    type Iter = Box<dyn Iterator<Item = &'a K> + 'a>;

    fn restart(&'a self) -> Self::Iter {
        Box::new(self.container.entries_boxed().map(|(k, _)| k))
    }
}

#[cfg(test)]
mod test;
