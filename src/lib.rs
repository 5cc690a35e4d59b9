/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Scalable in-memory ordered and associative containers meant to sit behind a
//! structural-sharing immutable-update layer: every mutation touches a bounded
//! number of small nodes instead of rewriting a monolithic array or hash table.
//!
//! Four containers build on each other:
//!
//!   * [`HashTrieMap`] — a hash array mapped trie keyed by [`i64`] or [`str`].
//!   * [`SortedCollection`] — a B-tree ordered by a user comparator, duplicates allowed.
//!   * [`SortedMap`] — unique-key lookups (via a `HashTrieMap`) combined with ordered
//!     iteration (via a `SortedCollection`) by a caller-supplied ordering key.
//!   * [`LruCache`] — a `SortedMap` ordered by a monotonic recency counter, with
//!     capacity-triggered batch eviction.
//!
//! None of these containers are persistent: every operation mutates the node graph
//! in place. A host immutable-update framework wrapping this crate is expected to
//! snapshot the touched nodes itself; see the crate-level invariant that every node
//! is a plain, shallow-copyable, non-cyclic value.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod hash;
mod iter_utils;
pub mod lru;
pub mod map;
pub mod sorted;
pub mod views;

pub use hash::TrieKey;
pub use iter_utils::Restartable;
pub use lru::LruCache;
pub use map::HashTrieMap;
pub use sorted::collection::SortedCollection;
pub use sorted::map::SortedMap;
pub use views::{MapView, SetView};
