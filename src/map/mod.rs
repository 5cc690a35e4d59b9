/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The hash-trie associative container (C2).

mod hash_trie_map;

pub use hash_trie_map::{HashTrieMap, Iter, IterKeys, IterValues};
