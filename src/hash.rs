/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The deterministic 32-bit hash contract used to place keys in a [`crate::HashTrieMap`].
//!
//! Only two key categories are recognized: signed 64-bit integers and UTF-8 strings.
//! [`TrieKey`] is sealed so that this boundary is enforced at compile time rather than
//! by a runtime check on an open key type.

/// A key type whose hash is defined by this crate's hash-trie contract.
///
/// Implemented only for `i64` and `str` (and, by extension, `String`, which borrows
/// as `str`). Any other key type is rejected at compile time: there is no generic
/// fallback to a user's own [`core::hash::Hash`] impl, because the hash-trie's shape
/// (collision handling, maximum depth) is specified in terms of this exact 32-bit
/// contract, not an arbitrary hasher.
pub trait TrieKey: sealed::Sealed {
    /// Computes the 32-bit hash consumed 4 bits at a time by the hash-trie.
    fn trie_hash(&self) -> u32;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i64 {}
    impl Sealed for str {}
    impl Sealed for alloc::string::String {}
}

impl TrieKey for i64 {
    fn trie_hash(&self) -> u32 {
        hash_integer(*self)
    }
}

impl TrieKey for str {
    fn trie_hash(&self) -> u32 {
        hash_str(self)
    }
}

impl TrieKey for alloc::string::String {
    fn trie_hash(&self) -> u32 {
        hash_str(self.as_str())
    }
}

/// Folds a 64-bit integer down to 32 bits: the low 32 bits are taken directly, and
/// any bits beyond that are XORed in, so the upper half of the value still influences
/// which slot a key lands in instead of being silently discarded.
fn hash_integer(value: i64) -> u32 {
    let mut remaining = value as u64;
    let mut h = (remaining & 0xFFFF_FFFF) as u32;

    remaining >>= 32;
    while remaining != 0 {
        h ^= (remaining & 0xFFFF_FFFF) as u32;
        remaining >>= 32;
    }

    h
}

/// JVM-style `h = (31 * h + ch) | 0` accumulator, run over Unicode scalar values
/// (the natural Rust analogue of the UTF-16 code units the original accumulator
/// iterates over); all but the low 32 bits are discarded, which is automatic here
/// since `h` is itself a wrapping `u32`.
fn hash_str(s: &str) -> u32 {
    let mut h: u32 = 0;

    for ch in s.chars() {
        h = h.wrapping_mul(31).wrapping_add(ch as u32);
    }

    h
}
