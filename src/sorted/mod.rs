/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The ordered containers: a bare B-tree ([`collection::SortedCollection`]) and a
//! composite unique-key/ordered-iteration map built on top of it ([`map::SortedMap`]).

pub mod collection;
pub mod map;
