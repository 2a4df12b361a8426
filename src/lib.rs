// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Invertible Bloom data structures.
//!
//! This crate implements two structurally parallel probabilistic
//! structures over fixed-width integer entries:
//!
//! - [`filter::InvertibleBloomFilter`] — a probabilistic **set**. Like a
//!   classical Bloom filter it answers membership with no false negatives
//!   and possible false positives, but it also supports removal and can,
//!   load permitting, enumerate the inserted keys.
//! - [`dictionary::InvertibleBloomDictionary`] — a probabilistic **map**.
//!   The same machinery with a value accumulator per bucket, adding
//!   per-key value recovery and key/value enumeration.
//!
//! Both are built on the same core: a fixed-length directory of buckets,
//! each holding XOR accumulators and an occupancy count, probed at `N`
//! positions derived by re-keying one mixer with per-instance seeds. A
//! bucket occupied by exactly one entry is ground truth for it, which
//! yields definitive membership answers, value recovery, and the peeling
//! decoder behind enumeration.
//!
//! Enumeration is *not* guaranteed: past a load threshold the decoder
//! stalls and reports failure, which is an ordinary outcome, not an error.
//! The structures never resize, make no cryptographic claims, and are not
//! thread-safe; confine an instance to one thread or synchronize
//! externally.
//!
//! # Usage
//!
//! ```rust
//! use invertible_bloom::dictionary::InvertibleBloomDictionary;
//!
//! let mut dictionary = InvertibleBloomDictionary::<u64, u32>::with_seed(25, 3);
//! dictionary.insert(1, 10);
//! dictionary.insert(2, 20);
//! dictionary.insert(3, 30);
//!
//! assert_eq!(dictionary.get(&2), Some(20));
//!
//! let mut entries = dictionary.list_all().expect("three entries in 25 buckets peel");
//! entries.sort_unstable();
//! assert_eq!(entries, vec![(1, 10), (2, 20), (3, 30)]);
//! ```

mod codec;
pub mod common;
pub mod dictionary;
mod directory;
pub mod error;
pub mod filter;
pub mod hash;

#[cfg(test)]
mod proptests;
