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

//! Invertible Bloom Filter: a probabilistic set with peelable enumeration.
//!
//! The filter answers membership like a classical Bloom filter — no false
//! negatives, possible false positives — and can additionally *enumerate*
//! its contents with a probability that depends on load: each bucket keeps
//! an XOR accumulator of the keys mapped to it plus an occupancy count, and
//! a peeling decoder strips entries out of singly-occupied buckets until
//! the directory is empty or decoding stalls.
//!
//! # Properties
//!
//! - **No false negatives**: a live key never answers
//!   [`NotFound`](crate::common::ContainsResult::NotFound)
//! - **Definitive positives are possible**: a probe landing in a bucket
//!   holding exactly that key answers
//!   [`Exists`](crate::common::ContainsResult::Exists)
//! - **Removal**: keys can be removed again while they are uniquely
//!   recoverable
//! - **Fixed size**: the directory never resizes; capacity is chosen
//!   up front
//!
//! # Usage
//!
//! ```rust
//! use invertible_bloom::common::ContainsResult;
//! use invertible_bloom::filter::InvertibleBloomFilter;
//!
//! let mut filter = InvertibleBloomFilter::<u64>::with_seed(21, 4);
//!
//! filter.insert(10);
//! filter.insert(20);
//! filter.insert(30);
//!
//! assert_eq!(filter.contains(&10), ContainsResult::Exists);
//! assert_eq!(filter.contains(&99), ContainsResult::NotFound);
//!
//! assert!(filter.remove(&20));
//!
//! let keys = filter.list_all().expect("load is well under the threshold");
//! assert_eq!(keys.len(), 2);
//! assert!(keys.contains(&10) && keys.contains(&30));
//! ```
//!
//! # Sizing
//!
//! Enumeration succeeds with high probability while the directory stays
//! about 1.25 buckets per key or larger for the default three probes;
//! beyond that, shared buckets form cycles the decoder cannot peel and
//! [`list_all`](InvertibleBloomFilter::list_all) reports failure. Avoid
//! power-of-two directory sizes: the probe projection only permutes the
//! hash's low bits then, so keys agreeing in those bits collide at every
//! probe.

mod serialization;
mod sketch;

pub use self::sketch::InvertibleBloomFilter;
