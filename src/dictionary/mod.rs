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

//! Invertible Bloom Dictionary: a probabilistic map with value recovery
//! and peelable enumeration.
//!
//! Structurally this is the [filter](crate::filter) with one extra cell per
//! bucket: alongside the key accumulator and occupancy count, each bucket
//! XOR-accumulates the values of the entries mapped to it. A bucket holding
//! exactly one entry therefore exposes that entry's value, which gives the
//! dictionary [`get`](InvertibleBloomDictionary::get) on top of the set
//! surface, and lets the peeling decoder recover key/value pairs instead of
//! bare keys.
//!
//! Every probabilistic caveat of the filter carries over: `get` answers
//! `None` both for absent keys and for present-but-ambiguous ones, removal
//! requires unique recoverability, and enumeration can fail under load.
//!
//! # Usage
//!
//! ```rust
//! use invertible_bloom::dictionary::InvertibleBloomDictionary;
//!
//! let mut dictionary = InvertibleBloomDictionary::<u64, u32>::with_seed(21, 4);
//!
//! dictionary.insert(1, 100);
//! dictionary.insert(2, 200);
//! dictionary.insert(3, 300);
//!
//! assert_eq!(dictionary.get(&2), Some(200));
//!
//! let mut entries = dictionary.list_all().expect("load is well under the threshold");
//! entries.sort_unstable();
//! assert_eq!(entries, vec![(1, 100), (2, 200), (3, 300)]);
//! ```

mod serialization;
mod sketch;

pub use self::sketch::InvertibleBloomDictionary;
