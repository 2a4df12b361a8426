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

//! Property-based tests over the guarantees both families make for every
//! seed and load: seed distinctness, no false negatives, sound value
//! recovery, exact enumeration, and clean state accounting. Probabilistic
//! outcomes (decode success, definitive answers) are never asserted — only
//! the invariants that hold unconditionally.

use std::collections::HashMap;
use std::collections::HashSet;

use proptest::prelude::*;

use crate::common::ContainsResult;
use crate::dictionary::InvertibleBloomDictionary;
use crate::filter::InvertibleBloomFilter;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn proptest_seeds_are_pairwise_distinct(
        directory_size in 0usize..64,
        generator_seed in any::<u32>(),
    ) {
        let filter = InvertibleBloomFilter::<u64>::with_seed(directory_size, generator_seed);
        let seeds = filter.seeds();
        for i in 0..seeds.len() {
            for j in i + 1..seeds.len() {
                assert_ne!(seeds[i], seeds[j]);
            }
        }
        // and stable for the lifetime of the instance
        assert_eq!(filter.seeds(), seeds);
    }

    #[test]
    fn proptest_no_false_negatives(
        keys in prop::collection::hash_set(any::<u64>(), 0..32),
        directory_size in 1usize..200,
        generator_seed in any::<u32>(),
    ) {
        let mut filter =
            InvertibleBloomFilter::<u64>::with_seed(directory_size, generator_seed);
        for &key in &keys {
            filter.insert(key);
        }
        for key in &keys {
            assert_ne!(filter.contains(key), ContainsResult::NotFound);
        }

        // removals may be refused under overlap, but never lose a live key
        let mut live: HashSet<u64> = keys.clone();
        for &key in &keys {
            if filter.remove(&key) {
                live.remove(&key);
            }
        }
        for key in &live {
            assert_ne!(filter.contains(key), ContainsResult::NotFound);
        }
        assert_eq!(filter.len(), live.len());
    }

    #[test]
    fn proptest_get_never_answers_a_wrong_value(
        entries in prop::collection::hash_map(any::<u64>(), any::<u32>(), 0..32),
        directory_size in 1usize..200,
        generator_seed in any::<u32>(),
    ) {
        let mut dictionary =
            InvertibleBloomDictionary::<u64, u32>::with_seed(directory_size, generator_seed);
        for (&key, &value) in &entries {
            dictionary.insert(key, value);
        }

        // absence and ambiguity both answer None; a recovered value is
        // always the stored one
        for (key, &value) in &entries {
            if let Some(recovered) = dictionary.get(key) {
                assert_eq!(recovered, value);
            }
        }
    }

    #[test]
    fn proptest_enumeration_is_exact_and_non_mutating(
        entries in prop::collection::hash_map(any::<u64>(), any::<u32>(), 0..32),
        directory_size in 1usize..200,
        generator_seed in any::<u32>(),
    ) {
        let mut dictionary =
            InvertibleBloomDictionary::<u64, u32>::with_seed(directory_size, generator_seed);
        for (&key, &value) in &entries {
            dictionary.insert(key, value);
        }

        let snapshot = dictionary.clone();
        if let Some(listed) = dictionary.list_all() {
            let listed: HashMap<u64, u32> = listed.into_iter().collect();
            assert_eq!(listed, entries);
        }
        assert_eq!(dictionary, snapshot);
    }

    #[test]
    fn proptest_insert_then_remove_restores_the_empty_state(
        key in any::<u64>(),
        value in any::<u32>(),
        directory_size in 1usize..64,
        generator_seed in any::<u32>(),
    ) {
        let empty =
            InvertibleBloomDictionary::<u64, u32>::with_seed(directory_size, generator_seed);
        let mut dictionary = empty.clone();

        dictionary.insert(key, value);
        assert_eq!(dictionary.get(&key), Some(value));
        assert!(dictionary.remove(&key));
        assert_eq!(dictionary, empty);
    }
}
