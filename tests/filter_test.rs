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

use std::collections::HashSet;

use invertible_bloom::common::ContainsResult;
use invertible_bloom::filter::InvertibleBloomFilter;

fn assert_seeds_distinct<const N: usize>(seeds: [u64; N]) {
    for i in 0..N {
        for j in i + 1..N {
            assert_ne!(seeds[i], seeds[j]);
        }
    }
}

#[test]
fn test_construct_zero_length() {
    let filter = InvertibleBloomFilter::<u64>::new(0);
    assert_eq!(filter.len(), 0);
    assert!(filter.is_empty());
    assert_eq!(filter.directory_size(), 0);
    assert_seeds_distinct(filter.seeds());
}

#[test]
fn test_construct_sized() {
    let filter = InvertibleBloomFilter::<u64>::new(10);
    assert_eq!(filter.len(), 0);
    assert_eq!(filter.directory_size(), 10);
    assert_seeds_distinct(filter.seeds());
}

#[test]
fn test_insert_and_contains() {
    let mut filter = InvertibleBloomFilter::<u64>::with_seed(10, 0);

    assert_eq!(filter.contains(&1337), ContainsResult::NotFound);
    filter.insert(1337);
    assert_eq!(filter.contains(&1337), ContainsResult::Exists);
    assert_eq!(filter.len(), 1);

    assert_eq!(filter.contains(&84), ContainsResult::NotFound);
    filter.insert(84);
    assert_eq!(filter.contains(&84), ContainsResult::Exists);
    assert_eq!(filter.len(), 2);
}

#[test]
fn test_remove() {
    let mut filter = InvertibleBloomFilter::<u64>::with_seed(10, 0);
    filter.insert(1337);
    filter.insert(84);

    assert!(filter.remove(&1337));
    assert_eq!(filter.contains(&1337), ContainsResult::NotFound);
    assert_eq!(filter.len(), 1);

    assert!(filter.remove(&84));
    assert_eq!(filter.contains(&84), ContainsResult::NotFound);
    assert_eq!(filter.len(), 0);

    // a drained filter is indistinguishable from a fresh one
    assert_eq!(filter, InvertibleBloomFilter::<u64>::with_seed(10, 0));
}

#[test]
fn test_remove_absent_key() {
    let mut filter = InvertibleBloomFilter::<u64>::with_seed(10, 3);
    filter.insert(5);

    assert!(!filter.remove(&6));
    assert_eq!(filter.len(), 1);
}

#[test]
fn test_list_all() {
    let mut filter = InvertibleBloomFilter::<u64>::with_seed(10, 0);
    for key in [1u64, 1337, 86] {
        filter.insert(key);
    }
    assert_eq!(filter.len(), 3);

    let keys = filter.list_all().expect("three keys in ten buckets peel");
    let expected: HashSet<u64> = [1, 1337, 86].into_iter().collect();
    assert_eq!(keys, expected);
    assert_eq!(filter.len(), 3);
}

#[test]
fn test_list_all_overload_failure() {
    let mut filter = InvertibleBloomFilter::<u64>::with_seed(2, 0);
    for key in 0u64..50 {
        filter.insert(key);
    }

    let snapshot = filter.clone();
    assert_eq!(filter.list_all(), None);
    assert_eq!(filter.len(), 50);
    assert_eq!(filter, snapshot);
}

#[test]
fn test_zero_length_directory_operations() {
    let mut filter = InvertibleBloomFilter::<u64>::with_seed(0, 0);
    assert_eq!(filter.list_all(), Some(HashSet::new()));

    filter.insert(9);
    assert_eq!(filter.len(), 1);
    assert_eq!(filter.contains(&9), ContainsResult::NotFound);
    assert!(!filter.remove(&9));
    assert_eq!(filter.list_all(), None);
}

#[test]
fn test_same_seed_builds_identical_filters() {
    let mut left = InvertibleBloomFilter::<u64>::with_seed(40, 12);
    let mut right = InvertibleBloomFilter::<u64>::with_seed(40, 12);
    assert_eq!(left.seeds(), right.seeds());

    for key in 200u64..220 {
        left.insert(key);
        right.insert(key);
    }
    assert_eq!(left, right);
}

#[test]
fn test_serialization_round_trip() {
    let mut filter = InvertibleBloomFilter::<u64>::with_seed(100, 42);
    for key in 0u64..20 {
        filter.insert(key);
    }

    let restored = InvertibleBloomFilter::<u64>::deserialize(&filter.serialize()).unwrap();
    assert_eq!(restored, filter);

    let expected: HashSet<u64> = (0u64..20).collect();
    assert_eq!(restored.list_all().expect("low load decodes"), expected);
}
