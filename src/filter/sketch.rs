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
use std::hash::Hash;

use crate::common::BucketCounter;
use crate::common::ContainsResult;
use crate::common::XorValue;
use crate::directory::Directory;
use crate::hash::KeyHasher;
use crate::hash::Murmur3Finalizer;

/// A probabilistic set over fixed-width integer keys.
///
/// Beyond Bloom-style membership probes the filter supports removal and,
/// load permitting, full enumeration of the inserted keys. See the
/// [module docs](super) for the data-structure model.
///
/// Type parameters: `K` is the key type, `H` the key mixer, `C` the bucket
/// counter width, and `N` the number of probes per key. The defaults —
/// Murmur3-finalizer mixing, `u16` counters, three probes — fit typical
/// loads.
#[derive(Debug, Clone, PartialEq)]
pub struct InvertibleBloomFilter<K, H = Murmur3Finalizer, C = u16, const N: usize = 3> {
    pub(super) directory: Directory<K, (), H, C, N>,
}

impl<K, H, C, const N: usize> InvertibleBloomFilter<K, H, C, N>
where
    K: XorValue,
    H: KeyHasher<K>,
    C: BucketCounter,
{
    /// Creates an empty filter with an entropy-sourced generator seed.
    ///
    /// The directory size is fixed for the filter's lifetime; pick one that
    /// fits the expected keys up front. A zero-length directory is legal
    /// but degenerate: every probe misses and only the insertion count
    /// moves.
    pub fn new(directory_size: usize) -> Self
    where
        H: Default,
    {
        Self::with_seed(directory_size, rand::random())
    }

    /// Creates an empty filter whose seeds are deterministic in
    /// `generator_seed`, so two filters built with the same seed probe
    /// identically.
    pub fn with_seed(directory_size: usize, generator_seed: u32) -> Self
    where
        H: Default,
    {
        Self::with_hasher(directory_size, generator_seed, H::default())
    }

    /// Creates an empty filter using the supplied key mixer.
    pub fn with_hasher(directory_size: usize, generator_seed: u32, hasher: H) -> Self {
        InvertibleBloomFilter {
            directory: Directory::new(directory_size, generator_seed, hasher),
        }
    }

    /// Inserts a key. Never fails; inserting the same key again is legal
    /// and grows the accumulators accordingly.
    pub fn insert(&mut self, key: K) {
        self.directory.insert(key, ());
    }

    /// Probes for a key.
    ///
    /// May answer [`ContainsResult::MightExist`] for a key that was never
    /// inserted, but never [`ContainsResult::NotFound`] for a live one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use invertible_bloom::common::ContainsResult;
    /// # use invertible_bloom::filter::InvertibleBloomFilter;
    /// let mut filter = InvertibleBloomFilter::<u64>::with_seed(15, 7);
    /// filter.insert(11);
    ///
    /// assert_eq!(filter.contains(&11), ContainsResult::Exists);
    /// assert_eq!(filter.contains(&5), ContainsResult::NotFound);
    /// ```
    pub fn contains(&self, key: &K) -> ContainsResult {
        self.directory.contains(key)
    }

    /// Removes a key if it is uniquely recoverable, returning whether the
    /// removal happened.
    ///
    /// A false return does not prove absence: a live key that shares all
    /// of its buckets is not removable until overlapping keys leave. No
    /// state changes on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// # use invertible_bloom::common::ContainsResult;
    /// # use invertible_bloom::filter::InvertibleBloomFilter;
    /// let mut filter = InvertibleBloomFilter::<u64>::with_seed(15, 7);
    /// filter.insert(11);
    ///
    /// assert!(filter.remove(&11));
    /// assert_eq!(filter.contains(&11), ContainsResult::NotFound);
    /// assert!(filter.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.directory.remove(key)
    }

    /// Attempts to enumerate every inserted key.
    ///
    /// Decodes a clone of the filter by peeling, leaving the filter itself
    /// untouched. Returns `None` when decoding stalls, which becomes
    /// likely once the load exceeds the peeling threshold. Enumeration
    /// order is unspecified, hence the set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use invertible_bloom::filter::InvertibleBloomFilter;
    /// let mut filter = InvertibleBloomFilter::<u64>::with_seed(21, 1);
    /// filter.insert(1);
    /// filter.insert(2);
    /// filter.insert(3);
    ///
    /// let keys = filter.list_all().expect("three keys in 21 buckets peel");
    /// assert_eq!(keys.len(), 3);
    /// assert!(keys.contains(&1) && keys.contains(&2) && keys.contains(&3));
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn list_all(&self) -> Option<HashSet<K>>
    where
        K: Hash,
        H: Clone,
    {
        let entries = self.directory.list_entries()?;
        let keys: HashSet<K> = entries.into_iter().map(|(key, ())| key).collect();
        // a duplicate-heavy workload can collapse the collected set below
        // the insertion count; report that as a decoding failure too
        (keys.len() == self.directory.len()).then_some(keys)
    }

    /// Number of live insertions.
    pub fn len(&self) -> usize {
        self.directory.len()
    }

    /// Returns true if nothing is currently inserted.
    pub fn is_empty(&self) -> bool {
        self.directory.len() == 0
    }

    /// Fixed length of the bucket directory.
    pub fn directory_size(&self) -> usize {
        self.directory.directory_size()
    }

    /// The filter's seed tuple, in probe order.
    ///
    /// Together with the directory contents this is enough for external
    /// code to serialize the filter or build a peer that probes
    /// identically.
    pub fn seeds(&self) -> [u64; N] {
        self.directory.seeds()
    }
}

#[cfg(test)]
mod tests {
    use super::InvertibleBloomFilter;
    use crate::common::ContainsResult;
    use crate::hash::Murmur3Finalizer;

    #[test]
    fn test_insert_and_contains() {
        let mut filter = InvertibleBloomFilter::<u64>::with_seed(15, 7);
        assert_eq!(filter.contains(&11), ContainsResult::NotFound);

        filter.insert(11);
        assert_eq!(filter.contains(&11), ContainsResult::Exists);
        assert_eq!(filter.contains(&5), ContainsResult::NotFound);
        assert_eq!(filter.len(), 1);
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_remove_restores_empty_state() {
        let empty = InvertibleBloomFilter::<u64>::with_seed(15, 7);
        let mut filter = empty.clone();

        filter.insert(11);
        assert_ne!(filter, empty);

        assert!(filter.remove(&11));
        assert_eq!(filter, empty);

        assert!(!filter.remove(&11));
    }

    #[test]
    fn test_list_all_round_trip() {
        let mut filter = InvertibleBloomFilter::<u64>::with_seed(100, 42);
        for key in 0u64..20 {
            filter.insert(key);
        }

        let keys = filter.list_all().expect("low load decodes");
        let expected: std::collections::HashSet<u64> = (0u64..20).collect();
        assert_eq!(keys, expected);
        assert_eq!(filter.len(), 20);
    }

    #[test]
    fn test_list_all_fails_beyond_threshold() {
        let mut filter = InvertibleBloomFilter::<u64>::with_seed(2, 0);
        for key in 0u64..50 {
            filter.insert(key);
        }

        assert_eq!(filter.list_all(), None);
        // the failed decode left the filter unchanged
        assert_eq!(filter.len(), 50);
    }

    #[test]
    fn test_narrow_key_and_counter_types() {
        let mut filter = InvertibleBloomFilter::<u16, Murmur3Finalizer, u8>::with_seed(23, 5);
        for key in [0x1111u16, 0x2222, 0x3333] {
            filter.insert(key);
        }
        let keys = filter.list_all().expect("three keys in 23 buckets peel");
        let expected: std::collections::HashSet<u16> = [0x1111, 0x2222, 0x3333].into_iter().collect();
        assert_eq!(keys, expected);
    }
}
