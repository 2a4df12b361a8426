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

use crate::common::BucketCounter;
use crate::common::ContainsResult;
use crate::common::XorValue;
use crate::directory::Directory;
use crate::hash::KeyHasher;
use crate::hash::Murmur3Finalizer;

/// A probabilistic map over fixed-width integer keys and values.
///
/// Supports the whole [filter](crate::filter::InvertibleBloomFilter)
/// surface plus per-key value recovery. See the [module docs](super) for
/// the data-structure model.
#[derive(Debug, Clone, PartialEq)]
pub struct InvertibleBloomDictionary<K, V, H = Murmur3Finalizer, C = u16, const N: usize = 3> {
    pub(super) directory: Directory<K, V, H, C, N>,
}

impl<K, V, H, C, const N: usize> InvertibleBloomDictionary<K, V, H, C, N>
where
    K: XorValue,
    V: XorValue,
    H: KeyHasher<K>,
    C: BucketCounter,
{
    /// Creates an empty dictionary with an entropy-sourced generator seed.
    ///
    /// The directory size is fixed for the dictionary's lifetime; pick one
    /// that fits the expected entries up front. A zero-length directory is
    /// legal but degenerate: every probe misses and only the insertion
    /// count moves.
    pub fn new(directory_size: usize) -> Self
    where
        H: Default,
    {
        Self::with_seed(directory_size, rand::random())
    }

    /// Creates an empty dictionary whose seeds are deterministic in
    /// `generator_seed`, so two dictionaries built with the same seed
    /// probe identically.
    pub fn with_seed(directory_size: usize, generator_seed: u32) -> Self
    where
        H: Default,
    {
        Self::with_hasher(directory_size, generator_seed, H::default())
    }

    /// Creates an empty dictionary using the supplied key mixer.
    pub fn with_hasher(directory_size: usize, generator_seed: u32, hasher: H) -> Self {
        InvertibleBloomDictionary {
            directory: Directory::new(directory_size, generator_seed, hasher),
        }
    }

    /// Inserts an entry. Never fails; inserting the same key again is
    /// legal and grows the accumulators accordingly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use invertible_bloom::common::ContainsResult;
    /// # use invertible_bloom::dictionary::InvertibleBloomDictionary;
    /// let mut dictionary = InvertibleBloomDictionary::<u64, u32>::with_seed(10, 0);
    ///
    /// assert_eq!(dictionary.contains(&1337), ContainsResult::NotFound);
    /// dictionary.insert(1337, 42);
    /// assert_eq!(dictionary.contains(&1337), ContainsResult::Exists);
    /// assert_eq!(dictionary.get(&1337), Some(42));
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        self.directory.insert(key, value);
    }

    /// Probes for a key.
    ///
    /// May answer [`ContainsResult::MightExist`] for a key that was never
    /// inserted, but never [`ContainsResult::NotFound`] for a live one.
    pub fn contains(&self, key: &K) -> ContainsResult {
        self.directory.contains(key)
    }

    /// Recovers the value stored for `key`.
    ///
    /// `None` is ambiguous by design: the key may be absent, or present
    /// but not uniquely identifiable under the current load — the two are
    /// indistinguishable to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// # use invertible_bloom::dictionary::InvertibleBloomDictionary;
    /// let mut dictionary = InvertibleBloomDictionary::<u64, u32>::with_seed(15, 7);
    /// dictionary.insert(7, 99);
    ///
    /// assert_eq!(dictionary.get(&7), Some(99));
    /// assert_eq!(dictionary.get(&8), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<V> {
        self.directory.get(key)
    }

    /// Removes an entry if its value is uniquely recoverable, returning
    /// whether the removal happened.
    ///
    /// Removal must XOR the stored value back out of every probed bucket,
    /// so it is refused — without state change — whenever
    /// [`get`](Self::get) cannot supply that value, including for live but
    /// ambiguous entries.
    ///
    /// # Examples
    ///
    /// ```
    /// # use invertible_bloom::common::ContainsResult;
    /// # use invertible_bloom::dictionary::InvertibleBloomDictionary;
    /// let mut dictionary = InvertibleBloomDictionary::<u64, u32>::with_seed(15, 7);
    /// dictionary.insert(7, 99);
    ///
    /// assert!(dictionary.remove(&7));
    /// assert_eq!(dictionary.contains(&7), ContainsResult::NotFound);
    /// assert!(dictionary.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.directory.remove(key)
    }

    /// Attempts to enumerate every inserted entry.
    ///
    /// Decodes a clone of the dictionary by peeling, leaving the
    /// dictionary itself untouched. Returns `None` when decoding stalls,
    /// which becomes likely once the load exceeds the peeling threshold.
    /// Enumeration order is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// # use invertible_bloom::dictionary::InvertibleBloomDictionary;
    /// let mut dictionary = InvertibleBloomDictionary::<u64, u32>::with_seed(25, 3);
    /// dictionary.insert(1, 10);
    /// dictionary.insert(2, 20);
    /// dictionary.insert(3, 30);
    ///
    /// let mut entries = dictionary.list_all().expect("three entries in 25 buckets peel");
    /// entries.sort_unstable();
    /// assert_eq!(entries, vec![(1, 10), (2, 20), (3, 30)]);
    /// ```
    pub fn list_all(&self) -> Option<Vec<(K, V)>>
    where
        H: Clone,
    {
        self.directory.list_entries()
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

    /// The dictionary's seed tuple, in probe order.
    ///
    /// Together with the directory contents this is enough for external
    /// code to serialize the dictionary or build a peer that probes
    /// identically.
    pub fn seeds(&self) -> [u64; N] {
        self.directory.seeds()
    }
}

#[cfg(test)]
mod tests {
    use super::InvertibleBloomDictionary;
    use crate::common::ContainsResult;

    #[test]
    fn test_insert_and_get() {
        let mut dictionary = InvertibleBloomDictionary::<u64, u32>::with_seed(10, 0);

        dictionary.insert(1337, 42);
        dictionary.insert(84, 85);
        assert_eq!(dictionary.get(&1337), Some(42));
        assert_eq!(dictionary.get(&84), Some(85));
        assert_eq!(dictionary.get(&86), None);
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn test_get_is_ambiguous_under_overlap() {
        let mut dictionary = InvertibleBloomDictionary::<u64, u32>::with_seed(2, 0);
        for key in [1u64, 2, 3] {
            dictionary.insert(key, 10 * key as u32);
        }

        // every bucket is shared, so live entries are unrecoverable
        assert_eq!(dictionary.get(&1), None);
        assert_eq!(dictionary.contains(&1), ContainsResult::MightExist);
        assert!(!dictionary.remove(&1));
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn test_remove_restores_empty_state() {
        let empty = InvertibleBloomDictionary::<u64, u32>::with_seed(15, 7);
        let mut dictionary = empty.clone();

        dictionary.insert(7, 99);
        assert!(dictionary.remove(&7));
        assert_eq!(dictionary, empty);
    }

    #[test]
    fn test_list_all_recovers_pairs() {
        let mut dictionary = InvertibleBloomDictionary::<u64, u32>::with_seed(100, 42);
        for key in 0u64..20 {
            dictionary.insert(key, 3 * key as u32);
        }

        let mut entries = dictionary.list_all().expect("low load decodes");
        entries.sort_unstable();
        let expected: Vec<(u64, u32)> = (0u64..20).map(|k| (k, 3 * k as u32)).collect();
        assert_eq!(entries, expected);
        assert_eq!(dictionary.len(), 20);
    }

    #[test]
    fn test_duplicate_inserts_defeat_enumeration() {
        let mut dictionary = InvertibleBloomDictionary::<u64, u32>::with_seed(16, 2);
        dictionary.insert(4, 4);
        dictionary.insert(4, 4);

        // every bucket of the doubled key counts two entries, so no pure
        // bucket ever appears
        assert_eq!(dictionary.list_all(), None);
        assert_eq!(dictionary.len(), 2);
    }
}
