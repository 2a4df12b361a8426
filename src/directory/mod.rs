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
use crate::hash::derive_seeds;
use crate::hash::KeyHasher;

/// One cell of the directory: XOR accumulators over the keys (and values)
/// mapped here, plus an occupancy count.
///
/// A bucket with `count == 1` is *pure*: its accumulators hold exactly one
/// live entry and are ground truth for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bucket<K, V, C> {
    pub(crate) key_sum: K,
    pub(crate) value_sum: V,
    pub(crate) count: C,
}

impl<K: XorValue, V: XorValue, C: BucketCounter> Bucket<K, V, C> {
    pub(crate) fn empty() -> Self {
        Bucket {
            key_sum: K::ZERO,
            value_sum: V::ZERO,
            count: C::ZERO,
        }
    }
}

/// The shared core of both invertible Bloom families: a fixed-length bucket
/// directory with its hashing discipline and the peeling decoder.
///
/// The set variant instantiates the value payload with `()`, so its buckets
/// carry no value cell at runtime; the dictionary uses a real value type.
///
/// A key's probe indices are `(hash(key) ^ seed) % directory_size` for each
/// of the `N` seeds. Two seeds may project a key onto the same bucket; every
/// mutation collapses the probe list to its distinct indices first, because
/// XOR-ing the same key into a bucket twice cancels back to the identity and
/// would corrupt the cell. The occupancy count moves once per distinct
/// index for the same reason.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Directory<K, V, H, C, const N: usize> {
    hasher: H,
    seeds: [u64; N],
    buckets: Vec<Bucket<K, V, C>>,
    num_entries: usize,
}

impl<K, V, H, C, const N: usize> Directory<K, V, H, C, N>
where
    K: XorValue,
    V: XorValue,
    H: KeyHasher<K>,
    C: BucketCounter,
{
    /// Creates an empty directory of the given size with seeds derived
    /// deterministically from `generator_seed`.
    pub(crate) fn new(directory_size: usize, generator_seed: u32, hasher: H) -> Self {
        Directory {
            hasher,
            seeds: derive_seeds(generator_seed),
            buckets: vec![Bucket::empty(); directory_size],
            num_entries: 0,
        }
    }

    /// Reassembles a directory from deserialized parts.
    pub(crate) fn from_parts(
        hasher: H,
        seeds: [u64; N],
        buckets: Vec<Bucket<K, V, C>>,
        num_entries: usize,
    ) -> Self {
        Directory {
            hasher,
            seeds,
            buckets,
            num_entries,
        }
    }

    /// Number of live insertions.
    pub(crate) fn len(&self) -> usize {
        self.num_entries
    }

    /// Fixed length of the bucket directory.
    pub(crate) fn directory_size(&self) -> usize {
        self.buckets.len()
    }

    /// The instance's seed tuple, in probe order.
    pub(crate) fn seeds(&self) -> [u64; N] {
        self.seeds
    }

    /// The raw bucket array, for serialization.
    pub(crate) fn buckets(&self) -> &[Bucket<K, V, C>] {
        &self.buckets
    }

    fn bucket_index(&self, key: &K, seed: u64) -> usize {
        debug_assert!(!self.buckets.is_empty());
        let hash = self.hasher.hash(key) ^ seed;
        (hash % self.buckets.len() as u64) as usize
    }

    /// Collapses the `N` probe indices of `key` to their distinct prefix.
    fn distinct_indices(&self, key: &K) -> ([usize; N], usize) {
        let mut indices = [0usize; N];
        let mut distinct = 0;
        for seed in self.seeds {
            let index = self.bucket_index(key, seed);
            if !indices[..distinct].contains(&index) {
                indices[distinct] = index;
                distinct += 1;
            }
        }
        (indices, distinct)
    }

    /// Folds an entry into the directory. Never fails; repeated insertion
    /// of the same key grows the accumulators and counts accordingly.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        if !self.buckets.is_empty() {
            let (indices, distinct) = self.distinct_indices(&key);
            for &index in &indices[..distinct] {
                let bucket = &mut self.buckets[index];
                bucket.key_sum.absorb(key);
                bucket.value_sum.absorb(value);
                bucket.count.increment();
            }
        }
        self.num_entries += 1;
    }

    /// Three-state membership probe.
    ///
    /// Probes the `N` buckets in seed order. The first pure bucket decides
    /// definitively in either direction; an entirely empty probe set is a
    /// definitive negative. Only a probe set where every hit is shared
    /// answers [`ContainsResult::MightExist`].
    pub(crate) fn contains(&self, key: &K) -> ContainsResult {
        let mut might_exist = false;
        if !self.buckets.is_empty() {
            for seed in self.seeds {
                let bucket = &self.buckets[self.bucket_index(key, seed)];
                if bucket.count.is_pure() {
                    return if bucket.key_sum == *key {
                        ContainsResult::Exists
                    } else {
                        ContainsResult::NotFound
                    };
                }
                might_exist |= !bucket.count.is_zero();
            }
        }
        if might_exist {
            ContainsResult::MightExist
        } else {
            ContainsResult::NotFound
        }
    }

    /// Recovers the value stored for `key`, if a pure bucket identifies it
    /// uniquely. `None` covers both absence and ambiguity.
    pub(crate) fn get(&self, key: &K) -> Option<V> {
        if self.buckets.is_empty() {
            return None;
        }
        for seed in self.seeds {
            let bucket = &self.buckets[self.bucket_index(key, seed)];
            if bucket.count.is_pure() {
                return (bucket.key_sum == *key).then_some(bucket.value_sum);
            }
        }
        None
    }

    /// Folds an entry back out of the directory.
    ///
    /// The entry must be uniquely recoverable first: removal needs the
    /// stored value to XOR out, and an ambiguous state cannot supply it.
    /// Returns false without touching any state otherwise.
    pub(crate) fn remove(&mut self, key: &K) -> bool {
        let Some(value) = self.get(key) else {
            return false;
        };
        let (indices, distinct) = self.distinct_indices(key);
        for &index in &indices[..distinct] {
            let bucket = &mut self.buckets[index];
            debug_assert!(!bucket.count.is_zero());
            bucket.key_sum.absorb(*key);
            bucket.value_sum.absorb(value);
            bucket.count.decrement();
        }
        self.num_entries -= 1;
        true
    }

    /// The peeling decoder: attempts to enumerate every live entry.
    ///
    /// Works on a clone, so the receiver is untouched. Each pass scans for
    /// pure buckets; every hit reveals one entry, which is then removed
    /// from the clone, often turning overlapping buckets pure in turn.
    /// Decoding stalls when a pass makes no progress while shared buckets
    /// remain, which happens with high probability once the load exceeds
    /// the peeling threshold for `N` probes.
    pub(crate) fn list_entries(&self) -> Option<Vec<(K, V)>>
    where
        H: Clone,
    {
        let mut entries = Vec::with_capacity(self.num_entries);
        let mut decoder = self.clone();

        let mut finished = false;
        let mut has_changed = true;
        while !finished && has_changed {
            finished = true;
            has_changed = false;
            for index in 0..decoder.buckets.len() {
                let bucket = decoder.buckets[index];
                if bucket.count.is_zero() {
                    continue;
                }
                if !bucket.count.is_pure() {
                    finished = false;
                    continue;
                }

                entries.push((bucket.key_sum, bucket.value_sum));
                has_changed = decoder.remove(&bucket.key_sum);
                debug_assert!(decoder.buckets[index].count.is_zero());
            }
        }

        if !finished || entries.len() != self.num_entries {
            return None;
        }
        Some(entries)
    }
}
