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

//! Key hashing and per-instance seed derivation.
//!
//! Each structure owns `N` pairwise-distinct 64-bit seeds. A key's bucket
//! indices are produced by one mixer re-keyed per seed —
//! `(hash(key) ^ seed) % directory_size` — instead of `N` independent hash
//! functions. The seeds are drawn once at construction from a deterministic
//! stream over the 32-bit generator seed, so two instances built from the
//! same generator seed probe identically.

mod murmurhash;

pub use self::murmurhash::Murmur3Finalizer;
pub(crate) use self::murmurhash::fmix64;

/// A pure mixer from a key to a 64-bit hash with good avalanche behavior.
///
/// The structures re-key a single mixer with per-instance seeds, so the
/// mixer itself takes no seed. Implementations must be deterministic:
/// equal keys must produce equal hashes for the lifetime of a structure.
pub trait KeyHasher<K> {
    /// Hashes the key to a 64-bit value.
    fn hash(&self, key: &K) -> u64;
}

/// Increment of the seed stream's counter, the 64-bit golden-ratio gamma
/// used by splitmix-style generators.
const SEED_STREAM_GAMMA: u64 = 0x9e3779b97f4a7c15;

/// Draws `N` pairwise-distinct 64-bit seeds, deterministically in
/// `generator_seed`.
///
/// The stream is a splitmix-style counter sequence finalized with
/// [`fmix64`]; duplicates are discarded by rejection sampling. With `N`
/// small and the draw space 64 bits wide a retry is all but impossible, but
/// the loop tolerates any number of them.
pub(crate) fn derive_seeds<const N: usize>(generator_seed: u32) -> [u64; N] {
    let mut state = u64::from(generator_seed);
    let mut seeds = [0u64; N];
    for i in 0..N {
        loop {
            state = state.wrapping_add(SEED_STREAM_GAMMA);
            let candidate = fmix64(state);
            if !seeds[..i].contains(&candidate) {
                seeds[i] = candidate;
                break;
            }
        }
    }
    seeds
}
