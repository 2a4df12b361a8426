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

/// Occupancy counter of a single bucket.
///
/// The counter width is a tuning knob: directories are counter-dominated
/// for small key types, so a narrow counter saves memory, while a wide one
/// tolerates higher load and repeated-key workloads. The default used by
/// the sketches is `u16`.
///
/// Callers must size the counter so that no bucket ever exceeds its range;
/// overflow and underflow are programmer errors and trip the standard
/// debug-build arithmetic checks.
pub trait BucketCounter: Copy + Eq {
    /// An empty bucket's count.
    const ZERO: Self;

    /// Adds one key to the bucket's occupancy.
    fn increment(&mut self);

    /// Removes one key from the bucket's occupancy.
    fn decrement(&mut self);

    /// Returns true if no key is mapped to the bucket.
    fn is_zero(self) -> bool;

    /// Returns true if exactly one key is mapped to the bucket, which makes
    /// the bucket's accumulators ground truth for that key.
    fn is_pure(self) -> bool;

    /// Widens the count to 64 bits.
    fn to_bits(self) -> u64;

    /// Reconstructs a count from a widened bit pattern, truncating to the
    /// target width.
    fn from_bits(bits: u64) -> Self;
}

macro_rules! impl_bucket_counter {
    ($($ty:ty),*) => {
        $(
            impl BucketCounter for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn increment(&mut self) {
                    *self += 1;
                }

                #[inline]
                fn decrement(&mut self) {
                    *self -= 1;
                }

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }

                #[inline]
                fn is_pure(self) -> bool {
                    self == 1
                }

                #[inline]
                fn to_bits(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn from_bits(bits: u64) -> Self {
                    bits as Self
                }
            }
        )*
    };
}

impl_bucket_counter!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::BucketCounter;

    #[test]
    fn test_counting() {
        let mut count = u16::ZERO;
        assert!(count.is_zero());
        count.increment();
        assert!(count.is_pure());
        count.increment();
        assert!(!count.is_zero());
        assert!(!count.is_pure());
        count.decrement();
        count.decrement();
        assert!(count.is_zero());
    }
}
