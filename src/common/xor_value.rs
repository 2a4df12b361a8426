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

/// A fixed-width word that can be folded into an XOR accumulator.
///
/// Bucket cells store the XOR of every live key (and value) mapped to them.
/// Because XOR is its own inverse, [`absorb`](Self::absorb) both adds a word
/// to an accumulator and removes it again; absorbing the same word twice is
/// the identity.
///
/// Implemented for the unsigned integer types and for `()`, which is the
/// payload of the set variant (a filter bucket carries no value cell).
pub trait XorValue: Copy + Eq {
    /// The XOR identity: the all-zero bit pattern.
    const ZERO: Self;

    /// Folds `word` into `self` (bitwise XOR assignment).
    fn absorb(&mut self, word: Self);

    /// Widens the raw bit pattern to 64 bits.
    fn to_bits(self) -> u64;

    /// Reconstructs a value from a widened bit pattern, truncating to the
    /// target width. Pair with [`to_bits`](Self::to_bits) to detect words
    /// that do not fit.
    fn from_bits(bits: u64) -> Self;
}

macro_rules! impl_xor_value {
    ($($ty:ty),*) => {
        $(
            impl XorValue for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn absorb(&mut self, word: Self) {
                    *self ^= word;
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

impl_xor_value!(u8, u16, u32, u64, usize);

impl XorValue for () {
    const ZERO: Self = ();

    #[inline]
    fn absorb(&mut self, _word: Self) {}

    #[inline]
    fn to_bits(self) -> u64 {
        0
    }

    #[inline]
    fn from_bits(_bits: u64) -> Self {}
}
