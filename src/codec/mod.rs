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

//! Byte-level helpers for the on-wire sketch images.
//!
//! Every word of a serialized image is widened to a little-endian `u64`;
//! the narrowing helpers reject images whose words do not fit the
//! structure's configured key, value, or counter width.

mod decode;
mod encode;

pub(crate) use self::decode::SketchSlice;
pub(crate) use self::encode::SketchBytes;

use crate::common::BucketCounter;
use crate::common::XorValue;
use crate::error::Error;

/// Serial version shared by both families' wire formats.
pub(crate) const SERIAL_VERSION: u8 = 1;

/// Flags bit marking an image with no live insertions.
pub(crate) const EMPTY_FLAG_MASK: u8 = 1 << 2;

/// Size of one wire word.
pub(crate) const LONG_SIZE_BYTES: usize = 8;

/// Header long, directory size, the seed tuple, plus one long for the
/// insertion count when the image is not empty.
pub(crate) fn preamble_longs(num_hashes: usize, is_empty: bool) -> u8 {
    (2 + num_hashes + usize::from(!is_empty)) as u8
}

/// Narrows a widened accumulator word back to `W`.
pub(crate) fn narrow_word<W: XorValue>(bits: u64, field: &'static str) -> Result<W, Error> {
    let word = W::from_bits(bits);
    if word.to_bits() != bits {
        return Err(Error::deserial(format!(
            "{field} does not fit the configured width"
        )));
    }
    Ok(word)
}

/// Narrows a widened occupancy count back to `C`.
pub(crate) fn narrow_count<C: BucketCounter>(bits: u64, field: &'static str) -> Result<C, Error> {
    let count = C::from_bits(bits);
    if count.to_bits() != bits {
        return Err(Error::deserial(format!(
            "{field} does not fit the configured width"
        )));
    }
    Ok(count)
}
