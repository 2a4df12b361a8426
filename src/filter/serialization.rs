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

use super::InvertibleBloomFilter;
use crate::codec::narrow_count;
use crate::codec::narrow_word;
use crate::codec::preamble_longs;
use crate::codec::SketchBytes;
use crate::codec::SketchSlice;
use crate::codec::EMPTY_FLAG_MASK;
use crate::codec::LONG_SIZE_BYTES;
use crate::codec::SERIAL_VERSION;
use crate::common::BucketCounter;
use crate::common::XorValue;
use crate::directory::Bucket;
use crate::directory::Directory;
use crate::error::Error;
use crate::hash::KeyHasher;

pub(crate) const FILTER_FAMILY_ID: u8 = 23;

impl<K, H, C, const N: usize> InvertibleBloomFilter<K, H, C, N>
where
    K: XorValue,
    H: KeyHasher<K>,
    C: BucketCounter,
{
    /// Serializes the filter to a byte image.
    ///
    /// The image carries the full seed tuple, so a peer that deserializes
    /// it probes identically. The hasher itself is not serialized; both
    /// sides must use the same hasher type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use invertible_bloom::filter::InvertibleBloomFilter;
    /// let mut filter = InvertibleBloomFilter::<u64>::with_seed(21, 4);
    /// filter.insert(10);
    ///
    /// let bytes = filter.serialize();
    /// let restored = InvertibleBloomFilter::<u64>::deserialize(&bytes).unwrap();
    /// assert_eq!(filter, restored);
    /// ```
    pub fn serialize(&self) -> Vec<u8> {
        let is_empty = self.is_empty();
        let preamble = preamble_longs(N, is_empty);
        let payload = if is_empty {
            0
        } else {
            self.directory.buckets().len() * 2 * LONG_SIZE_BYTES
        };
        let mut bytes = SketchBytes::with_capacity(preamble as usize * LONG_SIZE_BYTES + payload);

        bytes.write_u8(preamble); // Byte 0
        bytes.write_u8(SERIAL_VERSION); // Byte 1
        bytes.write_u8(FILTER_FAMILY_ID); // Byte 2
        bytes.write_u8(if is_empty { EMPTY_FLAG_MASK } else { 0 }); // Byte 3: flags
        bytes.write_u8(N as u8); // Byte 4: probes per key
        bytes.write_u8(0); // Bytes 5-7: unused
        bytes.write_u16_le(0);

        bytes.write_u64_le(self.directory_size() as u64);
        for seed in self.seeds() {
            bytes.write_u64_le(seed);
        }

        if !is_empty {
            bytes.write_u64_le(self.len() as u64);
            for bucket in self.directory.buckets() {
                bytes.write_u64_le(bucket.key_sum.to_bits());
                bytes.write_u64_le(bucket.count.to_bits());
            }
        }

        bytes.into_bytes()
    }

    /// Deserializes a filter from a byte image.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is truncated, belongs to a different
    /// family or serial version, was written with a different probe count,
    /// or carries words that do not fit this filter's key or counter
    /// width.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error>
    where
        H: Default,
    {
        let mut cursor = SketchSlice::new(bytes);

        let preamble = cursor
            .read_u8()
            .map_err(|_| Error::insufficient_data("preamble_longs"))?;
        let serial_version = cursor
            .read_u8()
            .map_err(|_| Error::insufficient_data("serial_version"))?;
        let family_id = cursor
            .read_u8()
            .map_err(|_| Error::insufficient_data("family_id"))?;
        let flags = cursor
            .read_u8()
            .map_err(|_| Error::insufficient_data("flags"))?;
        let num_hashes = cursor
            .read_u8()
            .map_err(|_| Error::insufficient_data("num_hashes"))?;
        let _unused = cursor
            .read_u8()
            .map_err(|_| Error::insufficient_data("unused_header"))?;
        let _unused = cursor
            .read_u16_le()
            .map_err(|_| Error::insufficient_data("unused_header"))?;

        if family_id != FILTER_FAMILY_ID {
            return Err(Error::invalid_family(
                FILTER_FAMILY_ID,
                family_id,
                "InvertibleBloomFilter",
            ));
        }
        if serial_version != SERIAL_VERSION {
            return Err(Error::unsupported_serial_version(
                SERIAL_VERSION,
                serial_version,
            ));
        }
        if usize::from(num_hashes) != N {
            return Err(Error::deserial(format!(
                "probe count mismatch: expected {N}, got {num_hashes}"
            )));
        }

        let is_empty = (flags & EMPTY_FLAG_MASK) != 0;
        let expected_preamble = preamble_longs(N, is_empty);
        if preamble != expected_preamble {
            return Err(Error::invalid_preamble_longs(expected_preamble, preamble));
        }

        let directory_size = cursor
            .read_u64_le()
            .map_err(|_| Error::insufficient_data("directory_size"))?
            as usize;
        let mut seeds = [0u64; N];
        for seed in &mut seeds {
            *seed = cursor
                .read_u64_le()
                .map_err(|_| Error::insufficient_data("seeds"))?;
        }

        let mut buckets = vec![Bucket::empty(); directory_size];
        let num_entries = if is_empty {
            0
        } else {
            let num_entries = cursor
                .read_u64_le()
                .map_err(|_| Error::insufficient_data("num_entries"))?
                as usize;
            for bucket in &mut buckets {
                let key_bits = cursor
                    .read_u64_le()
                    .map_err(|_| Error::insufficient_data("bucket key_sum"))?;
                bucket.key_sum = narrow_word(key_bits, "bucket key_sum")?;
                let count_bits = cursor
                    .read_u64_le()
                    .map_err(|_| Error::insufficient_data("bucket count"))?;
                bucket.count = narrow_count(count_bits, "bucket count")?;
            }
            num_entries
        };

        Ok(InvertibleBloomFilter {
            directory: Directory::from_parts(H::default(), seeds, buckets, num_entries),
        })
    }
}
