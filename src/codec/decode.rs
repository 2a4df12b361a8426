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

use std::io;
use std::io::Cursor;

use byteorder::ReadBytesExt;
use byteorder::LE;

/// A cursor over a serialized image with little-endian readers matching
/// [`SketchBytes`](super::SketchBytes).
pub struct SketchSlice<'a> {
    slice: Cursor<&'a [u8]>,
}

impl SketchSlice<'_> {
    /// Creates a new `SketchSlice` over the given bytes.
    pub fn new(slice: &[u8]) -> SketchSlice<'_> {
        SketchSlice {
            slice: Cursor::new(slice),
        }
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> io::Result<u8> {
        self.slice.read_u8()
    }

    /// Reads a 16-bit unsigned integer in little-endian byte order.
    pub fn read_u16_le(&mut self) -> io::Result<u16> {
        self.slice.read_u16::<LE>()
    }

    /// Reads a 64-bit unsigned integer in little-endian byte order.
    pub fn read_u64_le(&mut self) -> io::Result<u64> {
        self.slice.read_u64::<LE>()
    }
}

#[cfg(test)]
mod tests {
    use super::SketchSlice;

    #[test]
    fn test_reads_match_writer() {
        let bytes = [0xab, 0x02, 0x01, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11];
        let mut slice = SketchSlice::new(&bytes);
        assert_eq!(slice.read_u8().unwrap(), 0xab);
        assert_eq!(slice.read_u16_le().unwrap(), 0x0102);
        assert_eq!(slice.read_u64_le().unwrap(), 0x1122334455667788);
        assert!(slice.read_u8().is_err());
    }
}
