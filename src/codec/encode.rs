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

/// A growable byte buffer with little-endian writers for the widths the
/// wire format uses.
pub struct SketchBytes {
    bytes: Vec<u8>,
}

impl SketchBytes {
    /// Constructs an empty `SketchBytes` with at least the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Consumes the buffer and returns the underlying `Vec<u8>`.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Appends a single byte.
    pub fn write_u8(&mut self, n: u8) {
        self.bytes.push(n);
    }

    /// Appends a 16-bit unsigned integer in little-endian byte order.
    pub fn write_u16_le(&mut self, n: u16) {
        self.bytes.extend_from_slice(&n.to_le_bytes());
    }

    /// Appends a 64-bit unsigned integer in little-endian byte order.
    pub fn write_u64_le(&mut self, n: u64) {
        self.bytes.extend_from_slice(&n.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::SketchBytes;

    #[test]
    fn test_little_endian_layout() {
        let mut bytes = SketchBytes::with_capacity(11);
        bytes.write_u8(0xab);
        bytes.write_u16_le(0x0102);
        bytes.write_u64_le(0x1122334455667788);
        assert_eq!(
            bytes.into_bytes(),
            [0xab, 0x02, 0x01, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]
        );
    }
}
