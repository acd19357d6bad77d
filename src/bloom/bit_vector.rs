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

use crate::error::Error;
use crate::error::ErrorKind;

/// Fixed-size packed bit storage.
///
/// Bits are packed eight per byte and start out all zero. The only mutation
/// primitive is `set` by index; there is no clear-all, so a filter built on
/// top of it can rely on bits never reverting once set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVector {
    /// Bit storage, length `ceil(num_bits / 8)`.
    blocks: Vec<u8>,
    num_bits: u32,
}

impl BitVector {
    /// Creates a vector of `num_bits` zeroed bits.
    pub fn new(num_bits: u32) -> Self {
        let num_blocks = (num_bits as usize).div_ceil(8);
        Self {
            blocks: vec![0; num_blocks],
            num_bits,
        }
    }

    /// Returns the number of addressable bits.
    pub fn num_bits(&self) -> u32 {
        self.num_bits
    }

    /// Returns the bit at `index`.
    ///
    /// Fails with [`ErrorKind::IndexOutOfRange`] when `index` is outside
    /// `[0, num_bits)`.
    pub fn get(&self, index: u32) -> Result<bool, Error> {
        self.check_index(index)?;
        let block = self.blocks[(index / 8) as usize];
        Ok((block >> (index % 8)) & 1 == 1)
    }

    /// Sets the bit at `index` to `value`.
    ///
    /// Fails with [`ErrorKind::IndexOutOfRange`] when `index` is outside
    /// `[0, num_bits)`.
    pub fn set(&mut self, index: u32, value: bool) -> Result<(), Error> {
        self.check_index(index)?;
        let block = &mut self.blocks[(index / 8) as usize];
        let mask = 1u8 << (index % 8);
        if value {
            *block |= mask;
        } else {
            *block &= !mask;
        }
        Ok(())
    }

    /// Returns the number of bits set to 1, for saturation statistics.
    pub fn count_ones(&self) -> u64 {
        self.blocks
            .iter()
            .map(|block| u64::from(block.count_ones()))
            .sum()
    }

    fn check_index(&self, index: u32) -> Result<(), Error> {
        if index >= self.num_bits {
            return Err(
                Error::new(ErrorKind::IndexOutOfRange, "bit index out of range")
                    .with_context("index", index)
                    .with_context("num_bits", self.num_bits),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_all_zero() {
        let bits = BitVector::new(100);
        for i in 0..100 {
            assert!(!bits.get(i).unwrap());
        }
        assert_eq!(bits.count_ones(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut bits = BitVector::new(20);
        bits.set(0, true).unwrap();
        bits.set(7, true).unwrap();
        bits.set(8, true).unwrap();
        bits.set(19, true).unwrap();

        assert!(bits.get(0).unwrap());
        assert!(bits.get(7).unwrap());
        assert!(bits.get(8).unwrap());
        assert!(bits.get(19).unwrap());
        assert!(!bits.get(1).unwrap());
        assert_eq!(bits.count_ones(), 4);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut bits = BitVector::new(16);
        bits.set(3, true).unwrap();
        bits.set(3, true).unwrap();
        assert_eq!(bits.count_ones(), 1);
    }

    #[test]
    fn test_clear_single_bit() {
        let mut bits = BitVector::new(16);
        bits.set(5, true).unwrap();
        bits.set(5, false).unwrap();
        assert!(!bits.get(5).unwrap());
    }

    #[test]
    fn test_out_of_range() {
        let mut bits = BitVector::new(10);
        assert_eq!(
            bits.get(10).unwrap_err().kind(),
            crate::error::ErrorKind::IndexOutOfRange
        );
        assert_eq!(
            bits.set(10, true).unwrap_err().kind(),
            crate::error::ErrorKind::IndexOutOfRange
        );
    }

    #[test]
    fn test_non_multiple_of_eight_size() {
        // 101 bits occupy 13 blocks; bit 100 is addressable, 101 is not.
        let mut bits = BitVector::new(101);
        bits.set(100, true).unwrap();
        assert!(bits.get(100).unwrap());
        assert!(bits.set(101, true).is_err());
    }
}
