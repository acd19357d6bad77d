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

use crate::bloom::BitVector;
use crate::error::Error;
use crate::error::ErrorKind;
use crate::hash::hash_index;
use crate::hash::seed_set;

/// Approximate distinct-count estimator over a shared bit vector.
///
/// Configuration is fixed at construction: a bit-vector size `M` and a set
/// of `k` hash seeds. The estimator is append-only and one-shot; there is no
/// way to remove a value or to reset the filter.
///
/// Accuracy trade-off: a larger `M` lowers the bit-collision rate and with
/// it the undercount. A larger `k` makes it less likely that a new value's
/// bits all collide with older insertions, but saturates the vector faster,
/// which hurts once the filter becomes dense.
#[derive(Debug, Clone)]
pub struct BloomCardinalityEstimator {
    bits: BitVector,
    seeds: Vec<u32>,
    /// Count of values classified as new. Monotonic non-decreasing.
    distinct: u64,
}

impl BloomCardinalityEstimator {
    /// Creates an estimator over `num_bits` bits using the given seeds.
    ///
    /// Fails with [`ErrorKind::InvalidParameter`] when `num_bits` is zero or
    /// `seeds` is empty.
    pub fn new(num_bits: u32, seeds: Vec<u32>) -> Result<Self, Error> {
        if num_bits == 0 {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                "bit vector must hold at least one bit",
            ));
        }
        if seeds.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                "at least one hash seed is required",
            ));
        }
        Ok(Self {
            bits: BitVector::new(num_bits),
            seeds,
            distinct: 0,
        })
    }

    /// Creates an estimator whose seeds are derived from `base_seed`.
    ///
    /// Equivalent to `new(num_bits, seed_set(num_hashes, base_seed))`.
    pub fn with_seed_set(
        num_bits: u32,
        num_hashes: usize,
        base_seed: u32,
    ) -> Result<Self, Error> {
        Self::new(num_bits, seed_set(num_hashes, base_seed))
    }

    /// Processes one value from the stream.
    ///
    /// The value is classified as new when any of its `k` indexed bits is
    /// still clear; the counter is incremented for new values. All `k` bits
    /// are set afterwards regardless of the test outcome.
    pub fn update(&mut self, value: i32) -> Result<(), Error> {
        let mut is_new = false;
        for seed in &self.seeds {
            let index = hash_index(value, self.bits.num_bits(), *seed);
            if !self.bits.get(index)? {
                is_new = true;
            }
        }
        if is_new {
            self.distinct += 1;
        }
        for seed in &self.seeds {
            let index = hash_index(value, self.bits.num_bits(), *seed);
            self.bits.set(index, true)?;
        }
        Ok(())
    }

    /// Returns the current distinct-count estimate.
    pub fn estimate(&self) -> u64 {
        self.distinct
    }

    /// Returns the configured bit-vector size.
    pub fn num_bits(&self) -> u32 {
        self.bits.num_bits()
    }

    /// Returns the number of hash functions in use.
    pub fn num_hashes(&self) -> usize {
        self.seeds.len()
    }

    /// Returns the fraction of bits currently set, in `[0.0, 1.0]`.
    ///
    /// Useful for monitoring filter saturation: estimates degrade as this
    /// approaches 1.
    pub fn saturation(&self) -> f64 {
        self.bits.count_ones() as f64 / f64::from(self.bits.num_bits())
    }
}
