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

use crate::common::RandomSource;
use crate::error::Error;
use crate::error::ErrorKind;

/// Fixed-capacity uniform sampler (Algorithm R).
///
/// The buffer always holds `min(n, k)` values, where `n` counts the values
/// processed so far. After `n >= k` values, every value seen occupies some
/// slot with probability exactly `k / n`, independent of arrival order.
#[derive(Debug, Clone)]
pub struct ReservoirSampler<R: RandomSource> {
    samples: Vec<i32>,
    capacity: usize,
    /// Values processed so far, including discarded ones.
    seen: u64,
    rng: R,
}

impl<R: RandomSource> ReservoirSampler<R> {
    /// Creates a sampler that retains at most `capacity` values.
    ///
    /// The sampler takes ownership of its random source; sharing one source
    /// across samplers would entangle their sampling decisions.
    ///
    /// Fails with [`ErrorKind::InvalidParameter`] when `capacity` is zero.
    pub fn new(capacity: u32, rng: R) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                "sample capacity must be at least one",
            ));
        }
        Ok(Self {
            samples: Vec::with_capacity(capacity as usize),
            capacity: capacity as usize,
            seen: 0,
            rng,
        })
    }

    /// Processes one value from the stream.
    pub fn update(&mut self, value: i32) {
        if self.samples.len() < self.capacity {
            self.samples.push(value);
        } else {
            let slot = self.rng.next_range(self.seen);
            if (slot as usize) < self.capacity {
                self.samples[slot as usize] = value;
            }
        }
        self.seen += 1;
    }

    /// Returns the sum and arithmetic mean of the sampled values.
    ///
    /// Fails with [`ErrorKind::InsufficientData`] before the first update.
    pub fn estimate(&self) -> Result<(i64, f64), Error> {
        if self.samples.is_empty() {
            return Err(Error::new(
                ErrorKind::InsufficientData,
                "no values have been sampled yet",
            ));
        }
        let sum: i64 = self.samples.iter().map(|v| i64::from(*v)).sum();
        let mean = sum as f64 / self.samples.len() as f64;
        Ok((sum, mean))
    }

    /// Returns the sampled values in slot order.
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Returns the number of values processed so far.
    pub fn seen(&self) -> u64 {
        self.seen
    }

    /// Returns the configured capacity `k`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of values currently retained, `min(n, k)`.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns whether no values have been retained yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
