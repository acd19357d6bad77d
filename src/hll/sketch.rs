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
use crate::hash::value_hash;
use crate::hll::RegisterArray;

const MIN_LG_M: u8 = 4;
const MAX_LG_M: u8 = 31;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Returns the bias-correction constant `alpha_m` for `m` registers.
///
/// `m` must be 16, 32, 64, or a power of two of at least 128; any other
/// value fails with [`ErrorKind::InvalidParameter`].
pub fn alpha(num_registers: u32) -> Result<f64, Error> {
    match num_registers {
        16 => Ok(0.673),
        32 => Ok(0.697),
        64 => Ok(0.709),
        m if m >= 128 && m.is_power_of_two() => Ok(0.7213 / (1.0 + 1.079 / f64::from(m))),
        m => Err(
            Error::new(ErrorKind::InvalidParameter, "no alpha constant for this m")
                .with_context("num_registers", m),
        ),
    }
}

/// HyperLogLog cardinality estimator with `m = 2^b` registers.
///
/// Each update hashes the value once with the canonical seed, routes it to
/// a register by the hash's top `b` bits, and max-updates that register with
/// the rank of the first set bit among the remaining `32 - b` bits.
#[derive(Debug, Clone)]
pub struct HyperLogLogEstimator {
    /// Register-count exponent `b`.
    lg_m: u8,
    alpha: f64,
    registers: RegisterArray,
}

impl HyperLogLogEstimator {
    /// Creates an estimator with `2^b` registers.
    ///
    /// Fails with [`ErrorKind::InvalidParameter`] unless `b` is in `[4, 32)`.
    pub fn new(b: u8) -> Result<Self, Error> {
        if !(MIN_LG_M..=MAX_LG_M).contains(&b) {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                "register-count exponent must be in [4, 32)",
            )
            .with_context("b", b));
        }
        let num_registers = 1usize << b;
        Ok(Self {
            lg_m: b,
            alpha: alpha(num_registers as u32)?,
            registers: RegisterArray::new(num_registers),
        })
    }

    /// Processes one value from the stream.
    pub fn update(&mut self, value: i32) -> Result<(), Error> {
        let hash = value_hash(value);
        let index = (hash >> (32 - self.lg_m)) as usize;
        let rank = self.rank(hash);
        self.registers.update_max(index, rank)
    }

    /// Returns the bias-corrected cardinality estimate.
    ///
    /// The raw harmonic-mean estimate `alpha_m * m^2 / sum(2^-register)` is
    /// passed through exactly one correction branch, tried in order: small
    /// range (`raw <= 2.5 m`), mid range (`raw <= 2^32 / 30`), large range.
    pub fn estimate(&self) -> f64 {
        let m = self.num_registers() as f64;
        let harmonic_sum: f64 = self
            .registers
            .iter()
            .map(|register| 2f64.powi(-i32::from(register)))
            .sum();
        let raw = self.alpha * m * m / harmonic_sum;

        if raw <= 2.5 * m {
            // Small range: fall back to linear counting over the registers
            // still at zero.
            let zeros = self.registers.zero_count();
            if zeros > 0 {
                m * (m / zeros as f64).ln()
            } else {
                raw
            }
        } else if raw <= TWO_POW_32 / 30.0 {
            raw
        } else {
            // Large range: correct for 32-bit hash-space saturation.
            -TWO_POW_32 * (1.0 - raw / TWO_POW_32).ln()
        }
    }

    /// Returns the configured number of registers `m`.
    pub fn num_registers(&self) -> usize {
        self.registers.len()
    }

    /// Returns the typical relative error for this configuration,
    /// `1.04 / sqrt(m)`.
    pub fn relative_standard_error(&self) -> f64 {
        1.04 / (self.num_registers() as f64).sqrt()
    }

    /// Rank of the first set bit among the hash's low `32 - b` bits,
    /// counted from their most significant end, 1-based.
    fn rank(&self, hash: u32) -> u8 {
        let remaining = hash << self.lg_m;
        let leading = remaining.leading_zeros().min(u32::from(32 - self.lg_m));
        (leading + 1) as u8
    }
}
