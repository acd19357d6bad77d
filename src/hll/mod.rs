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

//! HyperLogLog cardinality estimation.
//!
//! The estimator splits each 32-bit hash into a register index (the top `b`
//! bits) and a rank (the 1-based position of the first set bit among the
//! remaining `32 - b` bits). Each of the `m = 2^b` registers keeps the
//! maximum rank it has observed; the harmonic mean of `2^-register` across
//! all registers yields the raw estimate, which is then bias-corrected for
//! the small- and large-cardinality regimes.
//!
//! Typical relative error is `1.04 / sqrt(m)`.
//!
//! # Usage
//!
//! ```rust
//! use streamsketch::hll::HyperLogLogEstimator;
//!
//! let mut estimator = HyperLogLogEstimator::new(10).unwrap();
//! for value in 0..1000 {
//!     estimator.update(value).unwrap();
//! }
//!
//! let estimate = estimator.estimate();
//! assert!((estimate - 1000.0).abs() / 1000.0 < 0.05);
//! ```

mod registers;
mod sketch;

pub use registers::RegisterArray;
pub use sketch::HyperLogLogEstimator;
pub use sketch::alpha;
