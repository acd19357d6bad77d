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

//! Bloom-filter based distinct-count estimation.
//!
//! The estimator keeps a fixed bit vector and `k` derived hash seeds. Each
//! incoming value is first tested against the filter: if any of its `k` bits
//! is still clear, the value cannot have been inserted before and the
//! distinct counter is incremented. The value's bits are then set regardless.
//!
//! This inverts the usual Bloom membership test. Collisions make a genuinely
//! new value look already-seen, so the estimator only ever *undercounts*;
//! it never reports more distinct values than were actually observed.
//!
//! # Usage
//!
//! ```rust
//! use streamsketch::bloom::BloomCardinalityEstimator;
//!
//! let mut estimator = BloomCardinalityEstimator::with_seed_set(101, 2, 8391).unwrap();
//!
//! for value in [5, 3, 5] {
//!     estimator.update(value).unwrap();
//! }
//!
//! assert_eq!(estimator.estimate(), 2);
//! ```

mod bit_vector;
mod sketch;

pub use bit_vector::BitVector;
pub use sketch::BloomCardinalityEstimator;
