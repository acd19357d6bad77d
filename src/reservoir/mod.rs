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

//! Fixed-capacity uniform sampling over streams of unknown length.
//!
//! Algorithm R (Vitter): the first `k` values fill the buffer directly;
//! afterwards the n-th value replaces a uniformly chosen slot with
//! probability `k / n`. At every prefix of the stream the buffer is a
//! uniform random sample of the values seen so far.
//!
//! # Usage
//!
//! ```rust
//! use streamsketch::common::XorShift64;
//! use streamsketch::reservoir::ReservoirSampler;
//!
//! let mut sampler = ReservoirSampler::new(7, XorShift64::seeded(12)).unwrap();
//! for value in [5, 3, 5, 8, 3, 5, 9] {
//!     sampler.update(value);
//! }
//!
//! let (sum, mean) = sampler.estimate().unwrap();
//! assert_eq!(sum, 38);
//! assert!((mean - 38.0 / 7.0).abs() < 1e-12);
//! ```

mod sketch;

pub use sketch::ReservoirSampler;
