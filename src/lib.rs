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

//! One-pass streaming estimators for cardinality and uniform sampling.
//!
//! The crate summarizes a stream of integer values without storing it,
//! using memory sublinear in (or independent of) the number of values seen:
//!
//! - [`bloom::BloomCardinalityEstimator`]: approximate distinct count over a
//!   shared bit vector and `k` seeded hashes. Only ever undercounts.
//! - [`hll::HyperLogLogEstimator`]: cardinality from per-bucket maximum run
//!   lengths with harmonic-mean bias correction.
//! - [`reservoir::ReservoirSampler`]: fixed-capacity uniform sample of a
//!   stream of unknown length (Algorithm R).
//!
//! Every estimator exposes `update(value)`, called once per value in
//! arrival order, and an estimate accessor for after the stream is
//! exhausted. Instances are independent: they share no mutable state, so
//! estimators with different parameters may process copies of the same
//! logical stream in parallel.
//!
//! The [`stream`] module supplies the record source the original data files
//! use: gzip'ed lines of integer tuples.

pub mod bloom;
pub mod common;
pub mod error;
pub mod hash;
pub mod hll;
pub mod reservoir;
pub mod stream;
