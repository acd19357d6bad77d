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

use googletest::assert_that;
use googletest::prelude::ge;
use googletest::prelude::le;
use googletest::prelude::near;
use streamsketch::common::XorShift64;
use streamsketch::error::ErrorKind;
use streamsketch::reservoir::ReservoirSampler;

#[test]
fn test_short_stream_is_retained_exactly() {
    let mut sampler = ReservoirSampler::new(7, XorShift64::seeded(12)).unwrap();
    for value in [5, 3, 5, 8, 3, 5, 9] {
        sampler.update(value);
    }
    assert_eq!(sampler.samples(), &[5, 3, 5, 8, 3, 5, 9]);

    let (sum, mean) = sampler.estimate().unwrap();
    assert_eq!(sum, 38);
    assert_that!(mean, near(38.0 / 7.0, 1e-12));
}

#[test]
fn test_determinism_for_fixed_seed() {
    let mut sampler = ReservoirSampler::new(10, XorShift64::seeded(42)).unwrap();
    for value in 0..100 {
        sampler.update(value);
    }
    assert_eq!(sampler.samples(), &[80, 87, 43, 54, 72, 52, 12, 60, 19, 53]);
    let (sum, _) = sampler.estimate().unwrap();
    assert_eq!(sum, 532);
}

#[test]
fn test_buffer_size_is_min_of_n_and_k() {
    let mut sampler = ReservoirSampler::new(16, XorShift64::seeded(5)).unwrap();
    for value in 0..64 {
        sampler.update(value);
        assert_eq!(sampler.len(), (sampler.seen() as usize).min(16));
    }
    assert_eq!(sampler.seen(), 64);
}

#[test]
fn test_retention_is_uniform() {
    // 2000 independent runs over a 20-value stream with capacity 5: each
    // value should be retained close to 2000 * 5 / 20 = 500 times.
    const TRIALS: u64 = 2000;
    const STREAM_LEN: usize = 20;
    const CAPACITY: u32 = 5;

    let mut retained = [0u32; STREAM_LEN];
    for seed in 1..=TRIALS {
        let mut sampler = ReservoirSampler::new(CAPACITY, XorShift64::seeded(seed)).unwrap();
        for value in 0..STREAM_LEN as i32 {
            sampler.update(value);
        }
        for sample in sampler.samples() {
            retained[*sample as usize] += 1;
        }
    }

    let expected = (TRIALS * u64::from(CAPACITY) / STREAM_LEN as u64) as u32;
    for count in &retained {
        assert_that!(*count, ge(expected * 3 / 4));
        assert_that!(*count, le(expected * 5 / 4));
    }
}

#[test]
fn test_estimate_before_first_update() {
    let sampler = ReservoirSampler::new(4, XorShift64::seeded(1)).unwrap();
    assert_eq!(
        sampler.estimate().unwrap_err().kind(),
        ErrorKind::InsufficientData
    );
}

#[test]
fn test_zero_capacity_is_rejected() {
    let err = ReservoirSampler::new(0, XorShift64::seeded(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

#[test]
fn test_negative_values_sum_correctly() {
    let mut sampler = ReservoirSampler::new(4, XorShift64::seeded(3)).unwrap();
    for value in [-5, -3, 2] {
        sampler.update(value);
    }
    let (sum, mean) = sampler.estimate().unwrap();
    assert_eq!(sum, -6);
    assert_that!(mean, near(-2.0, 1e-12));
}
