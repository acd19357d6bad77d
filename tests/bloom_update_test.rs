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
use streamsketch::bloom::BloomCardinalityEstimator;
use streamsketch::error::ErrorKind;
use streamsketch::hash::seed_set;

const BASE_SEED: u32 = 8391;

#[test]
fn test_determinism_across_runs() {
    let mut first = BloomCardinalityEstimator::with_seed_set(10459, 3, BASE_SEED).unwrap();
    let mut second = BloomCardinalityEstimator::with_seed_set(10459, 3, BASE_SEED).unwrap();
    for value in 0..5000 {
        first.update(value).unwrap();
        second.update(value).unwrap();
    }
    assert_eq!(first.estimate(), second.estimate());
}

#[test]
fn test_counter_is_monotonic() {
    let mut estimator = BloomCardinalityEstimator::with_seed_set(3001, 2, BASE_SEED).unwrap();
    let mut last = 0;
    for value in [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9] {
        estimator.update(value).unwrap();
        let estimate = estimator.estimate();
        assert_that!(estimate, ge(last));
        last = estimate;
    }
}

#[test]
fn test_repeats_are_idempotent() {
    let mut estimator = BloomCardinalityEstimator::with_seed_set(20011, 2, BASE_SEED).unwrap();
    for value in 0..100 {
        estimator.update(value).unwrap();
    }
    let after_first_pass = estimator.estimate();
    for value in 0..100 {
        estimator.update(value).unwrap();
    }
    assert_eq!(estimator.estimate(), after_first_pass);
}

#[test]
fn test_undercount_bound_for_sparse_filter() {
    // 1000 distinct values against 20011 bits stays within a few percent.
    let mut estimator = BloomCardinalityEstimator::with_seed_set(20011, 1, BASE_SEED).unwrap();
    for value in 0..1000 {
        estimator.update(value).unwrap();
    }
    assert_that!(estimator.estimate(), ge(950));
    assert_that!(estimator.estimate(), le(1000));
}

#[test]
fn test_never_overcounts() {
    for num_hashes in 1..=4 {
        let mut estimator =
            BloomCardinalityEstimator::with_seed_set(3001, num_hashes, BASE_SEED).unwrap();
        for value in 0..2000 {
            estimator.update(value % 500).unwrap();
        }
        assert_that!(estimator.estimate(), le(500));
    }
}

#[test]
fn test_more_hashes_reduce_undercount_while_sparse() {
    // With this seed set, k = 1 finds 981 of the 1000 distinct values and
    // k = 2 finds 998; both are deterministic.
    let mut one_hash = BloomCardinalityEstimator::with_seed_set(20011, 1, BASE_SEED).unwrap();
    let mut two_hashes = BloomCardinalityEstimator::with_seed_set(20011, 2, BASE_SEED).unwrap();
    for value in 0..1000 {
        one_hash.update(value).unwrap();
        two_hashes.update(value).unwrap();
    }
    assert_eq!(one_hash.estimate(), 981);
    assert_eq!(two_hashes.estimate(), 998);
}

#[test]
fn test_rejected_configurations() {
    let err = BloomCardinalityEstimator::new(0, seed_set(2, BASE_SEED)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);

    let err = BloomCardinalityEstimator::new(101, Vec::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}
