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

//! Accuracy experiments over a gzip'ed integer-tuple dataset.
//!
//! Runs the three estimators against exact one-pass oracles across a grid
//! of parameters, re-opening the file per run since the stream is not
//! restartable. Expects the dataset path as the first argument.

use std::collections::HashSet;
use std::env;

use streamsketch::bloom::BloomCardinalityEstimator;
use streamsketch::common::RandomSource;
use streamsketch::common::XorShift64;
use streamsketch::hll::HyperLogLogEstimator;
use streamsketch::reservoir::ReservoirSampler;
use streamsketch::stream::open_gzip;

const BLOOM_BASE_SEED: u32 = 8391;
const RESERVOIR_RNG_SEED: u64 = 12;

fn main() -> anyhow::Result<()> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "./enwiki-2013-frequencies.txt.gz".to_string());

    let (exact_distinct, exact_sum, exact_count) = exact_statistics(&path)?;
    println!("== Exact one-pass statistics");
    println!(
        "n = {exact_count}, distinct = {exact_distinct}, sum = {exact_sum}, mean = {:.4}",
        exact_sum as f64 / exact_count as f64
    );

    run_bloom_experiments(&path, exact_distinct)?;
    run_hll_experiments(&path, exact_distinct)?;
    run_reservoir_experiments(&path)?;

    Ok(())
}

/// Single pass computing the exact oracles: distinct count, sum, length.
fn exact_statistics(path: &str) -> anyhow::Result<(u64, i64, u64)> {
    let mut distinct = HashSet::new();
    let mut sum: i64 = 0;
    let mut count: u64 = 0;
    for value in open_gzip(path)?.values() {
        let value = value?;
        distinct.insert(value);
        sum += i64::from(value);
        count += 1;
    }
    Ok((distinct.len() as u64, sum, count))
}

fn run_bloom_experiments(path: &str, exact_distinct: u64) -> anyhow::Result<()> {
    for num_bits in [3001u32, 7001, 10459, 20011] {
        println!("\n== Bloom cardinality, M = {num_bits}");
        for num_hashes in 1..=4usize {
            let mut estimator =
                BloomCardinalityEstimator::with_seed_set(num_bits, num_hashes, BLOOM_BASE_SEED)?;
            for value in open_gzip(path)?.values() {
                estimator.update(value?)?;
            }
            let estimate = estimator.estimate();
            println!(
                "est.card = {estimate:5} ({exact_distinct}), nhash = {num_hashes}, \
                 abs.err = {:5}, rel.err = {:.3}, saturation = {:.3}",
                exact_distinct as i64 - estimate as i64,
                exact_distinct as f64 / estimate as f64 - 1.0,
                estimator.saturation()
            );
        }
    }
    Ok(())
}

fn run_hll_experiments(path: &str, exact_distinct: u64) -> anyhow::Result<()> {
    println!("\n== HyperLogLog cardinality");
    for b in 4..16u8 {
        let mut estimator = HyperLogLogEstimator::new(b)?;
        for value in open_gzip(path)?.values() {
            estimator.update(value?)?;
        }
        let estimate = estimator.estimate();
        let exact = exact_distinct as f64;
        println!(
            "cardinality = {estimate:.1} for b = {b} (m = {}), abs.err = {:.1}, \
             rel.err = {:.4}, typical = {:.4}",
            estimator.num_registers(),
            (estimate - exact).abs(),
            (estimate / exact - 1.0).abs(),
            estimator.relative_standard_error()
        );
    }
    Ok(())
}

fn run_reservoir_experiments(path: &str) -> anyhow::Result<()> {
    println!("\n== Reservoir sampling");
    let mut rng = XorShift64::seeded(RESERVOIR_RNG_SEED);
    for i in 0..8 {
        let capacity = 1024u32 << i;
        // Each sampler gets its own source, split off the shared seed.
        let sampler_rng = XorShift64::seeded(rng.next_u64());
        let mut sampler = ReservoirSampler::new(capacity, sampler_rng)?;
        for value in open_gzip(path)?.values() {
            sampler.update(value?);
        }
        let (sum, mean) = sampler.estimate()?;
        println!(
            "capacity = {capacity:6}, kept = {:6}, sum = {sum}, mean = {mean:.4}",
            sampler.len()
        );
    }
    Ok(())
}
