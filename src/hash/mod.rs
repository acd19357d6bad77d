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

//! Seeded hashing shared by the cardinality estimators.
//!
//! Both cardinality estimators reduce a value to indices and run lengths
//! through a 32-bit MurmurHash3. The hash is a pure function of
//! `(value, seed)`, so independent estimator instances may hash from
//! separate threads without coordination.

mod murmur;

pub use murmur::hash_index;
pub use murmur::seeded_hash;
pub use murmur::value_hash;

/// Modulus for seed derivation, the Mersenne prime `2^31 - 1`.
const SEED_MODULUS: i64 = 2_147_483_647;

/// Derives a deterministic set of hash seeds from one base seed.
///
/// The set approximates `num_seeds` pairwise-independent hash functions from
/// the single Murmur primitive: `seeds[i] = ((i * base * 92345) mod p
/// + 4567928) mod p` with `p = 2^31 - 1`. The derivation is evaluated in
/// 64-bit arithmetic, so it is reproducible across runs and platforms.
///
/// # Examples
///
/// ```
/// use streamsketch::hash::seed_set;
///
/// let seeds = seed_set(2, 8391);
/// assert_eq!(seeds, vec![4_567_928, 779_434_823]);
/// assert_eq!(seed_set(2, 8391), seeds);
/// ```
pub fn seed_set(num_seeds: usize, base_seed: u32) -> Vec<u32> {
    (0..num_seeds as i64)
        .map(|i| {
            let mixed = (i * i64::from(base_seed) * 92_345) % SEED_MODULUS;
            ((mixed + 4_567_928) % SEED_MODULUS) as u32
        })
        .collect()
}
