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

/// Seed of the single canonical hash used by the HyperLogLog estimator.
const CANONICAL_SEED: u32 = 0;

// Pre-mix constants for the canonical hash. Spreading consecutive integers
// before hashing keeps the register index and the rank bits decorrelated.
const VALUE_MULTIPLIER: i32 = 11;
const VALUE_OFFSET: i32 = 1_313_943;

/// Hashes a 32-bit value under the given seed.
///
/// MurmurHash3 (x86, 32-bit) over the value's big-endian bytes. The byte
/// staging is stack-local, so the function is reentrant and safe to call
/// from independent estimator instances concurrently.
#[inline]
pub fn seeded_hash(value: i32, seed: u32) -> u32 {
    mur3::murmurhash3_x86_32(&value.to_be_bytes(), seed)
}

/// Maps a value to a slot index in `[0, num_slots)`.
///
/// The hash is unsigned, so the remainder needs no negative fixup.
#[inline]
pub fn hash_index(value: i32, num_slots: u32, seed: u32) -> u32 {
    seeded_hash(value, seed) % num_slots
}

/// The canonical single-seed hash used by the HyperLogLog estimator.
#[inline]
pub fn value_hash(value: i32) -> u32 {
    let mixed = value
        .wrapping_mul(VALUE_MULTIPLIER)
        .wrapping_add(VALUE_OFFSET);
    seeded_hash(mixed, CANONICAL_SEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        // Reference values of MurmurHash3 x86_32 over big-endian int bytes.
        assert_eq!(seeded_hash(0, 0), 0x2362f9de);
        assert_eq!(seeded_hash(5, 0), 0x8daae5ec);
        assert_eq!(seeded_hash(5, 1), 0xe7534995);
        assert_eq!(seeded_hash(-1, 0), 0x76293b50);
        assert_eq!(seeded_hash(123_456, 8391), 0x136602f6);
        assert_eq!(seeded_hash(42, 4_567_928), 0xa39cc76f);
    }

    #[test]
    fn test_avalanche() {
        // A one-bit input change flips roughly half of the output bits.
        let a = seeded_hash(0b1000, 0);
        let b = seeded_hash(0b1001, 0);
        let flipped = (a ^ b).count_ones();
        assert!((8..=24).contains(&flipped), "weak mixing: {flipped} bits");
    }

    #[test]
    fn test_seed_independence() {
        assert_ne!(seeded_hash(7, 1), seeded_hash(7, 2));
    }

    #[test]
    fn test_hash_index_in_range() {
        for value in -1000..1000 {
            assert!(hash_index(value, 101, 8391) < 101);
        }
    }

    #[test]
    fn test_value_hash_matches_premix() {
        assert_eq!(value_hash(0), seeded_hash(1_313_943, 0));
        assert_eq!(value_hash(5), 1_505_796_371);
        assert_eq!(value_hash(3), 2_960_103_569);
    }
}
