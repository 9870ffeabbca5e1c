//! Shared helpers for integration and property tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a sorted random sequence from an explicit seed.
///
/// The seed is part of the signature on purpose: every randomized test
/// names its seed, so a failure reproduces without archaeology.
pub fn sorted_random(len: usize, max: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values: Vec<i64> = (0..len).map(|_| rng.random_range(1..=max)).collect();
    values.sort_unstable();
    values
}

/// Assert the ascending invariant every search relies on.
pub fn assert_ascending(seq: &[i64]) {
    for pair in seq.windows(2) {
        assert!(pair[0] <= pair[1], "sequence not ascending: {:?}", pair);
    }
}
