//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical sequence builders so tests and benches exercise
//! the same distributions instead of five slightly different copies.

#![doc(hidden)]

/// Ascending ramp `1..=n` - the perfectly uniform distribution where
/// interpolation lands in one probe.
pub fn ramp(n: usize) -> Vec<i64> {
    (1..=n as i64).collect()
}

/// Dense ramp `1..n` followed by a single far-flung tail value.
///
/// The canonical adversary for interpolation search: the tail stretches
/// the value range so the full-range estimate maps every dense value to
/// a position near zero.
pub fn skewed_tail(n: usize, tail: i64) -> Vec<i64> {
    let mut seq: Vec<i64> = (1..n as i64).collect();
    seq.push(tail);
    seq
}

/// `n` copies of the same value - the degenerate case for the
/// interpolation denominator.
pub fn plateau(n: usize, value: i64) -> Vec<i64> {
    vec![value; n]
}
