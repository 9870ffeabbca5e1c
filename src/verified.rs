// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A type wrapper that makes the sortedness invariant unrepresentable to
//! violate.
//!
//! The free search functions trust their caller to pass an ascending
//! slice; on unsorted input they return garbage (not-found for values that
//! are present) without complaint. `SortedSequence` checks the invariant
//! once at construction and guarantees it for every search afterwards. The
//! cost is one O(n) pass up front.
//!
//! Construction also rejects incomparable neighbors (NaN keys), because a
//! NaN anywhere in the slice falsifies every window guard downstream.

use crate::search::{
    fibonacci_search_in, hybrid_search_in_with, interpolation_search_in, HybridConfig,
};
use crate::types::{HybridReport, SearchKey};
use std::cmp::Ordering;
use std::fmt;

/// Error type for sequence invariant violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// `seq[position] > seq[position + 1]`.
    Unsorted { position: usize },
    /// `seq[position]` and `seq[position + 1]` do not compare (NaN).
    Unordered { position: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::Unsorted { position } => {
                write!(
                    f,
                    "sequence is not ascending at index {} (seq[{}] > seq[{}])",
                    position,
                    position,
                    position + 1
                )
            }
            InvariantError::Unordered { position } => {
                write!(
                    f,
                    "sequence values at indices {} and {} are incomparable (NaN?)",
                    position,
                    position + 1
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// An ascending-sorted slice, validated at construction.
#[derive(Debug, Clone, Copy)]
pub struct SortedSequence<'a, K: SearchKey> {
    values: &'a [K],
}

impl<'a, K: SearchKey> SortedSequence<'a, K> {
    /// Validate `values` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns the first adjacent pair that is out of order or
    /// incomparable.
    pub fn new(values: &'a [K]) -> Result<Self, InvariantError> {
        for (position, pair) in values.windows(2).enumerate() {
            match pair[0].partial_cmp(&pair[1]) {
                Some(Ordering::Greater) => return Err(InvariantError::Unsorted { position }),
                None => return Err(InvariantError::Unordered { position }),
                _ => {}
            }
        }
        Ok(SortedSequence { values })
    }

    /// The underlying slice.
    pub fn as_slice(&self) -> &'a [K] {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn full_window(&self) -> Option<(usize, usize)> {
        if self.values.is_empty() {
            None
        } else {
            Some((0, self.values.len() - 1))
        }
    }

    /// Fibonacci search over the whole sequence.
    pub fn fibonacci(&self, target: K) -> Option<usize> {
        let (low, high) = self.full_window()?;
        fibonacci_search_in(self.values, target, low, high)
    }

    /// Interpolation search over the whole sequence.
    pub fn interpolation(&self, target: K) -> Option<usize> {
        let (low, high) = self.full_window()?;
        interpolation_search_in(self.values, target, low, high)
    }

    /// Hybrid search over the whole sequence with the default config.
    pub fn hybrid(&self, target: K) -> Option<usize> {
        self.hybrid_with(target, &HybridConfig::default()).index
    }

    /// Hybrid search returning the instrumented report.
    pub fn hybrid_with(&self, target: K, config: &HybridConfig) -> HybridReport {
        match self.full_window() {
            Some((low, high)) => hybrid_search_in_with(self.values, target, low, high, config),
            None => HybridReport::rejected(0),
        }
    }
}
