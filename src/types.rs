// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by every search strategy.
//!
//! These types define what the searches operate on (`SearchKey` slices) and
//! what they hand back (`HybridReport`, tagged with the `Strategy` that
//! resolved it).
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Sequence**: `seq[i] <= seq[i + 1]` for every valid `i`. Ascending
//!   order is a caller obligation for the free functions; `SortedSequence`
//!   in `verified.rs` checks it once at construction.
//! - **Bounds**: `low <= high < seq.len()`. Violations are reported as
//!   not-found, never as a panic - an invalid window and an empty window
//!   are observably the same thing to a caller.
//! - **Keys**: no NaN. `PartialOrd` comparisons against NaN are all false,
//!   which silently breaks the window guards. `SortedSequence::new` rejects
//!   incomparable neighbors for exactly this reason.

use serde::{Deserialize, Serialize};

/// Numeric key usable by all three search strategies.
///
/// The searches compare keys with `PartialOrd`/`PartialEq` only. The
/// `as_f64` conversion feeds the interpolation estimate and may be lossy
/// for integers above 2^53; the estimate only steers probing, so a lossy
/// conversion degrades probe quality, not the validity of a returned index.
pub trait SearchKey: Copy + PartialOrd {
    /// Lossy conversion used for position estimation.
    fn as_f64(self) -> f64;
}

macro_rules! impl_search_key {
    ($($t:ty),*) => {
        $(impl SearchKey for $t {
            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        })*
    };
}

impl_search_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Which strategy produced the final outcome of a hybrid search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Interpolation probing ran to termination on its own.
    Interpolation,
    /// Probing drifted past the deviation threshold and the remaining
    /// window was handed to Fibonacci partitioning.
    Fibonacci,
}

/// Outcome of a hybrid search, with enough detail to see *how* it resolved.
///
/// `index` carries the same value the plain `hybrid_search` wrapper
/// returns. `resolved_by` makes the one-way interpolation -> Fibonacci
/// delegation observable to tests and callers; `probes` counts
/// interpolation probes only (comparisons made after delegation happen
/// inside the Fibonacci core and are not broken out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridReport {
    /// `Some(i)` with `seq[i] == target`, or `None`.
    pub index: Option<usize>,
    /// Strategy that terminated the search.
    pub resolved_by: Strategy,
    /// Number of interpolation probes taken before termination.
    pub probes: usize,
}

impl HybridReport {
    /// A search that terminated on a window guard, not on a probe result.
    pub(crate) fn rejected(probes: usize) -> Self {
        HybridReport {
            index: None,
            resolved_by: Strategy::Interpolation,
            probes,
        }
    }
}
