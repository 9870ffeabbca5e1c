// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interpolation search: probe where the target *should* be.
//!
//! For near-uniform value distributions the position of a target is well
//! approximated by linear interpolation between the window endpoints,
//! which brings the expected probe count down to O(log log n). The price
//! is the worst case: on skewed distributions the estimate keeps landing
//! next to one endpoint and the search degrades to a linear scan. That
//! failure mode is exactly what the hybrid search in `hybrid.rs` detects
//! and routes around.

use crate::types::SearchKey;

/// Locate `target` in an ascending-sorted slice.
pub fn interpolation_search<K: SearchKey>(seq: &[K], target: K) -> Option<usize> {
    if seq.is_empty() {
        return None;
    }
    interpolation_search_in(seq, target, 0, seq.len() - 1)
}

/// Locate `target` inside the inclusive window `[low, high]` of `seq`.
///
/// Iterates while the target lies within `[seq[low], seq[high]]`. A window
/// whose endpoint values are equal is resolved by direct comparison rather
/// than fed to the interpolation formula, whose denominator would be zero.
/// Invalid windows are reported as `None`.
pub fn interpolation_search_in<K: SearchKey>(
    seq: &[K],
    target: K,
    mut low: usize,
    mut high: usize,
) -> Option<usize> {
    if low > high || high >= seq.len() {
        return None;
    }

    while low <= high && target >= seq[low] && target <= seq[high] {
        if low == high {
            return (seq[low] == target).then_some(low);
        }

        let lo_val = seq[low].as_f64();
        let span = seq[high].as_f64() - lo_val;
        if span <= 0.0 {
            // Flat window: every value in it equals seq[low].
            return (seq[low] == target).then_some(low);
        }

        let scaled = (target.as_f64() - lo_val) * (high - low) as f64 / span;
        let pos = low + (scaled as usize).min(high - low);

        if seq[pos] == target {
            return Some(pos);
        }
        if seq[pos] < target {
            low = pos + 1;
        } else {
            match pos.checked_sub(1) {
                Some(h) => high = h,
                None => return None,
            }
        }
    }

    None
}
