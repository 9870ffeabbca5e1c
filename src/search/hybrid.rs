// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The hybrid core: interpolate while the estimate holds, partition when
//! it drifts.
//!
//! Each step takes a single interpolation probe, then asks one question:
//! how far did that probe land from where the *original, full-window*
//! interpolation formula says the target should be? Small deviation means
//! the local value distribution still looks uniform, so the interpolation
//! estimate keeps steering. Large deviation is the signature of a skewed
//! neighborhood - the regime where interpolation degrades toward a linear
//! scan - so the remaining window is handed to Fibonacci partitioning and
//! its guaranteed O(log n). The hand-off is one-way: once delegated, no
//! further estimates are taken.
//!
//! # State machine
//!
//! ```text
//!              ┌────────────┐  deviation < threshold   (narrow window)
//!         ┌───▶│  Probing   │──────────────────────────────┐
//!         │    └────────────┘                               │
//!         └─────────────────────────────────────────────────┘
//!               │         │                  │
//!               │ match   │ window guard     │ deviation >= threshold
//!               ▼         ▼                  ▼
//!           Found       NotFound      DelegatedFibonacci (terminal)
//! ```
//!
//! The recursion in the textbook formulation is flattened into a loop over
//! mutable `(low, high)` state; the window shrinks by at least one index
//! per probe, so the loop terminates in at most `high - low + 1` steps.

use crate::search::fibonacci::fibonacci_search_in;
use crate::types::{HybridReport, SearchKey, Strategy};
use serde::{Deserialize, Serialize};

/// Default deviation threshold, as a fraction of the initial window width.
///
/// Inherited from the reference behavior of the algorithm; nothing in the
/// literature pins 0.2 as optimal, which is why the threshold is a
/// configuration knob rather than a hard-wired constant.
pub const DEFAULT_DEVIATION_THRESHOLD: f64 = 0.2;

/// Tuning for the interpolation-trust decision.
///
/// A probe is trusted while
/// `|expected_mid - mid| < deviation_threshold * initial_width`. Lower
/// values delegate to Fibonacci sooner (more pessimistic about the value
/// distribution); values >= 1.0 effectively never delegate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HybridConfig {
    /// Fraction of the initial window width a probe may drift from the
    /// full-window estimate before delegation.
    pub deviation_threshold: f64,
}

impl Default for HybridConfig {
    fn default() -> Self {
        HybridConfig {
            deviation_threshold: DEFAULT_DEVIATION_THRESHOLD,
        }
    }
}

/// Locate `target` in an ascending-sorted slice with the default config.
pub fn hybrid_search<K: SearchKey>(seq: &[K], target: K) -> Option<usize> {
    hybrid_search_with(seq, target, &HybridConfig::default()).index
}

/// Locate `target` inside the inclusive window `[low, high]` of `seq`.
///
/// The given window doubles as the deviation reference frame, exactly as
/// if the whole search had started there.
pub fn hybrid_search_in<K: SearchKey>(
    seq: &[K],
    target: K,
    low: usize,
    high: usize,
) -> Option<usize> {
    hybrid_search_in_with(seq, target, low, high, &HybridConfig::default()).index
}

/// Full-slice hybrid search returning the instrumented [`HybridReport`].
pub fn hybrid_search_with<K: SearchKey>(
    seq: &[K],
    target: K,
    config: &HybridConfig,
) -> HybridReport {
    if seq.is_empty() {
        return HybridReport::rejected(0);
    }
    hybrid_search_in_with(seq, target, 0, seq.len() - 1, config)
}

/// Windowed hybrid search returning the instrumented [`HybridReport`].
///
/// `[low, high]` is fixed at entry as the reference frame for all
/// deviation checks: `expected_mid` is always computed against the entry
/// bounds, not the narrowed ones, so the trust signal measures drift from
/// the original estimate rather than resetting each step.
pub fn hybrid_search_in_with<K: SearchKey>(
    seq: &[K],
    target: K,
    low: usize,
    high: usize,
    config: &HybridConfig,
) -> HybridReport {
    if low > high || high >= seq.len() {
        return HybridReport::rejected(0);
    }

    // Reference frame, immutable for the rest of the search.
    let initial_low = low;
    let initial_width = (high - low) as f64;
    let initial_lo_val = seq[low].as_f64();
    let initial_span = seq[high].as_f64() - initial_lo_val;

    let mut low = low;
    let mut high = high;
    let mut probes = 0usize;

    loop {
        if low > high || target < seq[low] || target > seq[high] {
            return HybridReport::rejected(probes);
        }

        // Single interpolation probe, clamped into the active window. A
        // flat window (zero span) degenerates to probing `low`, which is
        // also where the target must sit if it is present at all.
        let lo_val = seq[low].as_f64();
        let span = seq[high].as_f64() - lo_val;
        let mid = if span > 0.0 {
            let scaled = (target.as_f64() - lo_val) * (high - low) as f64 / span;
            low + (scaled as usize).min(high - low)
        } else {
            low
        };
        probes += 1;

        if seq[mid] == target {
            return HybridReport {
                index: Some(mid),
                resolved_by: Strategy::Interpolation,
                probes,
            };
        }

        // Drift of the actual probe from the position the original
        // full-window formula predicts. A degenerate frame (equal endpoint
        // values) cannot produce a prediction, which counts as distrust.
        let trusted = initial_span > 0.0 && {
            let expected_mid = initial_low as f64
                + (target.as_f64() - initial_lo_val) / initial_span * initial_width;
            (expected_mid - mid as f64).abs() < config.deviation_threshold * initial_width
        };

        if !trusted {
            let index = fibonacci_search_in(seq, target, low, high);
            return HybridReport {
                index,
                resolved_by: Strategy::Fibonacci,
                probes,
            };
        }

        if seq[mid] < target {
            low = mid + 1;
        } else {
            match mid.checked_sub(1) {
                Some(h) => high = h,
                None => return HybridReport::rejected(probes),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skewed() -> Vec<i64> {
        // Dense ramp 1..=999 with a far-flung final element.
        let mut seq: Vec<i64> = (1..1000).collect();
        seq.push(1_000_000);
        seq
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(hybrid_search::<i64>(&[], 3), None);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(hybrid_search(&[9], 9), Some(0));
        assert_eq!(hybrid_search(&[9], 1), None);
    }

    #[test]
    fn test_uniform_ramp_resolves_by_interpolation() {
        let seq: Vec<i64> = (1..=1000).collect();
        let report = hybrid_search_with(&seq, 500, &HybridConfig::default());
        assert_eq!(report.index, Some(499));
        assert_eq!(report.resolved_by, Strategy::Interpolation);
        assert_eq!(report.probes, 1);
    }

    #[test]
    fn test_skewed_tail_delegates_to_fibonacci() {
        let seq = skewed();
        // 999 sits at index 998, but the full-range estimate places it near
        // index 0; probing drifts until the deviation check trips.
        let report = hybrid_search_with(&seq, 999, &HybridConfig::default());
        assert_eq!(report.index, Some(998));
        assert_eq!(report.resolved_by, Strategy::Fibonacci);
        assert!(report.probes > 1);
    }

    #[test]
    fn test_threshold_one_never_delegates() {
        let seq = skewed();
        let config = HybridConfig {
            deviation_threshold: 1.0,
        };
        let report = hybrid_search_with(&seq, 999, &config);
        assert_eq!(report.index, Some(998));
        assert_eq!(report.resolved_by, Strategy::Interpolation);
    }

    #[test]
    fn test_threshold_zero_delegates_immediately() {
        let seq = skewed();
        let config = HybridConfig {
            deviation_threshold: 0.0,
        };
        // The first probe misses, and with a zero threshold no probe is
        // ever trusted, so Fibonacci takes over right away.
        let report = hybrid_search_with(&seq, 999, &config);
        assert_eq!(report.index, Some(998));
        assert_eq!(report.resolved_by, Strategy::Fibonacci);
        assert_eq!(report.probes, 1);
    }

    #[test]
    fn test_flat_sequence_no_division() {
        let seq = [7i64; 32];
        let report = hybrid_search_with(&seq, 7, &HybridConfig::default());
        assert_eq!(report.index, Some(0));
        assert_eq!(hybrid_search(&seq, 6), None);
        assert_eq!(hybrid_search(&seq, 8), None);
    }

    #[test]
    fn test_window_is_reference_frame() {
        let seq: Vec<i64> = (1..=100).collect();
        assert_eq!(hybrid_search_in(&seq, 50, 40, 60), Some(49));
        assert_eq!(hybrid_search_in(&seq, 50, 60, 99), None);
        assert_eq!(hybrid_search_in(&seq, 50, 60, 10), None);
    }

    #[test]
    fn test_every_position_findable() {
        let seq = skewed();
        for (i, &v) in seq.iter().enumerate() {
            assert_eq!(hybrid_search(&seq, v), Some(i), "value {v}");
        }
    }

    #[test]
    fn test_absent_values() {
        let seq = skewed();
        for miss in [0, 1000, 5000, 999_999, 1_000_001] {
            assert_eq!(hybrid_search(&seq, miss), None, "value {miss}");
        }
    }
}
