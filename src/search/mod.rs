// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search strategies: where the rubber meets the road.
//!
//! Two leaf strategies and one composer. Interpolation guesses where a
//! target *should* sit in a near-uniform sequence and usually lands in
//! O(log log n) probes. Fibonacci partitioning never guesses and pays a
//! guaranteed O(log n), using only addition and subtraction. The hybrid
//! search starts with interpolation and watches how far each probe drifts
//! from the full-range estimate; when the drift says the local value
//! distribution is skewed, it hands the remaining window to Fibonacci,
//! once, permanently.

mod fibonacci;
mod hybrid;
mod interpolation;

pub use fibonacci::{fibonacci_search, fibonacci_search_in};
pub use hybrid::{
    hybrid_search, hybrid_search_in, hybrid_search_in_with, hybrid_search_with, HybridConfig,
    DEFAULT_DEVIATION_THRESHOLD,
};
pub use interpolation::{interpolation_search, interpolation_search_in};
