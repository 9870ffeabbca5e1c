//! Adaptive hybrid search over sorted numeric slices.
//!
//! This crate composes two classic probing strategies and a decision rule
//! for switching between them mid-search:
//!
//! - **Interpolation search** estimates where a target should sit assuming
//!   a near-uniform value distribution: O(log log n) expected probes, O(n)
//!   worst case on skewed data.
//! - **Fibonacci search** partitions the window along the Fibonacci
//!   sequence: guaranteed O(log n) comparisons using only addition and
//!   subtraction.
//! - **Hybrid search** probes by interpolation while each probe stays
//!   close to the position the original full-range estimate predicts, and
//!   permanently delegates the remaining window to Fibonacci partitioning
//!   the moment it drifts past a configurable threshold.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────────┐
//! │ search/          │      │ search/              │
//! │  fibonacci.rs    │      │  interpolation.rs    │
//! │ (division-free   │      │ (position estimate,  │
//! │  partitioning)   │      │  iterated probing)   │
//! └────────┬─────────┘      └──────────┬───────────┘
//!          │       ┌──────────────┐    │
//!          └──────▶│ search/      │◀───┘
//!                  │  hybrid.rs   │
//!                  │ (deviation-  │
//!                  │  gated       │
//!                  │  delegation) │
//!                  └──────┬───────┘
//!                         ▼
//!              ┌─────────────────────┐
//!              │ verified.rs         │
//!              │ (SortedSequence -   │
//!              │  checked invariant) │
//!              └─────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use probex::{hybrid_search, hybrid_search_with, HybridConfig, Strategy};
//!
//! let seq: Vec<i64> = (1..=1000).collect();
//! assert_eq!(hybrid_search(&seq, 500), Some(499));
//!
//! // The instrumented form shows which strategy resolved the search.
//! let report = hybrid_search_with(&seq, 500, &HybridConfig::default());
//! assert_eq!(report.resolved_by, Strategy::Interpolation);
//! ```
//!
//! All three searches treat invalid windows, empty input, and genuine
//! misses identically: `None`. Sortedness is a caller obligation for the
//! free functions; wrap input in [`SortedSequence`] to have it checked
//! once at construction.

// Module declarations
mod search;
pub mod testing;
mod types;
mod verified;

// Re-exports for public API
pub use search::{
    fibonacci_search, fibonacci_search_in, hybrid_search, hybrid_search_in, hybrid_search_in_with,
    hybrid_search_with, interpolation_search, interpolation_search_in, HybridConfig,
    DEFAULT_DEVIATION_THRESHOLD,
};
pub use types::{HybridReport, SearchKey, Strategy};
pub use verified::{InvariantError, SortedSequence};
