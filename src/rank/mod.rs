//! Top-K selection strategies over an aggregated rating map.
//!
//! Two selectors produce the same ranking result (exactly `min(K, n)`
//! scored items, descending by score) with very different cost profiles:
//!
//! - [`rank_bounded`] -- streams items through a min-heap capped at K,
//!   O(n log K), memory bounded by K.
//! - [`rank_full_sort`] -- scores everything, sorts, truncates,
//!   O(n log n). Deterministic ground truth for the comparison harness.
//!
//! Each invocation owns its own heap and never mutates the shared
//! aggregated map, so callers may run both selectors over one map.

mod bounded;
mod naive;

pub use bounded::rank_bounded;
pub use naive::rank_full_sort;
