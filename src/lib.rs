//! # reviewrank
//!
//! Bounded-memory **Top-K ranking** over large append-only review logs,
//! with a comparison harness against a full-sort baseline.
//!
//! ## How it works
//!
//! 1. **Aggregate**: fold rating events (`parent_asin`, `rating`) into
//!    per-item `(sum, count)` accumulators -- [`aggregate`].
//! 2. **Score**: rank key `mean_rating * ln(1 + count)` -- [`score`].
//! 3. **Select**: keep the K best items with a size-K binary min-heap in
//!    O(n log K) -- [`rank_bounded`] -- or sort everything in O(n log n)
//!    as the reference baseline -- [`rank_full_sort`].
//! 4. **Compare**: time both selectors over one shared aggregation and
//!    score their agreement with five ranking-similarity metrics
//!    (precision@K, AP@K, NDCG@K, Jaccard@K, Spearman's rho) --
//!    [`report`] and [`metrics`].
//!
//! The heap itself ([`MinHeap`]) is a plain generic priority queue with
//! the textbook operations (`build`, `peek_min`, `extract_min`,
//! `decrease_key`, `insert`); the K bound is enforced by the selector
//! driving it.
//!
//! ## Quick start
//!
//! ```
//! use reviewrank::{RatingEvent, aggregate, rank_bounded};
//!
//! let events = vec![
//!     RatingEvent { parent_asin: "B0001".into(), rating: 5.0 },
//!     RatingEvent { parent_asin: "B0001".into(), rating: 4.0 },
//!     RatingEvent { parent_asin: "B0002".into(), rating: 3.0 },
//! ];
//! let aggregated = aggregate(events);
//! let top = rank_bounded(&aggregated, 1)?;
//! assert_eq!(top[0].item_id, "B0001");
//! # anyhow::Result::<()>::Ok(())
//! ```
//!
//! ## Binaries
//!
//! - `benchmark` -- per-category report: timings, speedup, and the five
//!   metrics as one CSV row per category.
//! - `k_sweep` -- one category, K swept over a range, ranking-only
//!   timings in milliseconds.
//!
//! Everything is single-threaded and synchronous: I/O and ranking are
//! separate sequential phases so the harness can attribute wall-clock
//! cost correctly.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod heap;
pub mod io;
pub mod metrics;
pub mod rank;
pub mod report;
pub mod score;
pub mod utils;

pub use aggregate::{Aggregated, RatingEvent, RatingStats, aggregate};
pub use error::{HeapError, MissingInput};
pub use heap::MinHeap;
pub use rank::{rank_bounded, rank_full_sort};
pub use report::{Comparison, ReportRow, SweepRow, benchmark_category, compare, run_report, sweep_k};
pub use score::{ScoredItem, score};
pub use utils::OrdF64;
