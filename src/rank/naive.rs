//! Full-sort Top-K baseline.

use crate::aggregate::Aggregated;
use crate::score::{ScoredItem, score};

/// Score every item, sort them all, take the first `k` -- O(n log n).
///
/// Sorting ascending by the natural [`ScoredItem`] order and then
/// reversing puts equal-score items in *descending* item-id order. This
/// exact tie-break is part of the baseline's contract: it is the canonical
/// deterministic ranking the bounded selector is measured against.
#[must_use]
pub fn rank_full_sort(aggregated: &Aggregated, k: usize) -> Vec<ScoredItem> {
    let mut scored: Vec<ScoredItem> = aggregated
        .iter()
        .map(|(item_id, stats)| ScoredItem::new(score(stats.sum, stats.count), item_id.clone()))
        .collect();

    scored.sort_unstable();
    scored.reverse();
    scored.truncate(k);
    scored
}
