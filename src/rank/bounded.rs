//! Bounded Top-K selection with a size-K min-heap sieve.

use crate::aggregate::Aggregated;
use crate::heap::MinHeap;
use crate::score::{ScoredItem, score};
use anyhow::Result;

/// Select the `k` highest-scoring items in a single pass -- O(n log K).
///
/// The heap holds the best `k` items seen so far, with the weakest of them
/// at the root. A candidate enters only while the heap is below `k`, or
/// when its score strictly exceeds the current minimum's score; in that
/// case the minimum is extracted *before* the insert, so the heap never
/// holds more than `k` elements, not even transiently.
///
/// Draining the heap yields ascending scores; the result is reversed into
/// the descending ranking. If fewer than `k` items exist, all of them are
/// returned.
///
/// # Notes
/// - `k == 0` produces an empty vector.
/// - The entry test compares scores only. When the score at the K
///   boundary is tied across several items, which of them stays depends on
///   encounter order, while the full-sort baseline breaks such ties by
///   item id; the two selectors agree exactly whenever boundary scores are
///   distinct.
///
/// # Errors
/// Propagates heap errors; none are reachable through this driving
/// pattern.
pub fn rank_bounded(aggregated: &Aggregated, k: usize) -> Result<Vec<ScoredItem>> {
    if k == 0 {
        return Ok(Vec::new());
    }

    let mut heap = MinHeap::with_capacity(k);
    for (item_id, stats) in aggregated {
        let candidate = ScoredItem::new(score(stats.sum, stats.count), item_id.clone());
        if heap.len() < k {
            heap.insert(candidate);
        } else if candidate.score > heap.peek_min()?.score {
            heap.extract_min()?;
            heap.insert(candidate);
        }
    }

    let mut ranking = Vec::with_capacity(heap.len());
    while !heap.is_empty() {
        ranking.push(heap.extract_min()?);
    }
    ranking.reverse();
    Ok(ranking)
}
