//! Rating-event aggregation.
//!
//! Folds an append-only stream of review events into per-item `(sum,
//! count)` accumulators. Aggregation is commutative and associative, so no
//! ordering is required of the input; memory scales with the number of
//! distinct items, not the number of events.

use serde::Deserialize;
use std::collections::HashMap;

/// One review record, as decoded from a JSONL line.
///
/// Only the two ranking-relevant fields are kept; serde ignores the rest
/// of the record. Events are ephemeral: they are consumed once during the
/// fold and never retained.
#[derive(Clone, Debug, Deserialize)]
pub struct RatingEvent {
    /// Catalog item identifier.
    pub parent_asin: String,
    /// Star rating given by the review.
    pub rating: f64,
}

/// Per-item accumulator: sum of ratings seen and how many.
///
/// `count` is at least 1 from the moment the accumulator exists and never
/// decreases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingStats {
    /// Running sum of ratings.
    pub sum: f64,
    /// Number of ratings folded in.
    pub count: u64,
}

/// The aggregated view both selectors rank over.
pub type Aggregated = HashMap<String, RatingStats>;

/// Fold a single event into the accumulator map.
pub fn fold(acc: &mut Aggregated, event: RatingEvent) {
    acc.entry(event.parent_asin)
        .and_modify(|stats| {
            stats.sum += event.rating;
            stats.count += 1;
        })
        .or_insert(RatingStats {
            sum: event.rating,
            count: 1,
        });
}

/// Aggregate a full event stream into per-item stats.
#[must_use]
pub fn aggregate<I>(events: I) -> Aggregated
where
    I: IntoIterator<Item = RatingEvent>,
{
    let mut acc = Aggregated::new();
    for event in events {
        fold(&mut acc, event);
    }
    acc
}
