//! Rank key computation and the canonical scored pair.

use crate::utils::OrdF64;

/// Rank key for one item: `(sum / count) * ln(1 + count)`.
///
/// The mean rating is damped by the (logarithmic) review volume, so a
/// 5.0-average item with two reviews cannot outrank a 4.8-average item
/// with thousands. Strictly increasing in the mean for a fixed count and
/// in the count for a fixed mean; total for `count >= 1` (an accumulator
/// only exists once its first event arrived).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(sum_ratings: f64, count: u64) -> f64 {
    let mean = sum_ratings / count as f64;
    mean * (1.0 + count as f64).ln()
}

/// An immutable `(score, item_id)` pair.
///
/// The derived `Ord` compares fields in declaration order: score first,
/// item id second. This tuple order is the canonical sort key shared by
/// the heap and the full-sort baseline, so equal-score ties break the same
/// way everywhere a total order is consulted.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScoredItem {
    /// Rank key, wrapped for total ordering.
    pub score: OrdF64,
    /// Catalog item identifier (`parent_asin` in the review data).
    pub item_id: String,
}

impl ScoredItem {
    /// Build a scored pair from a raw `f64` score.
    #[must_use]
    pub fn new(score: f64, item_id: impl Into<String>) -> Self {
        Self {
            score: OrdF64(score),
            item_id: item_id.into(),
        }
    }
}
