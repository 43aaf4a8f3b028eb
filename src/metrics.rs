//! Ranking-similarity metrics.
//!
//! Five statistics quantifying how close an evaluated ranking is to a
//! reference ranking. The harness always passes the full-sort output as
//! the reference and the bounded-heap output as the evaluated ranking, so
//! perfect agreement reads as `precision = jaccard = rho = 1.0`.
//!
//! - [`precision_at_k`] -- overlap as a fraction of the evaluated set.
//! - [`average_precision_at_k`] -- position-sensitive overlap.
//! - [`ndcg_at_k`] -- gain-weighted order quality, reference scores as
//!   relevance.
//! - [`jaccard_at_k`] -- symmetric set overlap.
//! - [`spearman_rho`] -- rank correlation over the common items.

use crate::score::ScoredItem;
use std::collections::{HashMap, HashSet};

fn id_set(ranking: &[ScoredItem]) -> HashSet<&str> {
    ranking.iter().map(|item| item.item_id.as_str()).collect()
}

/// Fraction of evaluated items that also appear in the reference.
///
/// Returns 0.0 when the evaluated ranking is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn precision_at_k(reference: &[ScoredItem], evaluated: &[ScoredItem]) -> f64 {
    let set_ref = id_set(reference);
    let set_evl = id_set(evaluated);
    if set_evl.is_empty() {
        return 0.0;
    }
    set_ref.intersection(&set_evl).count() as f64 / set_evl.len() as f64
}

/// Average precision at K.
///
/// Walks the evaluated ranking position by position (1-indexed) and
/// accumulates `hits / position` at every reference hit, normalized by
/// `min(|reference|, |evaluated|)`. Relevant items ranked late are
/// penalized. Returns 0.0 when either ranking is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_precision_at_k(reference: &[ScoredItem], evaluated: &[ScoredItem]) -> f64 {
    let set_ref = id_set(reference);
    if set_ref.is_empty() || evaluated.is_empty() {
        return 0.0;
    }

    let mut hits = 0usize;
    let mut sum_precision = 0.0;
    for (i, item) in evaluated.iter().enumerate() {
        if set_ref.contains(item.item_id.as_str()) {
            hits += 1;
            sum_precision += hits as f64 / (i + 1) as f64;
        }
    }
    sum_precision / reference.len().min(evaluated.len()) as f64
}

/// Discounted cumulative gain over a gain sequence (0-indexed positions).
#[allow(clippy::cast_precision_loss)]
fn dcg(gains: impl IntoIterator<Item = f64>) -> f64 {
    gains
        .into_iter()
        .enumerate()
        .map(|(i, gain)| gain / (i as f64 + 2.0).log2())
        .sum()
}

/// Normalized discounted cumulative gain at K.
///
/// Reference scores act as graded relevance; items missing from the
/// reference contribute 0.0 gain. The evaluated DCG is normalized by the
/// ideal DCG over the reference scores sorted descending. Returns 0.0 when
/// the ideal DCG is 0.
#[must_use]
pub fn ndcg_at_k(reference: &[ScoredItem], evaluated: &[ScoredItem]) -> f64 {
    let relevance: HashMap<&str, f64> = reference
        .iter()
        .map(|item| (item.item_id.as_str(), item.score.0))
        .collect();

    let actual = dcg(
        evaluated
            .iter()
            .map(|item| relevance.get(item.item_id.as_str()).copied().unwrap_or(0.0)),
    );

    let mut ideal_gains: Vec<f64> = relevance.values().copied().collect();
    ideal_gains.sort_unstable_by(|a, b| b.total_cmp(a));
    let ideal = dcg(ideal_gains);

    if ideal == 0.0 { 0.0 } else { actual / ideal }
}

/// Jaccard similarity of the two item-id sets: `|A ∩ B| / |A ∪ B|`.
///
/// Order-insensitive. Returns 0.0 when both rankings are empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn jaccard_at_k(ranking_a: &[ScoredItem], ranking_b: &[ScoredItem]) -> f64 {
    let set_a = id_set(ranking_a);
    let set_b = id_set(ranking_b);
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    set_a.intersection(&set_b).count() as f64 / union as f64
}

/// Spearman's rank correlation over the items common to both rankings.
///
/// Positions are the 0-based indices within each ranking;
/// `rho = 1 - 6 * sum(d^2) / (n * (n^2 - 1))` over the `n` common items.
/// Returns `NaN` when fewer than 2 items are common (the statistic is
/// undefined there).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn spearman_rho(ranking_a: &[ScoredItem], ranking_b: &[ScoredItem]) -> f64 {
    let pos_a: HashMap<&str, usize> = ranking_a
        .iter()
        .enumerate()
        .map(|(i, item)| (item.item_id.as_str(), i))
        .collect();
    let pos_b: HashMap<&str, usize> = ranking_b
        .iter()
        .enumerate()
        .map(|(i, item)| (item.item_id.as_str(), i))
        .collect();

    let common: Vec<&str> = pos_a
        .keys()
        .filter(|id| pos_b.contains_key(*id))
        .copied()
        .collect();
    let n = common.len();
    if n < 2 {
        return f64::NAN;
    }

    let d_sq_sum: f64 = common
        .iter()
        .map(|id| {
            let d = pos_a[id] as f64 - pos_b[id] as f64;
            d * d
        })
        .sum();
    let n = n as f64;
    1.0 - (6.0 * d_sq_sum) / (n * (n * n - 1.0))
}
