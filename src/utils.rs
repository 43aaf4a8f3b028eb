//! Utility types shared across the ranking code.

use std::cmp::Ordering;

/// A wrapper around `f64` that implements `Ord` via `total_cmp`.
///
/// Scores live inside [`ScoredItem`](crate::score::ScoredItem), which must
/// participate in a total order (heap keys, sort keys), so the raw `f64`
/// cannot be used directly.
///
/// # Examples
///
/// ```
/// use reviewrank::utils::OrdF64;
///
/// let mut scores = vec![OrdF64(3.14), OrdF64(1.41), OrdF64(2.71)];
/// scores.sort();
/// assert_eq!(scores[0].0, 1.41);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrdF64(pub f64);

impl Eq for OrdF64 {}

impl PartialOrd for OrdF64 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdF64 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for OrdF64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<OrdF64> for f64 {
    fn from(value: OrdF64) -> Self {
        value.0
    }
}
