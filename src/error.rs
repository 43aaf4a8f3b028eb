//! Error taxonomy for heap operations and dataset input.
//!
//! All failures here are terminal: operations are local and deterministic,
//! so there is nothing to retry. [`HeapError`] variants signal contract
//! violations by the caller; [`MissingInput`] signals an absent review file
//! and carries enough context for the harness to skip the category.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`MinHeap`](crate::heap::MinHeap) operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HeapError {
    /// `peek_min` or `extract_min` was called on a heap with zero elements.
    /// A correctly driven selector never triggers this.
    #[error("operation on an empty heap")]
    Empty,

    /// `decrease_key` was given a key that compares greater than the value
    /// currently stored at `index`. The heap is left unchanged.
    #[error("new key at index {index} is greater than the current key")]
    InvalidKey { index: usize },
}

/// The review file for a category does not exist on disk.
///
/// The harness downcasts to this type to skip the category with a logged
/// notice instead of aborting the whole batch.
#[derive(Debug, Error)]
#[error(
    "review file not found: {}\nrun the dataset fetch step for category `{category}` (reviews only) first",
    .path.display()
)]
pub struct MissingInput {
    /// Category whose file was requested.
    pub category: String,
    /// Path that was probed.
    pub path: PathBuf,
}
