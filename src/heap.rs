//! Array-backed binary min-heap used as a size-K selection sieve.
//!
//! The heap stores any `T: Ord` in a `Vec<T>` with the classic implicit
//! layout: children of index `i` live at `2i + 1` and `2i + 2`. The
//! invariant is that every non-root element compares greater than or equal
//! to its parent, so the root is always the minimum.
//!
//! The heap itself has no capacity limit; the bounded selector in
//! [`rank`](crate::rank) caps it at K from the outside.
//!
//! # Notes
//! - Sift-down examines the left child first and only moves on *strictly*
//!   smaller comparisons, so the left child wins ties against the right.
//!   This fixes the heap shape (and thus the extraction order over
//!   duplicate keys) for reproducible regression runs.
//! - [`MinHeap::insert`] appends and sifts the new element up directly.
//!   The textbook route of appending a +infinity sentinel and calling
//!   `decrease_key` on it would require a synthetic maximum for arbitrary
//!   `T`, which a generic container cannot produce.

use crate::error::HeapError;

/* ===================== MinHeap<T> ===================== */

/// A binary min-heap over any totally ordered element type.
#[derive(Clone, Debug, Default)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Create an empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty heap with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Current element count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when the heap holds zero elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /* ===================== index arithmetic ===================== */

    const fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    const fn left(i: usize) -> usize {
        2 * i + 1
    }

    const fn right(i: usize) -> usize {
        2 * i + 2
    }

    /* ===================== invariant maintenance ===================== */

    /// Restore the min-heap invariant for the subtree rooted at `i`,
    /// assuming both child subtrees already satisfy it (MIN-HEAPIFY).
    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            let mut smallest = i;
            // Left child first; strict comparisons keep ties on the left.
            if l < n && self.data[l] < self.data[smallest] {
                smallest = l;
            }
            if r < n && self.data[r] < self.data[smallest] {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.data.swap(i, smallest);
            i = smallest;
        }
    }

    /// Move the element at `i` toward the root until its parent is no
    /// longer greater.
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = Self::parent(i);
            if self.data[p] <= self.data[i] {
                break;
            }
            self.data.swap(i, p);
            i = p;
        }
    }

    /* ===================== priority-queue operations ===================== */

    /// Replace the contents with `items` and restore the invariant
    /// bottom-up in O(n): every non-leaf is sifted down, last one first.
    pub fn build(&mut self, items: Vec<T>) {
        self.data = items;
        for i in (0..self.data.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    /// Borrow the minimum element without removing it.
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap holds zero elements.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Remove and return the minimum element. The last element is promoted
    /// into the root slot and sifted down.
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap holds zero elements.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Overwrite the element at `index` with `key` and sift it up.
    ///
    /// This is the classic monotone priority-queue primitive: the new key
    /// must not compare greater than the current one.
    ///
    /// # Errors
    /// [`HeapError::InvalidKey`] if `key` compares greater than the current
    /// value at `index`; the heap is not mutated in that case.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn decrease_key(&mut self, index: usize, key: T) -> Result<(), HeapError> {
        if key > self.data[index] {
            return Err(HeapError::InvalidKey { index });
        }
        self.data[index] = key;
        self.sift_up(index);
        Ok(())
    }

    /// Insert `value`, appending it as a new leaf and sifting it up.
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }
}
