//! `EventQueue` — the pending-event priority queue.
//!
//! # Ordering contract
//!
//! Removal always yields the minimum element under the lexicographic pair
//! (element ordering, insertion sequence).  `add` stamps each element with a
//! monotonically increasing sequence number that callers never see: two
//! elements that compare equal leave the queue strictly first-in-first-out.
//! Every downstream statistic depends on this tie-break being deterministic,
//! so it is part of the public contract (and tested), not an implementation
//! accident.
//!
//! # Performance note
//!
//! Backed by `std::collections::BinaryHeap`, so `add` and `remove` are both
//! O(log n) in the number of pending elements.  The heap is a max-heap;
//! entries are wrapped in `Reverse` to pop the minimum.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

// ── Heap entry ────────────────────────────────────────────────────────────────

/// An element paired with its insertion sequence number.
struct Entry<E> {
    event: E,
    seq:   u64,
}

impl<E: Ord> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<E: Ord> Eq for Entry<E> {}

impl<E: Ord> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Ord> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sequence numbers are unique, so the pair is a total order even
        // when the elements themselves compare equal.
        self.event
            .cmp(&other.event)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

// ── EventQueue ────────────────────────────────────────────────────────────────

/// A min-priority queue with a strict FIFO tie-break for equal elements.
pub struct EventQueue<E> {
    heap:     BinaryHeap<Reverse<Entry<E>>>,
    next_seq: u64,
}

impl<E: Ord> EventQueue<E> {
    pub fn new() -> Self {
        Self {
            heap:     BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert `event`, stamping it with the next sequence number.
    ///
    /// Always succeeds; the queue grows without bound.
    pub fn add(&mut self, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { event, seq }));
    }

    /// Remove and return the earliest pending element.
    ///
    /// Returns `None` when the queue is empty.  The drain loop consumes the
    /// queue with `while let Some(e) = queue.remove()`, so an empty queue is
    /// a checked condition, never a silent sentinel.
    pub fn remove(&mut self) -> Option<E> {
        self.heap.pop().map(|Reverse(entry)| entry.event)
    }

    /// Borrow the element that `remove` would return next.
    pub fn peek(&self) -> Option<&E> {
        self.heap.peek().map(|Reverse(entry)| &entry.event)
    }

    /// Number of pending elements.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True iff no elements are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<E: Ord> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
