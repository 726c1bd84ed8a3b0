//! Generic min-priority queue keyed by an explicit ordering function.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap slot. `seq` breaks key ties in push order.
#[derive(Debug, Clone)]
struct Slot<T, K> {
    key: K,
    seq: u64,
    value: T,
}

impl<T, K: Ord> PartialEq for Slot<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, K: Ord> Eq for Slot<T, K> {}

impl<T, K: Ord> PartialOrd for Slot<T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, K: Ord> Ord for Slot<T, K> {
    // Reversed: `BinaryHeap` is a max-heap, the smallest (key, seq) must surface first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Binary-heap min-queue over `T`, ordered by `key_fn(&T)`.
///
/// The key is computed once at push time. Entries with equal keys are popped
/// in the order they were pushed, so draining is deterministic.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T, K> {
    heap: BinaryHeap<Slot<T, K>>,
    key_fn: fn(&T) -> K,
    next_seq: u64,
}

impl<T, K: Ord> MinPriorityQueue<T, K> {
    pub fn new(key_fn: fn(&T) -> K) -> Self {
        Self::with_capacity(key_fn, 0)
    }

    pub fn with_capacity(key_fn: fn(&T) -> K, capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            key_fn,
            next_seq: 0,
        }
    }

    /// Insert a value. O(log n).
    pub fn push(&mut self, value: T) {
        let key = (self.key_fn)(&value);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Slot { key, seq, value });
    }

    /// Remove and return the value with the smallest key. O(log n).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|slot| slot.value)
    }

    /// The value with the smallest key, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|slot| &slot.value)
    }

    /// Smallest value satisfying `pred`, without removing anything.
    ///
    /// O(1) when the head matches, otherwise a linear scan.
    pub fn peek_matching(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        let head = self.heap.peek()?;
        if pred(&head.value) {
            return Some(&head.value);
        }
        self.heap
            .iter()
            .filter(|slot| pred(&slot.value))
            .max()
            .map(|slot| &slot.value)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
