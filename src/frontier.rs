use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use crate::util::cmp_weights;

/// A heap entry ordered by key, then by insertion sequence.  The item itself
/// takes no part in the ordering.
struct Entry<T> {
    key: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_weights(self.key, other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A binary min-heap keyed by `f64`.  Entries with equal keys are popped in
/// the order they were pushed.
pub(crate) struct Frontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T> Frontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, key: f64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { key, seq, item }));
    }

    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.heap
            .pop()
            .map(|Reverse(Entry { key, item, .. })| (key, item))
    }
}
