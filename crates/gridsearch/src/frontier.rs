//! Min-priority frontier with FIFO tie-breaking.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered by `(priority, seq)`, smallest first.
#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: i32,
    /// Insertion counter; lower = pushed earlier = popped first on ties.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
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
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A priority frontier. Items with lower priority are popped first; among
/// equal priorities, those pushed earlier are popped first.
#[derive(Debug)]
pub(crate) struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> Frontier<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, item: T, priority: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry {
            item,
            priority,
            seq,
        });
    }

    /// Pop the item with the lowest priority, with that priority.
    pub(crate) fn pop(&mut self) -> Option<(T, i32)> {
        self.heap.pop().map(|e| (e.item, e.priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = Frontier::new();
        f.push("c", 3);
        f.push("a", 1);
        f.push("b", 2);
        assert_eq!(f.pop(), Some(("a", 1)));
        assert_eq!(f.pop(), Some(("b", 2)));
        assert_eq!(f.pop(), Some(("c", 3)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn ties_are_fifo() {
        let mut f = Frontier::new();
        for i in 0..10 {
            f.push(i, 5);
        }
        f.push(-1, 4);
        assert_eq!(f.pop(), Some((-1, 4)));
        for i in 0..10 {
            assert_eq!(f.pop(), Some((i, 5)));
        }
    }
}
