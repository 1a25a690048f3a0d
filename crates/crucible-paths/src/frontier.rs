//! Open list of the search: node indices ordered by cost.

use std::collections::BinaryHeap;

/// Reference into the node table, ordered for use in a `BinaryHeap`.
///
/// Cheaper entries pop first; equal costs pop in push order, then by node
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Open {
    cost: u32,
    seq: u64,
    idx: usize,
}

impl Ord for Open {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        (other.cost, other.seq, other.idx).cmp(&(self.cost, self.seq, self.idx))
    }
}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Open node indices awaiting finalization.
///
/// Entries are never updated in place; a cheaper push supersedes an older
/// one and the engine skips the stale entry when it pops.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Open>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, cost: u32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Open { cost, seq, idx });
    }

    /// Cheapest entry as `(node index, cost)`.
    pub(crate) fn pop(&mut self) -> Option<(usize, u32)> {
        self.heap.pop().map(|open| (open.idx, open.cost))
    }
}
