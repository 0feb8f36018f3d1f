use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

use crate::Weight;

/// Frontier entry: `priority` orders the heap, `cost` is the accumulated
/// weight from the start
#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) priority: Weight,
    pub(super) cost: Weight,
    pub(super) node: NodeIndex,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by priority (reversed from standard Rust BinaryHeap)
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}
