use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

use super::state::State;
use super::{neighbours, reconstruct_path};
use crate::Weight;
use crate::model::CampusGraph;

/// Dijkstra's algorithm between two nodes
/// Returns the accumulated weight and the node sequence, or `None` when the
/// target is unreachable
pub(crate) fn dijkstra_path(
    graph: &CampusGraph,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<(Weight, Vec<NodeIndex>)> {
    let estimated_nodes = graph.node_count();
    let mut distances: HashMap<NodeIndex, Weight> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4 + 1);

    heap.push(State {
        priority: 0.0,
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node, .. }) = heap.pop() {
        if node == target {
            return Some((cost, reconstruct_path(&predecessors, start, target)));
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for (next, weight) in neighbours(graph, node) {
            let next_cost = cost + weight;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost >= *entry.get() {
                        continue;
                    }
                    *entry.get_mut() = next_cost;
                }
            }
            predecessors.insert(next, node);
            heap.push(State {
                priority: next_cost,
                cost: next_cost,
                node: next,
            });
        }
    }

    None
}

/// Dijkstra's algorithm from one node to every node it reaches
/// Returns a map of node indices to accumulated weights, optionally bounded
/// by `max_cost`
pub(crate) fn dijkstra_path_weights(
    graph: &CampusGraph,
    start: NodeIndex,
    max_cost: Option<Weight>,
) -> HashMap<NodeIndex, Weight> {
    let mut distances: HashMap<NodeIndex, Weight> = HashMap::new();
    let mut settled: HashMap<NodeIndex, Weight> = HashMap::new();
    let mut heap = BinaryHeap::new();

    heap.push(State {
        priority: 0.0,
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node, .. }) = heap.pop() {
        if settled.contains_key(&node) {
            continue;
        }
        if let Some(max) = max_cost {
            if cost > max {
                break;
            }
        }
        settled.insert(node, cost);

        for (next, weight) in neighbours(graph, node) {
            let next_cost = cost + weight;
            let better = distances.get(&next).is_none_or(|&known| next_cost < known);
            if better {
                distances.insert(next, next_cost);
                heap.push(State {
                    priority: next_cost,
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    settled
}
