use std::collections::BinaryHeap;

use geo::{Distance, Euclidean, Point};
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

use super::state::State;
use super::{neighbours, reconstruct_path};
use crate::Weight;
use crate::model::CampusGraph;

/// Straight-line distance between two layout positions
pub(crate) fn euclidean_heuristic(from: Point<f64>, to: Point<f64>) -> Weight {
    Euclidean.distance(from, to)
}

/// A* search guided by the Euclidean distance to the target
///
/// Nodes are re-opened when a cheaper route to them is found, so the result
/// stays optimal for admissible heuristics that are not consistent.
pub(crate) fn astar_path(
    graph: &CampusGraph,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    let goal = graph.graph[target].position;
    let estimate = |node: NodeIndex| euclidean_heuristic(graph.graph[node].position, goal);

    let estimated_nodes = graph.node_count();
    let mut g_score: HashMap<NodeIndex, Weight> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4 + 1);

    heap.push(State {
        priority: estimate(start),
        cost: 0.0,
        node: start,
    });
    g_score.insert(start, 0.0);

    let mut expanded = 0usize;
    while let Some(State { cost, node, .. }) = heap.pop() {
        if node == target {
            log::trace!("A* expanded {expanded} nodes");
            return Some(reconstruct_path(&predecessors, start, target));
        }

        // Stale frontier entry
        if g_score.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }
        expanded += 1;

        for (next, weight) in neighbours(graph, node) {
            let tentative = cost + weight;
            if g_score.get(&next).is_some_and(|&known| tentative >= known) {
                continue;
            }
            g_score.insert(next, tentative);
            predecessors.insert(next, node);
            heap.push(State {
                priority: tentative + estimate(next),
                cost: tentative,
                node: next,
            });
        }
    }

    None
}
