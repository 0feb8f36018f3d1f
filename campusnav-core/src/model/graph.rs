//! Building graph: nodes keyed by string id over a petgraph undirected graph

use std::collections::BTreeSet;

use hashbrown::HashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::components::{CampusNode, CorridorEdge};
use crate::{Error, Weight};

/// Immutable-after-load building graph
///
/// Each node id maps to exactly one petgraph node and each unordered pair of
/// nodes has at most one edge.
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    pub graph: UnGraph<CampusNode, CorridorEdge>,
    ids: HashMap<String, NodeIndex>,
}

impl CampusGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node, replacing the attributes of an existing node with the
    /// same id. Edges of a replaced node are kept.
    pub(crate) fn upsert_node(&mut self, node: CampusNode) -> (NodeIndex, bool) {
        if let Some(&idx) = self.ids.get(&node.id) {
            self.graph[idx] = node;
            (idx, true)
        } else {
            let id = node.id.clone();
            let idx = self.graph.add_node(node);
            self.ids.insert(id, idx);
            (idx, false)
        }
    }

    /// Returns the index of `id`, creating a node with default attributes if
    /// it is not known yet. The flag is `true` when a node was created.
    pub(crate) fn ensure_node(&mut self, id: &str) -> (NodeIndex, bool) {
        match self.ids.get(id) {
            Some(&idx) => (idx, false),
            None => {
                let (idx, _) = self.upsert_node(CampusNode::new(id));
                (idx, true)
            }
        }
    }

    /// Adds an edge, replacing the weight of an existing edge between the
    /// same pair. Returns `true` when an edge was replaced.
    pub(crate) fn upsert_edge(&mut self, a: NodeIndex, b: NodeIndex, edge: CorridorEdge) -> bool {
        let replaced = self.graph.find_edge(a, b).is_some();
        self.graph.update_edge(a, b, edge);
        replaced
    }

    pub fn node_exists(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.ids.get(id).copied()
    }

    /// Index of `id` or [`Error::NodeNotFound`]
    pub fn require(&self, id: &str) -> Result<NodeIndex, Error> {
        self.index_of(id)
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))
    }

    pub fn node(&self, id: &str) -> Option<&CampusNode> {
        self.index_of(id).and_then(|idx| self.graph.node_weight(idx))
    }

    pub fn node_at(&self, idx: NodeIndex) -> Option<&CampusNode> {
        self.graph.node_weight(idx)
    }

    /// Weight of the edge between two ids, if both exist and are adjacent
    pub fn edge_weight(&self, u: &str, v: &str) -> Option<Weight> {
        let a = self.index_of(u)?;
        let b = self.index_of(v)?;
        self.weight_between(a, b)
    }

    pub(crate) fn weight_between(&self, a: NodeIndex, b: NodeIndex) -> Option<Weight> {
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
            .map(CorridorEdge::traversal_cost)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &CampusNode> {
        self.graph.node_weights()
    }

    /// Edges as `(u, v, weight)` in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&CampusNode, &CampusNode, Weight)> {
        self.graph.edge_references().map(|edge| {
            (
                &self.graph[edge.source()],
                &self.graph[edge.target()],
                edge.weight().traversal_cost(),
            )
        })
    }

    /// Every floor number carried by at least one node
    pub fn floors(&self) -> BTreeSet<i32> {
        self.nodes().filter_map(|node| node.floor).collect()
    }

    /// Nodes ordered for pick-lists: by floor (absent = 0), wing (absent
    /// first), kind and label.
    pub fn sorted_nodes(&self) -> Vec<&CampusNode> {
        let mut nodes: Vec<&CampusNode> = self.nodes().collect();
        nodes.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        nodes
    }
}

fn sort_key(node: &CampusNode) -> (i32, &'static str, &'static str, &str) {
    (
        node.floor.unwrap_or(0),
        node.wing.map_or("", |w| w.as_str()),
        node.kind.as_str(),
        node.label.as_str(),
    )
}

/// True iff `id` is a node of `graph`
pub fn node_exists(graph: &CampusGraph, id: &str) -> bool {
    graph.node_exists(id)
}
