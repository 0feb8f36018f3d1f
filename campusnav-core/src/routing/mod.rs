//! Shortest-route queries over the building graph
//!
//! Both algorithms run over the whole graph, so routes between floors pass
//! through stairwells. Search state is local to each call.

mod astar;
mod dijkstra;
mod state;

use std::fmt;
use std::str::FromStr;

use hashbrown::HashMap;
use itertools::Itertools;
use log::{debug, warn};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::model::{CampusGraph, CampusNode};
use crate::{Error, Weight};

/// Route search algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Dijkstra,
    #[serde(rename = "astar", alias = "a*")]
    AStar,
}

impl Algorithm {
    /// Parses `name`, falling back to `default` for empty or unknown input
    pub fn parse_or(name: &str, default: Algorithm) -> Algorithm {
        if name.trim().is_empty() {
            return default;
        }
        name.parse().unwrap_or_else(|_| {
            warn!("Unknown algorithm '{name}', using {}", default.title());
            default
        })
    }

    /// Human readable name
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "dijkstra" => Ok(Algorithm::Dijkstra),
            "a" | "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A computed route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Node ids from start to end inclusive
    pub path: Vec<String>,
    /// Sum of the edge weights along `path`
    pub total_weight: Weight,
    pub algorithm: Algorithm,
}

impl PathResult {
    pub fn start(&self) -> &str {
        self.path.first().map_or("", String::as_str)
    }

    pub fn end(&self) -> &str {
        self.path.last().map_or("", String::as_str)
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Display labels along the route
    pub fn labels<'a>(&'a self, graph: &'a CampusGraph) -> Vec<&'a str> {
        self.path
            .iter()
            .map(|id| graph.node(id).map_or(id.as_str(), |node| node.label.as_str()))
            .collect()
    }
}

/// Finds a minimum-weight route between two nodes
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if either id is not in the graph and
/// [`Error::NoPathFound`] if the nodes are not connected.
pub fn find_path(
    graph: &CampusGraph,
    start: &str,
    end: &str,
    algorithm: Algorithm,
) -> Result<PathResult, Error> {
    let source = graph.require(start)?;
    let target = graph.require(end)?;

    let no_path = || Error::NoPathFound {
        start: start.to_string(),
        end: end.to_string(),
    };

    let (total_weight, nodes) = match algorithm {
        Algorithm::Dijkstra => dijkstra::dijkstra_path(graph, source, target).ok_or_else(no_path)?,
        Algorithm::AStar => {
            let nodes = astar::astar_path(graph, source, target).ok_or_else(no_path)?;
            // Report real edge costs rather than the search bookkeeping
            (indexed_path_weight(graph, &nodes)?, nodes)
        }
    };

    let path = nodes
        .iter()
        .map(|&idx| graph.graph[idx].id.clone())
        .collect::<Vec<_>>();
    debug!(
        "{} route {start} -> {end}: {} hops, weight {total_weight}",
        algorithm.title(),
        path.len().saturating_sub(1)
    );

    Ok(PathResult {
        path,
        total_weight,
        algorithm,
    })
}

/// Sums the edge weights along a sequence of node ids
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] for unknown ids and [`Error::InvalidData`]
/// when two consecutive nodes are not adjacent.
pub fn path_weight<S: AsRef<str>>(graph: &CampusGraph, path: &[S]) -> Result<Weight, Error> {
    let nodes = path
        .iter()
        .map(|id| graph.require(id.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    indexed_path_weight(graph, &nodes)
}

fn indexed_path_weight(graph: &CampusGraph, nodes: &[NodeIndex]) -> Result<Weight, Error> {
    nodes
        .iter()
        .tuple_windows()
        .map(|(&a, &b)| {
            graph.weight_between(a, b).ok_or_else(|| {
                Error::InvalidData(format!(
                    "'{}' and '{}' are not connected",
                    graph.graph[a].id, graph.graph[b].id
                ))
            })
        })
        .sum()
}

/// Weight of the cheapest route from `start` to every node it reaches,
/// nearest first. Nodes further than `max_cost` are left out.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` is not in the graph and
/// [`Error::InvalidData`] if `max_cost` is negative or not finite.
pub fn distances_from<'a>(
    graph: &'a CampusGraph,
    start: &str,
    max_cost: Option<Weight>,
) -> Result<Vec<(&'a CampusNode, Weight)>, Error> {
    if let Some(max) = max_cost.filter(|max| !max.is_finite() || *max < 0.0) {
        return Err(Error::InvalidData(format!(
            "Distance bound must be a non-negative number, got {max}"
        )));
    }
    let source = graph.require(start)?;
    let weights = dijkstra::dijkstra_path_weights(graph, source, max_cost);

    let mut reached: Vec<(&CampusNode, Weight)> = weights
        .into_iter()
        .filter_map(|(idx, weight)| graph.node_at(idx).map(|node| (node, weight)))
        .collect();
    reached.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.id.cmp(&b.0.id)));
    Ok(reached)
}

/// Adjacent nodes with the weight of the connecting edge
pub(super) fn neighbours(
    graph: &CampusGraph,
    node: NodeIndex,
) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
    graph.graph.edges(node).map(move |edge| {
        let next = if edge.source() == node {
            edge.target()
        } else {
            edge.source()
        };
        (next, edge.weight().traversal_cost())
    })
}

/// Follows predecessors backward from target to start
pub(super) fn reconstruct_path(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut node_path = vec![target];
    let mut current = target;
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => {
                node_path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    node_path.reverse();
    node_path
}
