use std::fs;
use std::path::Path;

use geo::{Distance, Euclidean};
use log::{debug, info, warn};
use petgraph::graph::NodeIndex;

use super::config::{LoaderConfig, MissingWeight};
use super::raw_types::{RawEdge, RawGraph};
use crate::model::{CampusGraph, CorridorEdge};
use crate::{Error, WEIGHT_EPSILON, Weight};

/// Builds the building graph from raw records
///
/// Node records are applied in order and a repeated id overwrites the earlier
/// record. Edge records are applied after all nodes; a repeated pair replaces
/// the earlier weight.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] for self-loops, negative or non-finite
/// weights, and for edges without weight when the loader rejects them.
pub fn build_graph(raw: &RawGraph, config: &LoaderConfig) -> Result<CampusGraph, Error> {
    let mut graph = CampusGraph::new();

    for record in &raw.nodes {
        let (_, replaced) = graph.upsert_node(record.to_node());
        if replaced {
            debug!("Node '{}' declared more than once, keeping the last record", record.id);
        }
    }

    let mut substituted = 0usize;
    for record in &raw.edges {
        if record.u == record.v {
            return Err(Error::InvalidData(format!(
                "Edge from '{}' to itself is not allowed",
                record.u
            )));
        }

        let a = endpoint(&mut graph, &record.u);
        let b = endpoint(&mut graph, &record.v);

        let weight = match record.weight {
            Some(weight) => weight,
            None => {
                substituted += 1;
                missing_weight(&graph, a, b, record, config.missing_weight)?
            }
        };
        validate_weight(record, weight)?;

        if graph.upsert_edge(a, b, CorridorEdge { weight }) {
            debug!(
                "Edge {} - {} declared more than once, keeping weight {weight}",
                record.u, record.v
            );
        }
    }

    info!(
        "Built campus graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    if substituted > 0 {
        info!("{substituted} edges had no weight and were resolved by the loader policy");
    }

    let violations = heuristic_violations(&graph);
    if !violations.is_empty() {
        warn!(
            "{} edges are shorter than the straight-line distance between their endpoints. \
            A* may not return the shortest route on this data.",
            violations.len()
        );
        for violation in &violations {
            debug!(
                "Edge {} - {}: weight {} < distance {:.3}",
                violation.u, violation.v, violation.weight, violation.distance
            );
        }
    }

    Ok(graph)
}

fn endpoint(graph: &mut CampusGraph, id: &str) -> NodeIndex {
    let (idx, created) = graph.ensure_node(id);
    if created {
        warn!("Edge endpoint '{id}' is not declared as a node, adding it with default attributes");
    }
    idx
}

fn missing_weight(
    graph: &CampusGraph,
    a: NodeIndex,
    b: NodeIndex,
    record: &RawEdge,
    policy: MissingWeight,
) -> Result<Weight, Error> {
    match policy {
        MissingWeight::Reject => Err(Error::InvalidData(format!(
            "Edge {} - {} has no weight",
            record.u, record.v
        ))),
        MissingWeight::Default(weight) => {
            warn!(
                "Edge {} - {} has no weight, using default {weight}",
                record.u, record.v
            );
            Ok(weight)
        }
        MissingWeight::Euclidean => {
            let distance = Euclidean.distance(graph.graph[a].position, graph.graph[b].position);
            debug!(
                "Edge {} - {} has no weight, using distance {distance:.3}",
                record.u, record.v
            );
            Ok(distance)
        }
    }
}

fn validate_weight(record: &RawEdge, weight: Weight) -> Result<(), Error> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(Error::InvalidData(format!(
            "Edge {} - {} has invalid weight {weight}",
            record.u, record.v
        )));
    }
    Ok(())
}

/// Edge whose weight underestimates the distance between its endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicViolation {
    pub u: String,
    pub v: String,
    pub weight: Weight,
    pub distance: Weight,
}

/// Lists the edges that make the Euclidean heuristic overestimate
pub fn heuristic_violations(graph: &CampusGraph) -> Vec<HeuristicViolation> {
    graph
        .edges()
        .filter_map(|(u, v, weight)| {
            let distance = Euclidean.distance(u.position, v.position);
            (weight + WEIGHT_EPSILON < distance).then(|| HeuristicViolation {
                u: u.id.clone(),
                v: v.id.clone(),
                weight,
                distance,
            })
        })
        .collect()
}

/// Reads raw building records from a JSON file
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or not valid JSON
pub fn read_raw_graph(path: &Path) -> Result<RawGraph, Error> {
    if !path.exists() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Data file not found: {}", path.display()),
        )));
    }

    let text = fs::read_to_string(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to read file '{}': {}", path.display(), e),
        )
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Loads and builds the building graph from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its records are invalid
pub fn load_graph(path: &Path, config: &LoaderConfig) -> Result<CampusGraph, Error> {
    info!("Loading building data from {}", path.display());
    let raw = read_raw_graph(path)?;
    build_graph(&raw, config)
}

/// Writes raw building records as pretty JSON, creating parent directories
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn write_raw_graph(path: &Path, raw: &RawGraph) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = serde_json::to_string_pretty(raw)?;
    fs::write(path, text)?;
    info!(
        "Wrote {} nodes and {} edges to {}",
        raw.nodes.len(),
        raw.edges.len(),
        path.display()
    );
    Ok(())
}
