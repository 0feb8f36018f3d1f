//! Shortest-route search inside a multi-floor building.
//!
//! The building is an undirected weighted graph: rooms, stairwells and common
//! areas are nodes, corridors and staircases are edges. Routes are computed
//! with Dijkstra or with A* guided by the Euclidean distance between node
//! positions, and can be rendered floor by floor.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod render;
pub mod routing;

pub use error::Error;
pub use loading::{LoaderConfig, MissingWeight, build_graph, load_graph, sample_campus};
pub use model::{CampusGraph, CampusNode, CorridorEdge, NodeKind, Wing};
pub use routing::{Algorithm, PathResult, find_path};

/// Traversal cost of an edge, in layout units
pub type Weight = f64;

/// Absolute tolerance for comparing accumulated weights
pub const WEIGHT_EPSILON: Weight = 1e-9;
