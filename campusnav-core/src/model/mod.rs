//! Data model for indoor routing
//!
//! Contains the building graph and the types describing its locations and
//! connections.

pub mod components;
pub mod graph;

pub use components::{CampusNode, CorridorEdge, NodeKind, Wing};
pub use graph::{CampusGraph, node_exists};
