pub use crate::WEIGHT_EPSILON;

// Re-export key components
pub use crate::loading::{
    LoaderConfig, MissingWeight, RawEdge, RawGraph, RawNode, build_graph, heuristic_violations,
    load_graph, sample_campus, write_raw_graph,
};
pub use crate::model::{CampusGraph, CampusNode, CorridorEdge, NodeKind, Wing};
pub use crate::render::{
    FloorSelection, FloorView, RenderStyle, render_svg, route_to_geojson,
};
pub use crate::routing::{Algorithm, PathResult, distances_from, find_path, path_weight};

// Core types
pub use crate::Error;
pub use crate::Weight;
