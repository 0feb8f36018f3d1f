//! This module is responsible for reading building data (JSON records or the
//! built-in sample campus) and turning it into a [`CampusGraph`](crate::CampusGraph).

mod builder;
mod config;
mod de;
mod generate;
mod raw_types;

pub use builder::{
    HeuristicViolation, build_graph, heuristic_violations, load_graph, read_raw_graph,
    write_raw_graph,
};
pub use config::{LoaderConfig, MissingWeight};
pub use generate::sample_campus;
pub use raw_types::{RawEdge, RawGraph, RawNode};
