//! Loading and generating the building data

use std::path::Path;

use campusnav_core::loading::write_raw_graph;
use campusnav_core::{CampusGraph, load_graph, sample_campus};
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;

/// Loads the configured building graph
pub fn load_campus(config: &AppConfig) -> Result<CampusGraph, AppError> {
    if !config.data_path.exists() {
        return Err(AppError::MissingData(config.data_path.clone()));
    }
    Ok(load_graph(&config.data_path, &config.loader)?)
}

/// Writes the sample campus to `path` and returns its node and edge counts
pub fn generate_campus(path: &Path) -> Result<(usize, usize), AppError> {
    let raw = sample_campus();
    write_raw_graph(path, &raw)?;
    info!("Generated sample campus at {}", path.display());
    Ok((raw.nodes.len(), raw.edges.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("campus.json");

        let (nodes, edges) = generate_campus(&path).unwrap();
        let config = AppConfig::default().with_data_path(Some(path));
        let graph = load_campus(&config).unwrap();

        assert_eq!(graph.node_count(), nodes);
        assert_eq!(graph.edge_count(), edges);
    }

    #[test]
    fn test_missing_data_hint() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::default().with_data_path(Some(dir.path().join("none.json")));

        let err = load_campus(&config).unwrap_err();
        assert!(matches!(err, AppError::MissingData(_)));
        assert!(err.to_string().contains("campusnav generate"));
    }
}
