use geo::LineString;
use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::json;

use super::view::NodeRole;
use crate::Error;
use crate::model::{CampusGraph, CampusNode};
use crate::routing::PathResult;

/// Converts a route to a `GeoJSON` `FeatureCollection`
///
/// The first feature is the route line, followed by one point per node.
/// Coordinates are layout units, not geographic degrees.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if the route names a node missing from
/// `graph`.
pub fn route_to_geojson(
    graph: &CampusGraph,
    route: &PathResult,
) -> Result<FeatureCollection, Error> {
    let nodes = route
        .path
        .iter()
        .map(|id| graph.node(id).ok_or_else(|| Error::NodeNotFound(id.clone())))
        .collect::<Result<Vec<_>, _>>()?;

    let mut features = Vec::with_capacity(nodes.len() + 1);
    features.push(route_feature(route, &nodes)?);

    let last = nodes.len().saturating_sub(1);
    for (i, node) in nodes.iter().enumerate() {
        let role = if i == last {
            NodeRole::End
        } else if i == 0 {
            NodeRole::Start
        } else {
            NodeRole::Via
        };
        features.push(node_feature(node, role.as_str(), i)?);
    }

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

fn route_feature(route: &PathResult, nodes: &[&CampusNode]) -> Result<Feature, Error> {
    let coordinates: LineString<f64> = nodes.iter().map(|node| node.position.0).collect();

    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new((&coordinates).into()),
        "properties": {
            "kind": "route",
            "algorithm": route.algorithm.as_str(),
            "total_weight": route.total_weight,
            "nodes": route.path.len(),
            "start": route.start(),
            "end": route.end(),
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn node_feature(node: &CampusNode, role: &str, order: usize) -> Result<Feature, Error> {
    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new((&node.position).into()),
        "properties": {
            "kind": "stop",
            "order": order,
            "role": role,
            "id": node.id,
            "label": node.label,
            "type": node.kind.as_str(),
            "floor": node.floor,
            "wing": node.wing.map(|w| w.as_str()),
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{LoaderConfig, build_graph, sample_campus};
    use crate::routing::{Algorithm, find_path};

    #[test]
    fn test_route_geojson() {
        let graph = build_graph(&sample_campus(), &LoaderConfig::strict()).unwrap();
        let route = find_path(&graph, "HALL", "STAIR_L_F2", Algorithm::AStar).unwrap();

        let collection = route_to_geojson(&graph, &route).unwrap();
        assert_eq!(collection.features.len(), route.path.len() + 1);

        let value = serde_json::to_value(&collection).unwrap();
        let line = &value["features"][0];
        assert_eq!(line["geometry"]["type"], "LineString");
        assert_eq!(
            line["geometry"]["coordinates"].as_array().unwrap().len(),
            route.path.len()
        );
        assert_eq!(line["properties"]["algorithm"], "astar");
        assert_eq!(line["properties"]["total_weight"], route.total_weight);

        let first = &value["features"][1];
        assert_eq!(first["geometry"]["type"], "Point");
        assert_eq!(first["properties"]["id"], "HALL");
        assert_eq!(first["properties"]["role"], "start");
        assert_eq!(first["properties"]["type"], "hall");
        assert_eq!(first["properties"]["wing"], "left");
        assert_eq!(first["geometry"]["coordinates"], json!([-8.0, 0.0]));

        let last = &value["features"][route.path.len()];
        assert_eq!(last["properties"]["role"], "end");
        assert_eq!(last["properties"]["floor"], 2);
    }

    #[test]
    fn test_single_node_route_is_end() {
        let graph = build_graph(&sample_campus(), &LoaderConfig::strict()).unwrap();
        let route = find_path(&graph, "LIB", "LIB", Algorithm::Dijkstra).unwrap();

        let value = serde_json::to_value(route_to_geojson(&graph, &route).unwrap()).unwrap();
        assert_eq!(value["features"].as_array().unwrap().len(), 2);
        assert_eq!(value["features"][1]["properties"]["role"], "end");
    }

    #[test]
    fn test_unknown_route_node() {
        let graph = build_graph(&sample_campus(), &LoaderConfig::strict()).unwrap();
        let route = PathResult {
            path: vec!["LIB".to_string(), "ATTIC".to_string()],
            total_weight: 1.0,
            algorithm: Algorithm::Dijkstra,
        };
        assert!(matches!(
            route_to_geojson(&graph, &route),
            Err(Error::NodeNotFound(id)) if id == "ATTIC"
        ));
    }
}
