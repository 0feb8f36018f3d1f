//! Per-floor extraction of the building graph combined with a route overlay

use std::fmt;
use std::str::FromStr;

use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::Error;
use crate::model::{CampusGraph, CampusNode};
use crate::routing::PathResult;

/// Which part of the building a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloorSelection {
    Floor(i32),
    All,
}

impl FloorSelection {
    /// One entry per floor present, ascending, then `All`
    pub fn tabs(graph: &CampusGraph) -> Vec<FloorSelection> {
        graph
            .floors()
            .into_iter()
            .map(FloorSelection::Floor)
            .chain(std::iter::once(FloorSelection::All))
            .collect()
    }

    /// Nodes without a floor only appear in the `All` view
    pub fn contains(self, node: &CampusNode) -> bool {
        match self {
            FloorSelection::Floor(floor) => node.floor == Some(floor),
            FloorSelection::All => true,
        }
    }

    pub fn title(self) -> String {
        match self {
            FloorSelection::Floor(floor) => format!("Floor {floor}"),
            FloorSelection::All => "All floors".to_string(),
        }
    }

    /// File name stem for rendered output
    pub fn file_stem(self) -> String {
        match self {
            FloorSelection::Floor(floor) => format!("floor-{floor}"),
            FloorSelection::All => "all-floors".to_string(),
        }
    }
}

impl fmt::Display for FloorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloorSelection::Floor(floor) => write!(f, "{floor}"),
            FloorSelection::All => f.write_str("all"),
        }
    }
}

impl FromStr for FloorSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(FloorSelection::All);
        }
        s.parse::<i32>()
            .map(FloorSelection::Floor)
            .map_err(|_| Error::InvalidData(format!("'{s}' is neither a floor number nor 'all'")))
    }
}

/// How a route node is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Start,
    End,
    /// The route enters or leaves the displayed floor here
    Transition,
    Via,
}

impl NodeRole {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeRole::Start => "start",
            NodeRole::End => "end",
            NodeRole::Transition => "transition",
            NodeRole::Via => "via",
        }
    }
}

/// Nodes and edges of one floor (or all floors) and the part of a route
/// lying on them
#[derive(Debug, Clone)]
pub struct FloorView {
    pub selection: FloorSelection,
    /// Displayed nodes, in graph order
    pub nodes: Vec<NodeIndex>,
    /// Edges with both endpoints displayed
    pub edges: Vec<EdgeIndex>,
    /// Route edges with both endpoints displayed
    pub route_edges: Vec<EdgeIndex>,
    roles: HashMap<NodeIndex, NodeRole>,
}

impl FloorView {
    /// Builds the view of `selection`, highlighting `route` if given
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the route names a node that is not
    /// in `graph`.
    pub fn new(
        graph: &CampusGraph,
        selection: FloorSelection,
        route: Option<&PathResult>,
    ) -> Result<Self, Error> {
        let g = &graph.graph;
        let nodes: Vec<NodeIndex> = g
            .node_indices()
            .filter(|&idx| selection.contains(&g[idx]))
            .collect();
        let shown: HashSet<NodeIndex> = nodes.iter().copied().collect();

        let edges: Vec<EdgeIndex> = g
            .edge_indices()
            .filter(|&edge| {
                g.edge_endpoints(edge)
                    .is_some_and(|(a, b)| shown.contains(&a) && shown.contains(&b))
            })
            .collect();

        let mut route_edges = Vec::new();
        let mut roles = HashMap::new();

        if let Some(route) = route {
            let route_nodes = route
                .path
                .iter()
                .map(|id| graph.require(id))
                .collect::<Result<Vec<_>, _>>()?;
            let last = route_nodes.len().saturating_sub(1);

            for (i, &idx) in route_nodes.iter().enumerate() {
                if !shown.contains(&idx) {
                    continue;
                }
                // A single-node route is drawn as its destination
                let role = if i == last {
                    NodeRole::End
                } else if i == 0 {
                    NodeRole::Start
                } else {
                    let before = route_nodes[i - 1];
                    let after = route_nodes[i + 1];
                    if shown.contains(&before) && shown.contains(&after) {
                        NodeRole::Via
                    } else {
                        NodeRole::Transition
                    }
                };
                roles.insert(idx, role);
            }

            // Only consecutive route nodes are joined, so leaving a floor and
            // coming back is not drawn as a jump across it.
            for (&a, &b) in route_nodes.iter().tuple_windows() {
                if shown.contains(&a) && shown.contains(&b) {
                    if let Some(edge) = g.find_edge(a, b) {
                        route_edges.push(edge);
                    }
                }
            }
        }

        Ok(Self {
            selection,
            nodes,
            edges,
            route_edges,
            roles,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_route(&self) -> bool {
        !self.roles.is_empty()
    }

    pub fn role(&self, node: NodeIndex) -> Option<NodeRole> {
        self.roles.get(&node).copied()
    }

    pub fn is_route_edge(&self, edge: EdgeIndex) -> bool {
        self.route_edges.contains(&edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{LoaderConfig, build_graph, sample_campus};
    use crate::routing::{Algorithm, find_path};

    fn campus() -> CampusGraph {
        build_graph(&sample_campus(), &LoaderConfig::strict()).unwrap()
    }

    fn ids(graph: &CampusGraph, view: &FloorView, role: NodeRole) -> Vec<String> {
        view.nodes
            .iter()
            .filter(|&&idx| view.role(idx) == Some(role))
            .map(|&idx| graph.graph[idx].id.clone())
            .collect()
    }

    #[test]
    fn test_tabs() {
        let graph = campus();
        assert_eq!(
            FloorSelection::tabs(&graph),
            vec![
                FloorSelection::Floor(1),
                FloorSelection::Floor(2),
                FloorSelection::Floor(3),
                FloorSelection::All
            ]
        );
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("all".parse::<FloorSelection>().unwrap(), FloorSelection::All);
        assert_eq!(" ALL".parse::<FloorSelection>().unwrap(), FloorSelection::All);
        assert_eq!("2".parse::<FloorSelection>().unwrap(), FloorSelection::Floor(2));
        assert!("roof".parse::<FloorSelection>().is_err());
        assert_eq!(FloorSelection::Floor(3).file_stem(), "floor-3");
        assert_eq!(FloorSelection::All.title(), "All floors");
    }

    #[test]
    fn test_floor_subgraph_is_induced() {
        let graph = campus();
        let view = FloorView::new(&graph, FloorSelection::Floor(2), None).unwrap();

        assert_eq!(view.nodes.len(), 15);
        assert!(!view.has_route());
        for &edge in &view.edges {
            let (a, b) = graph.graph.edge_endpoints(edge).unwrap();
            assert_eq!(graph.graph[a].floor, Some(2));
            assert_eq!(graph.graph[b].floor, Some(2));
        }
        // Stair flights lead off the floor and are not part of its view
        let stair = graph.index_of("STAIR_L_F2").unwrap();
        let upstairs = graph.index_of("STAIR_L_F3").unwrap();
        let flight = graph.graph.find_edge(stair, upstairs).unwrap();
        assert!(!view.edges.contains(&flight));
    }

    #[test]
    fn test_route_overlay_per_floor() {
        let graph = campus();
        let route = find_path(&graph, "SPORT", "LIB", Algorithm::Dijkstra).unwrap();

        let first = FloorView::new(&graph, FloorSelection::Floor(1), Some(&route)).unwrap();
        assert_eq!(ids(&graph, &first, NodeRole::Start), vec!["SPORT"]);
        assert!(ids(&graph, &first, NodeRole::End).is_empty());
        assert_eq!(ids(&graph, &first, NodeRole::Transition), vec!["STAIR_L_F1"]);
        assert_eq!(first.route_edges.len(), 3);

        let second = FloorView::new(&graph, FloorSelection::Floor(2), Some(&route)).unwrap();
        assert!(ids(&graph, &second, NodeRole::Start).is_empty());
        assert_eq!(ids(&graph, &second, NodeRole::End), vec!["LIB"]);
        assert_eq!(ids(&graph, &second, NodeRole::Transition), vec!["STAIR_L_F2"]);
        assert_eq!(second.route_edges.len(), 1);

        let third = FloorView::new(&graph, FloorSelection::Floor(3), Some(&route)).unwrap();
        assert!(!third.has_route());
        assert!(third.route_edges.is_empty());

        let all = FloorView::new(&graph, FloorSelection::All, Some(&route)).unwrap();
        assert_eq!(all.route_edges.len(), route.hops());
        assert!(ids(&graph, &all, NodeRole::Transition).is_empty());
    }

    #[test]
    fn test_route_leaving_and_returning_is_not_joined() {
        // Down the left stairs, along floor 1 and back up the right stairs:
        // the floor 2 view must not join the two stairwells directly.
        let graph = campus();
        let path: Vec<String> = [
            "LIB", "STAIR_L_F2", "STAIR_L_F1", "LOBBY", "1", "2", "3", "4", "5", "6",
            "STAIR_R_F1", "STAIR_R_F2", "19",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        let total_weight = crate::routing::path_weight(&graph, &path).unwrap();
        let detour = PathResult {
            path,
            total_weight,
            algorithm: Algorithm::Dijkstra,
        };

        let view = FloorView::new(&graph, FloorSelection::Floor(2), Some(&detour)).unwrap();
        assert_eq!(view.route_edges.len(), 2);
        assert_eq!(ids(&graph, &view, NodeRole::Start), vec!["LIB"]);
        assert_eq!(ids(&graph, &view, NodeRole::End), vec!["19"]);
        assert_eq!(
            ids(&graph, &view, NodeRole::Transition),
            vec!["STAIR_L_F2", "STAIR_R_F2"]
        );
    }

    #[test]
    fn test_single_node_route() {
        let graph = campus();
        let route = find_path(&graph, "LIB", "LIB", Algorithm::AStar).unwrap();
        let view = FloorView::new(&graph, FloorSelection::Floor(2), Some(&route)).unwrap();

        let lib = graph.index_of("LIB").unwrap();
        assert_eq!(view.role(lib), Some(NodeRole::End));
        assert!(ids(&graph, &view, NodeRole::Start).is_empty());
        assert!(view.route_edges.is_empty());
    }

    #[test]
    fn test_foreign_route_rejected() {
        let graph = campus();
        let route = PathResult {
            path: vec!["NOWHERE".to_string()],
            total_weight: 0.0,
            algorithm: Algorithm::Dijkstra,
        };
        let result = FloorView::new(&graph, FloorSelection::All, Some(&route));
        assert!(matches!(result, Err(Error::NodeNotFound(_))));
    }
}
