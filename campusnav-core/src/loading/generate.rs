//! Procedural sample campus: a three-floor college building laid out on a
//! 2-unit grid. Edge weights are never shorter than the distance between
//! their endpoints, so A* and Dijkstra agree on this data.

use super::raw_types::{RawEdge, RawGraph, RawNode};
use crate::model::{NodeKind, Wing};

/// Grid step between neighbouring rooms
const STEP: f64 = 2.0;
/// Vertical layout distance between floors, also the cost of one flight of stairs
const FLOOR_GAP: f64 = 10.0;
/// Stairwells sit slightly above their corridor
const STAIR_OFFSET: f64 = 2.0;

#[derive(Default)]
struct CampusBuilder {
    nodes: Vec<RawNode>,
    edges: Vec<RawEdge>,
}

impl CampusBuilder {
    fn place(
        &mut self,
        id: &str,
        label: &str,
        kind: NodeKind,
        floor: i32,
        wing: Option<Wing>,
        (x, y): (f64, f64),
    ) {
        self.nodes.push(RawNode {
            id: id.to_string(),
            label: Some(label.to_string()),
            kind: Some(kind),
            floor: Some(floor),
            wing,
            pos: Some([x, y]),
            x: None,
            y: None,
        });
    }

    fn stair(&mut self, side: Wing, floor: i32, x: f64) {
        let (id, label) = stair_names(side, floor);
        let y = floor_y(floor) + STAIR_OFFSET;
        self.place(&id, &label, NodeKind::Stair, floor, Some(side), (x, y));
    }

    fn connect(&mut self, u: &str, v: &str, weight: f64) {
        self.edges.push(RawEdge::new(u, v, Some(weight)));
    }

    /// Row of rooms along a corridor, neighbours linked by one grid step
    fn corridor(&mut self, rooms: impl IntoIterator<Item = u32>, x0: f64, floor: i32, wing: Wing) {
        let y = floor_y(floor);
        let mut previous: Option<String> = None;
        for (i, room) in rooms.into_iter().enumerate() {
            let id = room.to_string();
            #[allow(clippy::cast_precision_loss)]
            let x = x0 + i as f64 * STEP;
            self.place(&id, &id, NodeKind::Room, floor, Some(wing), (x, y));
            if let Some(prev) = previous.take() {
                self.connect(&prev, &id, STEP);
            }
            previous = Some(id);
        }
    }

    fn finish(self) -> RawGraph {
        RawGraph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

fn floor_y(floor: i32) -> f64 {
    f64::from(floor - 1) * FLOOR_GAP
}

fn stair_names(side: Wing, floor: i32) -> (String, String) {
    let (long, short) = match side {
        Wing::Left => ("L", "SL"),
        Wing::Right => ("R", "SR"),
    };
    (format!("STAIR_{long}_F{floor}"), format!("{short}{floor}"))
}

/// Builds the sample campus records
pub fn sample_campus() -> RawGraph {
    let mut campus = CampusBuilder::default();

    // Floor 1: sport and assembly halls in the left wing, central lobby,
    // rooms 1..=13 to the right.
    let y1 = floor_y(1);
    campus.place("SPORT", "Gym", NodeKind::Sport, 1, Some(Wing::Left), (-10.0, y1));
    campus.place("HALL", "Assembly", NodeKind::Hall, 1, Some(Wing::Left), (-8.0, y1));
    campus.place("LOBBY", "Lobby", NodeKind::Lobby, 1, None, (-4.0, y1));
    campus.stair(Wing::Left, 1, -4.0);
    campus.stair(Wing::Right, 1, 8.0);
    campus.corridor(1..=13, -2.0, 1, Wing::Right);

    campus.connect("SPORT", "HALL", 2.0);
    campus.connect("HALL", "LOBBY", 4.0);
    campus.connect("LOBBY", "1", 2.0);
    campus.connect("LOBBY", "STAIR_L_F1", 2.0);
    campus.connect("6", "STAIR_R_F1", 2.0);
    campus.connect("1", "STAIR_R_F1", 11.0);

    // Floor 2: rooms 14..=18 and the library on the left, 19..=25 on the right.
    let y2 = floor_y(2);
    campus.stair(Wing::Left, 2, -4.0);
    campus.stair(Wing::Right, 2, 8.0);
    campus.corridor(14..=18, -14.0, 2, Wing::Left);
    campus.place("LIB", "Library", NodeKind::Lib, 2, Some(Wing::Left), (-4.0, y2));
    campus.corridor(19..=25, 6.0, 2, Wing::Right);

    campus.connect("18", "LIB", 3.0);
    campus.connect("LIB", "STAIR_L_F2", 2.0);
    campus.connect("19", "STAIR_R_F2", 3.0);
    campus.connect("LIB", "19", 10.0);

    // Floor 3: one long corridor 26..=47.
    campus.stair(Wing::Left, 3, -4.0);
    campus.stair(Wing::Right, 3, 8.0);
    campus.corridor(26..=47, -4.0, 3, Wing::Right);

    campus.connect("26", "STAIR_L_F3", 2.0);
    campus.connect("33", "STAIR_R_F3", 3.0);

    for side in ["L", "R"] {
        for floor in 1..3 {
            campus.connect(
                &format!("STAIR_{side}_F{floor}"),
                &format!("STAIR_{side}_F{}", floor + 1),
                FLOOR_GAP,
            );
        }
    }

    campus.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{LoaderConfig, build_graph, heuristic_violations};

    #[test]
    fn test_sample_campus_shape() {
        let raw = sample_campus();
        let graph = build_graph(&raw, &LoaderConfig::strict()).unwrap();

        // 13 + 12 + 22 rooms, 4 common areas, 6 stairwells
        assert_eq!(graph.node_count(), 57);
        assert_eq!(raw.nodes.len(), graph.node_count());
        assert_eq!(graph.floors().into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);

        let stair = graph.node("STAIR_R_F2").unwrap();
        assert_eq!(stair.label, "SR2");
        assert_eq!(stair.kind, NodeKind::Stair);
        assert_eq!(stair.wing, Some(Wing::Right));
        assert_eq!(graph.edge_weight("STAIR_R_F2", "STAIR_R_F3"), Some(FLOOR_GAP));
        assert_eq!(graph.edge_weight("12", "13"), Some(STEP));
    }

    #[test]
    fn test_sample_campus_is_admissible() {
        let graph = build_graph(&sample_campus(), &LoaderConfig::strict()).unwrap();
        assert!(heuristic_violations(&graph).is_empty());
    }

    #[test]
    fn test_sample_campus_positions_are_distinct() {
        let raw = sample_campus();
        for (i, a) in raw.nodes.iter().enumerate() {
            for b in &raw.nodes[i + 1..] {
                assert_ne!(a.pos, b.pos, "{} and {} overlap", a.id, b.id);
            }
        }
    }
}
