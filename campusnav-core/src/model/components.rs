//! Building graph components - locations and the connections between them

use std::fmt;
use std::str::FromStr;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::{Error, Weight};

/// What a location is used for
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    #[default]
    Room,
    Stair,
    Hall,
    Sport,
    Lobby,
    Lib,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Room => "room",
            NodeKind::Stair => "stair",
            NodeKind::Hall => "hall",
            NodeKind::Sport => "sport",
            NodeKind::Lobby => "lobby",
            NodeKind::Lib => "lib",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "room" => Ok(NodeKind::Room),
            "stair" => Ok(NodeKind::Stair),
            "hall" => Ok(NodeKind::Hall),
            "sport" => Ok(NodeKind::Sport),
            "lobby" => Ok(NodeKind::Lobby),
            "lib" => Ok(NodeKind::Lib),
            other => Err(Error::InvalidData(format!("unknown node type '{other}'"))),
        }
    }
}

/// Side of the building a location belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wing {
    Left,
    Right,
}

impl Wing {
    pub fn as_str(self) -> &'static str {
        match self {
            Wing::Left => "left",
            Wing::Right => "right",
        }
    }
}

impl fmt::Display for Wing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Building graph node
#[derive(Debug, Clone, PartialEq)]
pub struct CampusNode {
    /// Unique identifier
    pub id: String,
    /// Display label, the id unless the data says otherwise
    pub label: String,
    pub kind: NodeKind,
    pub floor: Option<i32>,
    pub wing: Option<Wing>,
    /// Layout position, also used by the A* heuristic
    pub position: Point<f64>,
}

impl CampusNode {
    /// Node with default attributes: labelled by its id, a room at the origin
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            kind: NodeKind::default(),
            floor: None,
            wing: None,
            position: Point::new(0.0, 0.0),
        }
    }

    /// Pick-list text: `id — label`, or just the id when both are equal
    pub fn display_name(&self) -> String {
        if self.label == self.id {
            self.id.clone()
        } else {
            format!("{} — {}", self.id, self.label)
        }
    }
}

/// Building graph edge (corridor segment or staircase)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorridorEdge {
    /// Traversal cost, non-negative
    pub weight: Weight,
}

impl CorridorEdge {
    pub fn traversal_cost(&self) -> Weight {
        self.weight
    }
}
