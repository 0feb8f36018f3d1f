use geo::Point;
use serde::{Deserialize, Serialize};

use super::de::{deserialize_id, deserialize_weight};
use crate::model::{CampusNode, NodeKind, Wing};

/// Building data as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGraph {
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub wing: Option<Wing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl RawNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            kind: None,
            floor: None,
            wing: None,
            pos: None,
            x: None,
            y: None,
        }
    }

    /// `pos` wins over separate `x`/`y` keys; nothing at all means the origin
    pub fn position(&self) -> Point<f64> {
        match (self.pos, self.x, self.y) {
            (Some([x, y]), _, _) => Point::new(x, y),
            (None, Some(x), Some(y)) => Point::new(x, y),
            _ => Point::new(0.0, 0.0),
        }
    }

    pub(crate) fn to_node(&self) -> CampusNode {
        CampusNode {
            id: self.id.clone(),
            label: self.label.clone().unwrap_or_else(|| self.id.clone()),
            kind: self.kind.unwrap_or_default(),
            floor: self.floor,
            wing: self.wing,
            position: self.position(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEdge {
    #[serde(deserialize_with = "deserialize_id")]
    pub u: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub v: String,
    #[serde(
        default,
        deserialize_with = "deserialize_weight",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<f64>,
}

impl RawEdge {
    pub fn new(u: impl Into<String>, v: impl Into<String>, weight: Option<f64>) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
            weight,
        }
    }
}
