use serde::{Deserialize, Serialize};

use crate::Weight;

/// What to do with an edge record that carries no weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingWeight {
    /// Refuse the data set
    Reject,
    /// Use a fixed cost, with a warning per edge
    Default(Weight),
    /// Use the straight-line distance between the endpoint positions
    Euclidean,
}

impl Default for MissingWeight {
    fn default() -> Self {
        MissingWeight::Default(1.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub missing_weight: MissingWeight,
}

impl LoaderConfig {
    pub fn strict() -> Self {
        Self {
            missing_weight: MissingWeight::Reject,
        }
    }
}
