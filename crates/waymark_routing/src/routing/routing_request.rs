use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::NodeId;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingAlgorithm {
    Dijkstra,
    #[serde(rename = "astar")]
    AStar,
    #[default]
    Alt,
}

impl fmt::Display for RoutingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingAlgorithm::Dijkstra => write!(f, "dijkstra"),
            RoutingAlgorithm::AStar => write!(f, "astar"),
            RoutingAlgorithm::Alt => write!(f, "alt"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct RoutingRequest {
    pub from: NodeId,
    pub to: NodeId,
    /// Overrides the algorithm configured on the engine.
    pub algorithm: Option<RoutingAlgorithm>,
}

impl RoutingRequest {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        RoutingRequest {
            from,
            to,
            algorithm: None,
        }
    }

    pub fn with_algorithm(mut self, algorithm: RoutingAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }
}
