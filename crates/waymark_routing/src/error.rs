use thiserror::Error;

use crate::types::{Cost, EdgeId, NodeId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} is not part of the graph")]
    UnknownNode(NodeId),
    #[error("Edge {0} is not part of the graph")]
    UnknownEdge(EdgeId),
    #[error("Edge {edge} has an invalid cost {cost}")]
    InvalidCost { edge: EdgeId, cost: Cost },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("Node {0} is not part of the graph")]
    UnknownNode(NodeId),
    #[error("Source {node} has an invalid offset {offset}")]
    InvalidOffset { node: NodeId, offset: Cost },
    #[error("A search needs at least one source")]
    NoSources,
    #[error("No node close to the given coordinates")]
    NoClosestNode,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read or write file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to (de)serialize data: {0}")]
    Serialization(#[from] rkyv::rancor::Error),
    #[error("Stored graph is inconsistent: {0}")]
    Graph(#[from] GraphError),
    #[error("Stored landmark {0} is not part of the graph")]
    LandmarkMismatch(NodeId),
}

#[derive(Error, Debug)]
pub enum WaymarkError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Routing(#[from] RoutingError),
}
