use serde::Serialize;

use crate::types::{Cost, EdgeId, NodeId};

/// One edge of a path, oriented in travel direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RoutingPathLeg {
    pub edge_id: EdgeId,
    pub source: NodeId,
    pub destination: NodeId,
    pub cost: Cost,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoutingPath {
    source: NodeId,
    destination: NodeId,
    legs: Vec<RoutingPathLeg>,
    cost: Cost,
}

impl RoutingPath {
    pub fn new(source: NodeId, destination: NodeId, legs: Vec<RoutingPathLeg>, cost: Cost) -> Self {
        RoutingPath {
            source,
            destination,
            legs,
            cost,
        }
    }

    /// The path that starts and ends at `node` without taking any edge.
    pub fn empty(node: NodeId, offset: Cost) -> Self {
        RoutingPath::new(node, node, Vec::new(), offset)
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn legs(&self) -> &[RoutingPathLeg] {
        &self.legs
    }

    /// Total cost, including the offset of the source the path starts at.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// The source followed by the destination of every leg.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::once(self.source).chain(self.legs.iter().map(|leg| leg.destination))
    }
}
