use crate::types::{Cost, EdgeId, NodeId};

/// A directed edge in its stored orientation.
///
/// Edges refer to their endpoints by id; the graph owns the nodes.
pub trait GraphEdge {
    fn source(&self) -> NodeId;
    fn destination(&self) -> NodeId;
    fn cost(&self) -> Cost;
}

#[derive(Clone, Debug, PartialEq)]
pub struct BasicEdge {
    id: EdgeId,
    source: NodeId,
    destination: NodeId,
    cost: Cost,
}

impl BasicEdge {
    pub fn new(id: EdgeId, source: NodeId, destination: NodeId, cost: Cost) -> Self {
        BasicEdge {
            id,
            source,
            destination,
            cost,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }
}

impl GraphEdge for BasicEdge {
    #[inline(always)]
    fn source(&self) -> NodeId {
        self.source
    }

    #[inline(always)]
    fn destination(&self) -> NodeId {
        self.destination
    }

    #[inline(always)]
    fn cost(&self) -> Cost {
        self.cost
    }
}
