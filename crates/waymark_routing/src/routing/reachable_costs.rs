use crate::{
    id_map::IdMap,
    types::{Cost, EdgeId, NodeId},
};

use super::routing_path::{RoutingPath, RoutingPathLeg};

/// The edge over which a node was reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Predecessor {
    pub node: NodeId,
    pub edge_id: EdgeId,
    pub edge_cost: Cost,
}

/// Minimal cost of a node, and how it was reached. Sources have no
/// predecessor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeCost {
    pub cost: Cost,
    pub predecessor: Option<Predecessor>,
}

/// Every node reached by a search with its final cost.
#[derive(Clone, Debug, Default)]
pub struct ReachableCosts {
    costs: IdMap<NodeId, NodeCost>,
}

impl ReachableCosts {
    pub(crate) fn new(costs: IdMap<NodeId, NodeCost>) -> Self {
        ReachableCosts { costs }
    }

    pub fn cost(&self, node: NodeId) -> Option<Cost> {
        self.costs.get(&node).map(|node_cost| node_cost.cost)
    }

    pub fn get(&self, node: NodeId) -> Option<&NodeCost> {
        self.costs.get(&node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.costs.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeCost)> + '_ {
        self.costs.iter()
    }

    /// Consumes the result, keeping only the costs.
    pub fn into_costs(self) -> IdMap<NodeId, Cost> {
        self.costs
            .into_iter()
            .map(|(node, node_cost)| (node, node_cost.cost))
            .collect()
    }

    /// Path from the source that reached `node` first.
    pub fn path_to(&self, node: NodeId) -> Option<RoutingPath> {
        trace_path(node, |node| self.costs.get(&node))
    }
}

/// Walks the predecessor chain back from `destination`.
pub(crate) fn trace_path<'a, F>(destination: NodeId, lookup: F) -> Option<RoutingPath>
where
    F: Fn(NodeId) -> Option<&'a NodeCost>,
{
    let cost = lookup(destination)?.cost;

    let mut legs = Vec::new();
    let mut node = destination;
    while let Some(predecessor) = lookup(node).and_then(|node_cost| node_cost.predecessor) {
        legs.push(RoutingPathLeg {
            edge_id: predecessor.edge_id,
            source: predecessor.node,
            destination: node,
            cost: predecessor.edge_cost,
        });
        node = predecessor.node;
    }
    legs.reverse();

    Some(RoutingPath::new(node, destination, legs, cost))
}
