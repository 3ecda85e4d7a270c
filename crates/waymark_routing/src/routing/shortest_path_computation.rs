use crate::{
    error::RoutingError,
    types::{Cost, NodeId},
};

use super::{reachable_costs::ReachableCosts, routing_path::RoutingPath};

/// A node a search starts from, with the cost already spent to get there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchSource {
    pub node: NodeId,
    pub offset: Cost,
}

impl SearchSource {
    pub fn new(node: NodeId, offset: Cost) -> Self {
        SearchSource { node, offset }
    }
}

impl From<NodeId> for SearchSource {
    fn from(node: NodeId) -> Self {
        SearchSource::new(node, 0.0)
    }
}

/// Shortest path queries over a fixed graph.
///
/// The `*_from` operations accept several sources and answer for the best of
/// them. The single source operations are expressed in terms of those.
///
/// A destination that cannot be reached is answered with `Ok(None)`; errors
/// are reserved for ids that are not part of the graph and invalid offsets.
pub trait ShortestPathComputation {
    fn compute_shortest_path_from(
        &self,
        sources: &[SearchSource],
        destination: NodeId,
    ) -> Result<Option<RoutingPath>, RoutingError>;

    fn compute_shortest_path_cost_from(
        &self,
        sources: &[SearchSource],
        destination: NodeId,
    ) -> Result<Option<Cost>, RoutingError>;

    /// Nodes expanded by the search, in the order they were settled.
    fn compute_search_space_from(
        &self,
        sources: &[SearchSource],
        destination: NodeId,
    ) -> Result<Vec<NodeId>, RoutingError>;

    /// Every node reachable from one of the sources, with its minimal cost
    /// from the closest source.
    fn compute_shortest_path_costs_reachable_from(
        &self,
        sources: &[SearchSource],
    ) -> Result<ReachableCosts, RoutingError>;

    fn compute_shortest_path(
        &self,
        source: NodeId,
        destination: NodeId,
    ) -> Result<Option<RoutingPath>, RoutingError> {
        self.compute_shortest_path_from(&[source.into()], destination)
    }

    fn compute_shortest_path_cost(
        &self,
        source: NodeId,
        destination: NodeId,
    ) -> Result<Option<Cost>, RoutingError> {
        self.compute_shortest_path_cost_from(&[source.into()], destination)
    }

    fn compute_search_space(
        &self,
        source: NodeId,
        destination: NodeId,
    ) -> Result<Vec<NodeId>, RoutingError> {
        self.compute_search_space_from(&[source.into()], destination)
    }

    fn compute_shortest_path_costs_reachable(
        &self,
        source: NodeId,
    ) -> Result<ReachableCosts, RoutingError> {
        self.compute_shortest_path_costs_reachable_from(&[source.into()])
    }
}
