use crate::{
    constants::{KMH_TO_METERS_PER_SECOND, MAX_SPEED_KMH},
    graph::Graph,
    node::Spatial,
    types::{Cost, NodeId},
};

/// Lower bound on the cost of travelling from one node to another.
///
/// A* only returns optimal paths when the estimate never exceeds the real
/// cost and does not shrink by more than an edge's cost when moving along it.
pub trait AStarHeuristic {
    fn estimate(&self, from: NodeId, to: NodeId) -> Cost;
}

impl<H: AStarHeuristic + ?Sized> AStarHeuristic for &H {
    #[inline(always)]
    fn estimate(&self, from: NodeId, to: NodeId) -> Cost {
        (**self).estimate(from, to)
    }
}

/// Turns A* into Dijkstra.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl AStarHeuristic for ZeroHeuristic {
    #[inline(always)]
    fn estimate(&self, _from: NodeId, _to: NodeId) -> Cost {
        0.0
    }
}

/// Travel time along the great circle at the highest speed any edge allows.
pub struct CrowFliesHeuristic<'a, G> {
    graph: &'a G,
}

impl<'a, G> CrowFliesHeuristic<'a, G>
where
    G: Graph,
    G::Node: Spatial,
{
    pub fn new(graph: &'a G) -> Self {
        CrowFliesHeuristic { graph }
    }
}

impl<G> AStarHeuristic for CrowFliesHeuristic<'_, G>
where
    G: Graph,
    G::Node: Spatial,
{
    fn estimate(&self, from: NodeId, to: NodeId) -> Cost {
        let (Some(from), Some(to)) = (self.graph.node(from), self.graph.node(to)) else {
            return 0.0;
        };

        let distance = from.coordinates().haversine_distance(&to.coordinates());
        distance / (MAX_SPEED_KMH * KMH_TO_METERS_PER_SECOND)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        graph_edge::GraphEdge, highway_type::HighwayType, node::RoadNode, road_edge::RoadEdge,
        road_graph::RoadNetwork,
    };

    use super::*;

    #[test]
    fn crow_flies_never_exceeds_edge_cost() {
        let mut graph = RoadNetwork::new();
        let start = RoadNode::new(0, 50.0, 4.0);
        let end = RoadNode::new(1, 50.05, 4.05);
        graph.add_node(start);
        graph.add_node(end);
        let edge = RoadEdge::new(1, &start, &end, HighwayType::Motorway, 200);

        let heuristic = CrowFliesHeuristic::new(&graph);
        let estimate = heuristic.estimate(0, 1);

        assert!(estimate > 0.0);
        assert!(estimate <= edge.cost() + 1e-9);
        assert_eq!(heuristic.estimate(0, 0), 0.0);
    }

    #[test]
    fn unknown_nodes_estimate_zero() {
        let graph = RoadNetwork::new();
        assert_eq!(CrowFliesHeuristic::new(&graph).estimate(3, 4), 0.0);
        assert_eq!(ZeroHeuristic.estimate(3, 4), 0.0);
    }
}
