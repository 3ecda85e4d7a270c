use fxhash::FxHashSet;
use tracing::{debug, warn};

use crate::{
    graph::Graph,
    routing::{
        dijkstra::Dijkstra,
        shortest_path_computation::{SearchSource, ShortestPathComputation},
    },
    types::{Cost, NodeId},
};

use super::landmark_provider::LandmarkProvider;

/// Picks every landmark as far away as possible from the ones chosen before.
///
/// The first round searches from the node with the lowest id. Each following
/// round runs a single search from all landmarks found so far. A node that
/// the search does not reach is taken right away; otherwise the reached
/// node with the greatest cost wins, the lowest id breaking ties.
pub struct GreedyFarthestLandmarks<'a, G: Graph> {
    graph: &'a G,
}

impl<'a, G: Graph> GreedyFarthestLandmarks<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        GreedyFarthestLandmarks { graph }
    }

    fn next_landmark(
        &self,
        sources: &[SearchSource],
        chosen: &FxHashSet<NodeId>,
    ) -> Option<NodeId> {
        let dijkstra = Dijkstra::new(self.graph);
        let reachable = match dijkstra.compute_shortest_path_costs_reachable_from(sources) {
            Ok(reachable) => reachable,
            Err(error) => {
                warn!("Landmark search failed: {}", error);
                return None;
            }
        };

        if let Some(unreached) = self
            .graph
            .node_ids()
            .find(|node| !reachable.contains(*node))
        {
            return Some(unreached);
        }

        reachable
            .iter()
            .filter(|(node, _)| !chosen.contains(node))
            .fold(None, |farthest: Option<(NodeId, Cost)>, (node, node_cost)| {
                match farthest {
                    Some((_, cost)) if cost >= node_cost.cost => farthest,
                    _ => Some((node, node_cost.cost)),
                }
            })
            .map(|(node, _)| node)
    }
}

impl<G: Graph> LandmarkProvider for GreedyFarthestLandmarks<'_, G> {
    fn landmarks(&self, amount: usize) -> Vec<NodeId> {
        let amount = amount.min(self.graph.node_count());
        let Some(start) = self.graph.node_ids().next() else {
            return Vec::new();
        };

        let mut landmarks: Vec<NodeId> = Vec::with_capacity(amount);
        let mut chosen: FxHashSet<NodeId> = FxHashSet::default();

        while landmarks.len() < amount {
            let sources: Vec<SearchSource> = if landmarks.is_empty() {
                vec![start.into()]
            } else {
                landmarks.iter().map(|&node| node.into()).collect()
            };

            let Some(landmark) = self.next_landmark(&sources, &chosen) else {
                break;
            };

            chosen.insert(landmark);
            landmarks.push(landmark);
        }

        debug!("Picked {} greedy farthest landmarks", landmarks.len());
        landmarks
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        road_graph::BasicGraph,
        test_graph_utils::test_graphs::{
            RomaniaCity, disconnected_graph, romania_graph, unit_cycle_graph,
        },
    };

    use super::*;

    #[test]
    fn test_get_landmarks() {
        let graph = unit_cycle_graph();
        let provider = GreedyFarthestLandmarks::new(&graph);

        assert_eq!(provider.landmarks(0).len(), 0);
        assert_eq!(provider.landmarks(1).len(), 1);
        assert_eq!(provider.landmarks(4).len(), 4);
        assert_eq!(provider.landmarks(10).len(), 4);
    }

    #[test]
    fn test_greedy_farthest_landmarks_on_empty_graph() {
        let graph = BasicGraph::new();
        assert!(GreedyFarthestLandmarks::new(&graph).landmarks(3).is_empty());
    }

    #[test]
    fn cycle_landmarks_walk_backwards() {
        let graph = unit_cycle_graph();
        let landmarks = GreedyFarthestLandmarks::new(&graph).landmarks(4);

        // 4 is farthest from 1, 3 farthest from 4, then 2 and 1
        assert_eq!(landmarks, vec![4, 3, 2, 1]);
    }

    #[test]
    fn first_landmark_is_farthest_from_the_lowest_id() {
        let graph = romania_graph();
        let landmarks = GreedyFarthestLandmarks::new(&graph).landmarks(1);

        // Neamt is 87 km behind Iasi, the farthest city from Arad
        assert_eq!(landmarks, vec![RomaniaCity::Neamt.id()]);
    }

    #[test]
    fn unreached_components_get_a_landmark() {
        let graph = disconnected_graph();
        let landmarks = GreedyFarthestLandmarks::new(&graph).landmarks(2);

        assert_eq!(landmarks.len(), 2);
        assert!(landmarks.iter().any(|&node| node >= 10));
        assert!(landmarks.iter().any(|&node| node < 10));
    }
}
