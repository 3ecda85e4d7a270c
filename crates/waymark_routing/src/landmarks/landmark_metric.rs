use std::path::Path;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, info};

use crate::{
    error::{RoutingError, StorageError},
    graph::Graph,
    graph_view::GraphView,
    id_map::IdMap,
    routing::{
        astar::AStar, astar_heuristic::AStarHeuristic, dijkstra::Dijkstra,
        shortest_path_computation::ShortestPathComputation,
    },
    stopwatch::Stopwatch,
    storage::{read_bytes, write_bytes},
    types::{Cost, NodeId},
};

use super::landmark_provider::LandmarkProvider;

/// A* guided by a landmark metric.
pub type Alt<'a, G> = AStar<'a, G, &'a LandmarkMetric>;

#[derive(Clone, Debug, Default)]
struct Landmark {
    node_id: NodeId,
    // landmark -> node
    cost_from_landmark: IdMap<NodeId, Cost>,
    // node -> landmark
    cost_to_landmark: IdMap<NodeId, Cost>,
}

/// Lower bounds on shortest path costs, derived from the triangle inequality
/// and the exact costs from and to a few landmark nodes.
///
/// Nodes a landmark cannot reach, or that cannot reach it, have no entry in
/// its tables. Such a landmark is skipped for every pair involving them.
#[derive(Clone, Debug, Default)]
pub struct LandmarkMetric {
    landmarks: Vec<Landmark>,
}

impl LandmarkMetric {
    /// Picks `amount` landmarks with `provider` and computes their cost
    /// tables, one landmark per task.
    pub fn prepare<G, P>(graph: &G, amount: usize, provider: &P) -> Result<Self, RoutingError>
    where
        G: Graph + Sync,
        P: LandmarkProvider + ?Sized,
    {
        info!("Start LM preparation");
        let stopwatch = Stopwatch::new("landmarks/prepare");

        let landmark_ids = provider.landmarks(amount);
        info!("Found all {} landmarks", landmark_ids.len());

        let landmarks = landmark_ids
            .par_iter()
            .map(|&node_id| Self::create_landmark(graph, node_id))
            .collect::<Result<Vec<Landmark>, RoutingError>>()?;

        info!("Finished LM preparation");
        stopwatch.report();

        Ok(LandmarkMetric { landmarks })
    }

    fn create_landmark<G: Graph>(graph: &G, node_id: NodeId) -> Result<Landmark, RoutingError> {
        // Costs from the landmark, searching in travel direction
        let cost_from_landmark = Dijkstra::on_view(GraphView::forward(graph))
            .compute_shortest_path_costs_reachable(node_id)?
            .into_costs();

        // Costs to the landmark, searching against travel direction
        let cost_to_landmark = Dijkstra::on_view(GraphView::backward(graph))
            .compute_shortest_path_costs_reachable(node_id)?
            .into_costs();

        debug!(
            "Landmark {} reaches {} nodes and is reached by {} nodes",
            node_id,
            cost_from_landmark.len(),
            cost_to_landmark.len()
        );

        Ok(Landmark {
            node_id,
            cost_from_landmark,
            cost_to_landmark,
        })
    }

    pub fn landmarks(&self) -> Vec<NodeId> {
        self.landmarks.iter().map(|landmark| landmark.node_id).collect()
    }

    pub fn num_landmarks(&self) -> usize {
        self.landmarks.len()
    }

    pub fn cost_from_landmark(&self, landmark_index: usize, node: NodeId) -> Option<Cost> {
        self.landmarks
            .get(landmark_index)
            .and_then(|landmark| landmark.cost_from_landmark.get(&node))
            .copied()
    }

    pub fn cost_to_landmark(&self, landmark_index: usize, node: NodeId) -> Option<Cost> {
        self.landmarks
            .get(landmark_index)
            .and_then(|landmark| landmark.cost_to_landmark.get(&node))
            .copied()
    }

    /// Lower bound on the cost from `first` to `second`. Zero when no
    /// landmark knows both nodes in both directions.
    pub fn distance(&self, first: NodeId, second: NodeId) -> Cost {
        let mut greatest_distance: Cost = 0.0;

        for landmark in &self.landmarks {
            let (
                Some(&first_to_landmark),
                Some(&second_to_landmark),
                Some(&landmark_to_second),
                Some(&landmark_to_first),
            ) = (
                landmark.cost_to_landmark.get(&first),
                landmark.cost_to_landmark.get(&second),
                landmark.cost_from_landmark.get(&second),
                landmark.cost_from_landmark.get(&first),
            )
            else {
                continue;
            };

            let landmark_behind_destination = first_to_landmark - second_to_landmark;
            let landmark_before_source = landmark_to_second - landmark_to_first;

            greatest_distance = greatest_distance
                .max(landmark_behind_destination)
                .max(landmark_before_source);
        }

        greatest_distance
    }

    pub fn alt<'a, G: Graph>(&'a self, graph: &'a G) -> Alt<'a, G> {
        AStar::with_heuristic(graph, self)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), StorageError> {
        let data = LandmarkData {
            landmarks: self
                .landmarks
                .iter()
                .map(|landmark| LandmarkRecord {
                    node_id: landmark.node_id,
                    cost_from_landmark: landmark
                        .cost_from_landmark
                        .iter()
                        .map(|(node, &cost)| (node, cost))
                        .collect(),
                    cost_to_landmark: landmark
                        .cost_to_landmark
                        .iter()
                        .map(|(node, &cost)| (node, cost))
                        .collect(),
                })
                .collect(),
        };

        let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(&data)?;
        write_bytes(&bytes[..], path)?;

        info!(
            "Saved {} landmarks to {}",
            self.num_landmarks(),
            path.display()
        );
        Ok(())
    }

    /// Loads landmarks stored by `save_to_file`, checking that every landmark
    /// is a node of `graph`.
    pub fn from_file<G: Graph>(path: &Path, graph: &G) -> Result<Self, StorageError> {
        debug!("Reading from path {}", path.display());
        let bytes = read_bytes(path)?;
        debug!("Read from path {}, size {}", path.display(), bytes.len());

        let data = rkyv::from_bytes::<LandmarkData, rkyv::rancor::Error>(&bytes)?;
        info!("Deserialized {} landmarks", data.landmarks.len());

        let landmarks = data
            .landmarks
            .into_iter()
            .map(|record| {
                if !graph.contains_node(record.node_id) {
                    return Err(StorageError::LandmarkMismatch(record.node_id));
                }

                Ok(Landmark {
                    node_id: record.node_id,
                    cost_from_landmark: record.cost_from_landmark.into_iter().collect(),
                    cost_to_landmark: record.cost_to_landmark.into_iter().collect(),
                })
            })
            .collect::<Result<Vec<Landmark>, StorageError>>()?;

        Ok(LandmarkMetric { landmarks })
    }
}

impl AStarHeuristic for LandmarkMetric {
    #[inline(always)]
    fn estimate(&self, from: NodeId, to: NodeId) -> Cost {
        self.distance(from, to)
    }
}

#[derive(rkyv::Archive, rkyv::Deserialize, rkyv::Serialize)]
struct LandmarkRecord {
    node_id: NodeId,
    cost_from_landmark: Vec<(NodeId, Cost)>,
    cost_to_landmark: Vec<(NodeId, Cost)>,
}

#[derive(rkyv::Archive, rkyv::Deserialize, rkyv::Serialize)]
struct LandmarkData {
    landmarks: Vec<LandmarkRecord>,
}

#[cfg(test)]
mod tests {
    use std::env;

    use crate::{
        graph_edge::GraphEdge,
        road_graph::BasicGraph,
        landmarks::{
            greedy_farthest_landmarks::GreedyFarthestLandmarks, random_landmarks::RandomLandmarks,
        },
        test_graph_utils::test_graphs::{
            RomaniaCity, disconnected_graph, romania_graph, unit_cycle_graph,
        },
    };

    use super::*;

    fn greedy_metric(graph: &BasicGraph, amount: usize) -> LandmarkMetric {
        LandmarkMetric::prepare(graph, amount, &GreedyFarthestLandmarks::new(graph)).unwrap()
    }

    #[test]
    fn zero_landmarks_estimate_zero() {
        let graph = romania_graph();
        let metric = greedy_metric(&graph, 0);

        assert_eq!(metric.num_landmarks(), 0);
        for from in RomaniaCity::ALL {
            for to in RomaniaCity::ALL {
                assert_eq!(metric.distance(from.id(), to.id()), 0.0);
            }
        }
    }

    #[test]
    fn landmark_count_is_capped() {
        let graph = unit_cycle_graph();
        let metric = greedy_metric(&graph, 10);

        let mut landmarks = metric.landmarks();
        landmarks.sort_unstable();
        assert_eq!(landmarks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn tables_hold_exact_costs() {
        let graph = unit_cycle_graph();
        let metric = greedy_metric(&graph, 1);

        // The only landmark is node 4
        assert_eq!(metric.landmarks(), vec![4]);
        assert_eq!(metric.cost_from_landmark(0, 4), Some(0.0));
        assert_eq!(metric.cost_from_landmark(0, 1), Some(1.0));
        assert_eq!(metric.cost_from_landmark(0, 3), Some(3.0));
        assert_eq!(metric.cost_to_landmark(0, 3), Some(1.0));
        assert_eq!(metric.cost_to_landmark(0, 1), Some(3.0));
        assert_eq!(metric.cost_to_landmark(1, 1), None);
    }

    #[test]
    fn tables_are_non_negative_and_consistent_with_edges() {
        let graph = romania_graph();
        let provider = RandomLandmarks::with_seed(&graph, 7);
        let metric = LandmarkMetric::prepare(&graph, 4, &provider).unwrap();

        for index in 0..metric.num_landmarks() {
            for edge in graph.edges() {
                let (source, destination) = (edge.source(), edge.destination());

                let from_source = metric.cost_from_landmark(index, source).unwrap();
                let from_destination = metric.cost_from_landmark(index, destination).unwrap();
                assert!(from_source >= 0.0);
                assert!(from_destination <= from_source + edge.cost());

                let to_source = metric.cost_to_landmark(index, source).unwrap();
                let to_destination = metric.cost_to_landmark(index, destination).unwrap();
                assert!(to_destination >= 0.0);
                assert!(to_source <= to_destination + edge.cost());
            }
        }
    }

    #[test]
    fn distance_is_admissible() {
        let graph = romania_graph();
        let metric = greedy_metric(&graph, 3);
        let dijkstra = Dijkstra::new(&graph);

        for from in RomaniaCity::ALL {
            let reachable = dijkstra
                .compute_shortest_path_costs_reachable(from.id())
                .unwrap();
            for to in RomaniaCity::ALL {
                let exact = reachable.cost(to.id()).unwrap();
                let estimate = metric.distance(from.id(), to.id());
                assert!(estimate >= 0.0);
                assert!(estimate <= exact + 1e-9, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn alt_matches_dijkstra() {
        let graph = romania_graph();
        let metric = greedy_metric(&graph, 3);
        let alt = metric.alt(&graph);
        let dijkstra = Dijkstra::new(&graph);

        for from in RomaniaCity::ALL {
            for to in RomaniaCity::ALL {
                let expected = dijkstra.compute_shortest_path_cost(from.id(), to.id()).unwrap();
                let actual = alt.compute_shortest_path_cost(from.id(), to.id()).unwrap();
                assert_eq!(expected, actual, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn alt_searches_less_than_dijkstra() {
        let graph = romania_graph();
        let metric = greedy_metric(&graph, 4);
        let alt = metric.alt(&graph);
        let dijkstra = Dijkstra::new(&graph);

        let from = RomaniaCity::Timisoara.id();
        let to = RomaniaCity::Bucharest.id();
        let alt_space = alt.compute_search_space(from, to).unwrap();
        let dijkstra_space = dijkstra.compute_search_space(from, to).unwrap();

        assert!(alt_space.len() <= dijkstra_space.len());
    }

    #[test]
    fn unrelated_components_are_skipped() {
        let graph = disconnected_graph();
        let metric = greedy_metric(&graph, 1);

        // A single landmark cannot know both components
        assert_eq!(metric.distance(0, 10), 0.0);
        assert_eq!(metric.distance(10, 1), 0.0);
    }

    #[test]
    fn cycle_alt_cost() {
        let graph = unit_cycle_graph();
        let metric = greedy_metric(&graph, 4);
        let alt = metric.alt(&graph);

        assert_eq!(alt.compute_shortest_path_cost(1, 3), Ok(Some(2.0)));
        assert_eq!(metric.distance(1, 3), 2.0);
    }

    #[test]
    fn save_and_load_from_file() {
        let file_name = format!("waymark-landmarks-{}.bin", std::process::id());
        let path = env::temp_dir().join(file_name);
        let graph = romania_graph();
        let metric = greedy_metric(&graph, 3);

        metric.save_to_file(&path).unwrap();
        let loaded = LandmarkMetric::from_file(&path, &graph);

        let other_graph = unit_cycle_graph();
        let mismatch = LandmarkMetric::from_file(&path, &other_graph);
        std::fs::remove_file(&path).unwrap();

        let loaded = loaded.unwrap();
        assert_eq!(loaded.landmarks(), metric.landmarks());
        for from in RomaniaCity::ALL {
            for to in RomaniaCity::ALL {
                assert_eq!(
                    loaded.distance(from.id(), to.id()),
                    metric.distance(from.id(), to.id())
                );
            }
        }

        assert!(matches!(mismatch, Err(StorageError::LandmarkMismatch(_))));
    }
}
