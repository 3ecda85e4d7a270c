use std::{fs, path::Path};

use tracing::info;

use crate::{
    constants::{GRAPH_FILE_NAME, LANDMARKS_FILE_NAME},
    error::{RoutingError, StorageError, WaymarkError},
    geopoint::GeoPoint,
    graph::Graph,
    landmarks::{
        greedy_farthest_landmarks::GreedyFarthestLandmarks, landmark_metric::LandmarkMetric,
        landmark_provider::LandmarkProvider, random_landmarks::RandomLandmarks,
    },
    location_index::LocationIndex,
    node::Spatial,
    road_graph::RoadNetwork,
    routing::{
        astar::AStar,
        dijkstra::Dijkstra,
        routing_path::RoutingPath,
        routing_request::{RoutingAlgorithm, RoutingRequest},
        shortest_path_computation::ShortestPathComputation,
    },
    routing_config::{LandmarkStrategy, RoutingConfig},
    stopwatch::Stopwatch,
    storage::binary_file_path,
    types::Cost,
};

/// A prepared road network ready to answer routing requests.
pub struct Waymark {
    graph: RoadNetwork,
    index: LocationIndex,
    landmarks: LandmarkMetric,
    config: RoutingConfig,
}

impl Waymark {
    pub fn from_graph(graph: RoadNetwork, config: RoutingConfig) -> Result<Self, RoutingError> {
        let graph = if config.reduce_to_largest_scc {
            graph.reduce_to_largest_scc()
        } else {
            graph
        };

        let index = LocationIndex::build_from_graph(&graph);
        let landmarks = prepare_landmarks(&graph, &config)?;

        Ok(Waymark {
            graph,
            index,
            landmarks,
            config,
        })
    }

    /// Loads the graph stored in `dir_path` along with its landmarks. The
    /// landmarks are prepared again when the directory has none.
    pub fn from_directory(dir_path: &Path, config: RoutingConfig) -> Result<Self, WaymarkError> {
        let graph = RoadNetwork::from_file(&binary_file_path(dir_path, GRAPH_FILE_NAME))?;
        info!("{}", graph.size_information());

        let graph = if config.reduce_to_largest_scc {
            graph.reduce_to_largest_scc()
        } else {
            graph
        };

        let landmarks_file = binary_file_path(dir_path, LANDMARKS_FILE_NAME);
        let landmarks = if landmarks_file.exists() {
            LandmarkMetric::from_file(&landmarks_file, &graph)?
        } else {
            info!("No landmarks in {}, preparing them", dir_path.display());
            prepare_landmarks(&graph, &config)?
        };

        let index = LocationIndex::build_from_graph(&graph);

        Ok(Waymark {
            graph,
            index,
            landmarks,
            config,
        })
    }

    pub fn save(&self, dir_path: &Path) -> Result<(), StorageError> {
        fs::create_dir_all(dir_path)?;

        self.graph
            .save_to_file(&binary_file_path(dir_path, GRAPH_FILE_NAME))?;
        self.landmarks
            .save_to_file(&binary_file_path(dir_path, LANDMARKS_FILE_NAME))?;

        Ok(())
    }

    pub fn graph(&self) -> &RoadNetwork {
        &self.graph
    }

    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    pub fn landmarks(&self) -> &LandmarkMetric {
        &self.landmarks
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    pub fn route(&self, request: &RoutingRequest) -> Result<Option<RoutingPath>, RoutingError> {
        let algorithm = request.algorithm.unwrap_or(self.config.algorithm);

        let name = format!("route/{algorithm}");
        let stopwatch = Stopwatch::new(&name);
        let path = self
            .computation(algorithm)
            .compute_shortest_path(request.from, request.to);
        stopwatch.report();

        path
    }

    pub fn route_cost(&self, request: &RoutingRequest) -> Result<Option<Cost>, RoutingError> {
        let algorithm = request.algorithm.unwrap_or(self.config.algorithm);
        self.computation(algorithm)
            .compute_shortest_path_cost(request.from, request.to)
    }

    /// Routes between the nodes closest to `start` and `end`.
    pub fn route_between_points(
        &self,
        start: &GeoPoint,
        end: &GeoPoint,
        algorithm: Option<RoutingAlgorithm>,
    ) -> Result<Option<RoutingPath>, RoutingError> {
        let from = self
            .index
            .closest_node(start)
            .ok_or(RoutingError::NoClosestNode)?;
        let to = self
            .index
            .closest_node(end)
            .ok_or(RoutingError::NoClosestNode)?;

        let mut request = RoutingRequest::new(from, to);
        request.algorithm = algorithm;

        self.route(&request)
    }

    pub fn landmark_coordinates(&self) -> Vec<GeoPoint> {
        self.landmarks
            .landmarks()
            .into_iter()
            .filter_map(|node_id| self.graph.node(node_id))
            .map(|node| node.coordinates())
            .collect()
    }

    fn computation(&self, algorithm: RoutingAlgorithm) -> Box<dyn ShortestPathComputation + '_> {
        match algorithm {
            RoutingAlgorithm::Dijkstra => Box::new(Dijkstra::new(&self.graph)),
            RoutingAlgorithm::AStar => Box::new(AStar::new(&self.graph)),
            RoutingAlgorithm::Alt => Box::new(self.landmarks.alt(&self.graph)),
        }
    }
}

fn prepare_landmarks(
    graph: &RoadNetwork,
    config: &RoutingConfig,
) -> Result<LandmarkMetric, RoutingError> {
    let provider: Box<dyn LandmarkProvider + '_> = match config.landmark_strategy {
        LandmarkStrategy::Random => match config.landmark_seed {
            Some(seed) => Box::new(RandomLandmarks::with_seed(graph, seed)),
            None => Box::new(RandomLandmarks::new(graph)),
        },
        LandmarkStrategy::GreedyFarthest => Box::new(GreedyFarthestLandmarks::new(graph)),
    };

    LandmarkMetric::prepare(graph, config.landmark_count, provider.as_ref())
}
