use serde::{Deserialize, Serialize};

use crate::routing::routing_request::RoutingAlgorithm;

/// How landmarks are picked during preparation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkStrategy {
    Random,
    #[default]
    GreedyFarthest,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub landmark_count: usize,
    pub landmark_strategy: LandmarkStrategy,
    /// Seed for the random strategy. A random seed is used when absent.
    pub landmark_seed: Option<u64>,
    /// Used when a request does not name an algorithm.
    pub algorithm: RoutingAlgorithm,
    pub reduce_to_largest_scc: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        RoutingConfig {
            landmark_count: 16,
            landmark_strategy: LandmarkStrategy::default(),
            landmark_seed: None,
            algorithm: RoutingAlgorithm::default(),
            reduce_to_largest_scc: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: RoutingConfig = serde_json::from_str(r#"{ "landmark_count": 4 }"#).unwrap();

        assert_eq!(config.landmark_count, 4);
        assert_eq!(config.landmark_strategy, LandmarkStrategy::GreedyFarthest);
        assert_eq!(config.algorithm, RoutingAlgorithm::Alt);
        assert_eq!(config.landmark_seed, None);
        assert!(!config.reduce_to_largest_scc);
    }

    #[test]
    fn parses_every_field() {
        let json = r#"{
            "landmark_count": 8,
            "landmark_strategy": "random",
            "landmark_seed": 42,
            "algorithm": "astar",
            "reduce_to_largest_scc": true
        }"#;
        let config: RoutingConfig = serde_json::from_str(json).unwrap();

        assert_eq!(
            config,
            RoutingConfig {
                landmark_count: 8,
                landmark_strategy: LandmarkStrategy::Random,
                landmark_seed: Some(42),
                algorithm: RoutingAlgorithm::AStar,
                reduce_to_largest_scc: true,
            }
        );
    }

    #[test]
    fn rejects_unknown_algorithms() {
        let result = serde_json::from_str::<RoutingConfig>(r#"{ "algorithm": "bfs" }"#);
        assert!(result.is_err());
    }
}
