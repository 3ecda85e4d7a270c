use waymark_routing::{
    routing::routing_request::RoutingAlgorithm, routing_config::LandmarkStrategy,
};

pub fn parse_algorithm(input: &str) -> Result<RoutingAlgorithm, String> {
    match input.to_ascii_lowercase().as_str() {
        "dijkstra" => Ok(RoutingAlgorithm::Dijkstra),
        "astar" | "a*" => Ok(RoutingAlgorithm::AStar),
        "alt" => Ok(RoutingAlgorithm::Alt),
        _ => Err(format!(
            "Invalid algorithm {input}, expected dijkstra, astar or alt"
        )),
    }
}

pub fn parse_strategy(input: &str) -> Result<LandmarkStrategy, String> {
    match input.to_ascii_lowercase().replace('_', "-").as_str() {
        "random" => Ok(LandmarkStrategy::Random),
        "greedy-farthest" | "greedy" => Ok(LandmarkStrategy::GreedyFarthest),
        _ => Err(format!(
            "Invalid landmark strategy {input}, expected random or greedy-farthest"
        )),
    }
}
