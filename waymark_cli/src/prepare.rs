use std::path::PathBuf;

use clap::Args;
use tracing::info;
use waymark_routing::{
    constants::GRAPH_FILE_NAME,
    road_graph::RoadNetwork,
    routing_config::{LandmarkStrategy, RoutingConfig},
    waymark::Waymark,
};

use crate::parsers;

#[derive(Args)]
pub struct PrepareArgs {
    #[arg(long, env = "WAYMARK_GRAPH_DIR")]
    graph_dir: PathBuf,

    /// Number of landmarks to compute
    #[arg(long)]
    landmarks: Option<usize>,

    #[arg(long, value_parser = parsers::parse_strategy)]
    strategy: Option<LandmarkStrategy>,

    /// Seed for the random strategy
    #[arg(long)]
    seed: Option<u64>,

    /// Drop every node outside the largest strongly connected component
    #[arg(long)]
    largest_scc: bool,
}

pub fn run(args: PrepareArgs, mut config: RoutingConfig) -> Result<(), anyhow::Error> {
    if let Some(landmarks) = args.landmarks {
        config.landmark_count = landmarks;
    }
    if let Some(strategy) = args.strategy {
        config.landmark_strategy = strategy;
    }
    if args.seed.is_some() {
        config.landmark_seed = args.seed;
    }
    config.reduce_to_largest_scc |= args.largest_scc;

    let graph = RoadNetwork::from_file(&args.graph_dir.join(GRAPH_FILE_NAME))?;
    info!("{}", graph.size_information());

    let waymark = Waymark::from_graph(graph, config)?;
    waymark.save(&args.graph_dir)?;

    info!(
        "Prepared {} landmarks in {}",
        waymark.landmarks().num_landmarks(),
        args.graph_dir.display()
    );

    Ok(())
}
