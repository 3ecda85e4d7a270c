use std::path::PathBuf;

use clap::Args;
use waymark_routing::{
    constants::{GRAPH_FILE_NAME, LANDMARKS_FILE_NAME},
    landmarks::landmark_metric::LandmarkMetric,
    road_graph::RoadNetwork,
};

#[derive(Args)]
pub struct InfoArgs {
    #[arg(long, env = "WAYMARK_GRAPH_DIR")]
    graph_dir: PathBuf,
}

pub fn run(args: InfoArgs) -> Result<(), anyhow::Error> {
    let graph = RoadNetwork::from_file(&args.graph_dir.join(GRAPH_FILE_NAME))?;
    println!("{}", graph.size_information());

    let landmarks_file = args.graph_dir.join(LANDMARKS_FILE_NAME);
    if landmarks_file.exists() {
        let landmarks = LandmarkMetric::from_file(&landmarks_file, &graph)?;
        println!(
            "{} landmarks: {:?}",
            landmarks.num_landmarks(),
            landmarks.landmarks()
        );
    } else {
        println!("No landmarks prepared");
    }

    Ok(())
}
