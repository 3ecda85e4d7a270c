use std::path::PathBuf;

use clap::Subcommand;
use tracing::info;
use waymark_routing::{
    constants::GRAPH_FILE_NAME, generators::road_grid, geopoint::GeoPoint,
};

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Grid of two way streets
    Grid {
        #[arg(long, default_value_t = 50)]
        rows: usize,

        #[arg(long, default_value_t = 50)]
        cols: usize,

        /// Distance between neighbouring nodes, in degrees
        #[arg(long, default_value_t = 0.005)]
        spacing: f64,

        #[arg(long, default_value_t = 50.8503)]
        lat: f64,

        #[arg(long, default_value_t = 4.3517)]
        lng: f64,

        /// Output folder for graph.bin
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::Grid {
            rows,
            cols,
            spacing,
            lat,
            lng,
            out,
        } => {
            let graph = road_grid(rows, cols, GeoPoint::new(lat, lng), spacing);

            std::fs::create_dir_all(&out)?;
            let path = out.join(GRAPH_FILE_NAME);
            graph.save_to_file(&path)?;

            info!("Wrote {} to {}", graph.size_information(), path.display());
        }
    }

    Ok(())
}
