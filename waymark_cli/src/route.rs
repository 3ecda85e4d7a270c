use std::path::PathBuf;

use clap::Args;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use tracing::info;
use waymark_routing::{
    graph::Graph,
    node::Spatial,
    routing::{
        routing_path::RoutingPath,
        routing_request::{RoutingAlgorithm, RoutingRequest},
    },
    routing_config::RoutingConfig,
    waymark::Waymark,
};

use crate::parsers;

#[derive(Args)]
pub struct RouteArgs {
    #[arg(long, env = "WAYMARK_GRAPH_DIR")]
    graph_dir: PathBuf,

    #[arg(long)]
    from: usize,

    #[arg(long)]
    to: usize,

    #[arg(long, value_parser = parsers::parse_algorithm)]
    algorithm: Option<RoutingAlgorithm>,

    /// Writes the route and the landmarks as a GeoJSON FeatureCollection
    #[arg(long)]
    geojson: Option<PathBuf>,
}

pub fn run(args: RouteArgs, config: RoutingConfig) -> Result<(), anyhow::Error> {
    let waymark = Waymark::from_directory(&args.graph_dir, config)?;

    let mut request = RoutingRequest::new(args.from, args.to);
    request.algorithm = args.algorithm;

    let Some(path) = waymark.route(&request)? else {
        println!("No path from {} to {}", args.from, args.to);
        return Ok(());
    };

    println!(
        "Cost {:.1}s over {} edges from {} to {}",
        path.cost(),
        path.len(),
        path.source(),
        path.destination()
    );

    if let Some(out) = args.geojson {
        let geojson = route_geojson(&waymark, &path);
        std::fs::write(&out, geojson.to_string())?;
        info!("Wrote route to {}", out.display());
    }

    Ok(())
}

fn route_geojson(waymark: &Waymark, path: &RoutingPath) -> GeoJson {
    let line: Vec<Vec<f64>> = path
        .node_ids()
        .filter_map(|node_id| waymark.graph().node(node_id))
        .map(|node| node.coordinates().to_lng_lat().to_vec())
        .collect();

    let mut route_properties = JsonObject::new();
    route_properties.insert("cost".to_string(), path.cost().into());
    route_properties.insert("edges".to_string(), path.len().into());

    let mut features = vec![feature(Value::LineString(line), route_properties)];

    for (node_id, coordinates) in waymark
        .landmarks()
        .landmarks()
        .into_iter()
        .zip(waymark.landmark_coordinates())
    {
        let mut properties = JsonObject::new();
        properties.insert("landmark".to_string(), node_id.into());
        features.push(feature(
            Value::Point(coordinates.to_lng_lat().to_vec()),
            properties,
        ));
    }

    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        foreign_members: None,
        features,
    })
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        id: None,
        properties: Some(properties),
        foreign_members: None,
        geometry: Some(Geometry::new(value)),
    }
}
