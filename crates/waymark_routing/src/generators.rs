use tracing::info;

use crate::{
    geopoint::GeoPoint, highway_type::HighwayType, node::RoadNode, road_edge::RoadEdge,
    road_graph::RoadNetwork, types::NodeId,
};

// Every fourth row and column is a faster road
const ARTERIAL_INTERVAL: usize = 4;

/// Builds a `rows` x `cols` grid of road nodes starting at `origin`, with
/// neighbours `spacing` degrees apart. Every street is usable in both
/// directions.
///
/// The node at `(row, col)` has id `row * cols + col`.
pub fn road_grid(rows: usize, cols: usize, origin: GeoPoint, spacing: f64) -> RoadNetwork {
    let edge_count = 2 * (rows * cols.saturating_sub(1) + cols * rows.saturating_sub(1));
    let mut graph = RoadNetwork::with_capacity(rows * cols, edge_count);

    let node_id = |row: usize, col: usize| -> NodeId { row * cols + col };

    let mut nodes = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let node = RoadNode::new(
                node_id(row, col),
                origin.lat + row as f64 * spacing,
                origin.lng + col as f64 * spacing,
            );
            graph.add_node(node);
            nodes.push(node);
        }
    }

    let mut way_id = 0u64;
    let mut connect = |graph: &mut RoadNetwork, first: NodeId, second: NodeId, highway| {
        for (source, destination) in [(first, second), (second, first)] {
            let edge = RoadEdge::new(way_id, &nodes[source], &nodes[destination], highway, 0);
            // Both endpoints were added above and the cost is a finite travel time
            let _ = graph.add_edge(edge);
        }
        way_id += 1;
    };

    for row in 0..rows {
        for col in 0..cols {
            if col + 1 < cols {
                connect(
                    &mut graph,
                    node_id(row, col),
                    node_id(row, col + 1),
                    street_type(row),
                );
            }
            if row + 1 < rows {
                connect(
                    &mut graph,
                    node_id(row, col),
                    node_id(row + 1, col),
                    street_type(col),
                );
            }
        }
    }

    info!("Generated {}x{} grid. {}", rows, cols, graph.size_information());

    graph
}

fn street_type(line: usize) -> HighwayType {
    if line % ARTERIAL_INTERVAL == 0 {
        HighwayType::Primary
    } else {
        HighwayType::Residential
    }
}
