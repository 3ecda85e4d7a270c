pub mod constants;
pub mod direction;
pub mod error;
pub mod generators;
pub mod geopoint;
pub mod graph;
pub mod graph_edge;
pub mod graph_snapshot;
pub mod graph_view;
pub mod highway_type;
pub mod id_map;
pub mod landmarks;
pub mod location_index;
pub mod node;
pub mod road_edge;
pub mod road_graph;
pub mod routing;
pub mod routing_config;
pub mod scc;
pub mod stopwatch;
pub(crate) mod storage;
pub mod types;
pub mod waymark;

#[cfg(test)]
pub(crate) mod test_graph_utils;
