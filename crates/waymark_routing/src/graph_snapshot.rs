use std::path::Path;

use tracing::info;

use crate::{
    error::{GraphError, StorageError},
    graph::Graph,
    graph_edge::GraphEdge,
    highway_type::HighwayType,
    id_map::HasId,
    node::RoadNode,
    road_edge::RoadEdge,
    road_graph::{RoadGraph, RoadNetwork},
    storage::{read_bytes, write_bytes},
    types::NodeId,
};

#[derive(Debug, PartialEq, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct NodeRecord {
    pub id: usize,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, PartialEq, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct EdgeRecord {
    pub way_id: u64,
    pub source: usize,
    pub destination: usize,
    pub highway_type: HighwayType,
    pub max_speed: u16,
}

/// Serialized form of a road graph.
///
/// Costs are not stored; they are derived again from the coordinates and
/// speeds when the graph is restored.
#[derive(Debug, Default, PartialEq, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl RoadNetwork {
    pub fn to_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self
                .nodes()
                .map(|node| NodeRecord {
                    id: node.id(),
                    lat: node.lat(),
                    lng: node.lng(),
                })
                .collect(),
            edges: self
                .edges()
                .iter()
                .map(|edge| EdgeRecord {
                    way_id: edge.id(),
                    source: edge.source(),
                    destination: edge.destination(),
                    highway_type: edge.highway_type(),
                    max_speed: edge.max_speed(),
                })
                .collect(),
        }
    }

    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Result<Self, GraphError> {
        let mut graph = RoadGraph::with_capacity(snapshot.nodes.len(), snapshot.edges.len());

        for record in &snapshot.nodes {
            graph.add_node(RoadNode::new(record.id, record.lat, record.lng));
        }

        for record in &snapshot.edges {
            let source = endpoint(&graph, record.source)?;
            let destination = endpoint(&graph, record.destination)?;

            graph.add_edge(RoadEdge::new(
                record.way_id,
                &source,
                &destination,
                record.highway_type,
                record.max_speed,
            ))?;
        }

        Ok(graph)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), StorageError> {
        let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(&self.to_snapshot())?;
        write_bytes(&bytes[..], path)?;

        info!(
            "Saved graph to {}, size {}",
            path.display(),
            bytes.len()
        );

        Ok(())
    }

    pub fn from_file(path: &Path) -> Result<Self, StorageError> {
        info!("Reading graph from {}", path.display());
        let bytes = read_bytes(path)?;
        info!("Read graph from {}, size {}", path.display(), bytes.len());

        let snapshot = rkyv::from_bytes::<GraphSnapshot, rkyv::rancor::Error>(&bytes)?;
        let graph = Self::from_snapshot(&snapshot)?;

        info!("{}", graph.size_information());
        Ok(graph)
    }
}

fn endpoint(graph: &RoadNetwork, node_id: NodeId) -> Result<RoadNode, GraphError> {
    graph
        .node(node_id)
        .copied()
        .ok_or(GraphError::UnknownNode(node_id))
}

#[cfg(test)]
mod tests {
    use std::env;

    use crate::{generators::road_grid, geopoint::GeoPoint};

    use super::*;

    #[test]
    fn snapshot_restores_the_same_graph() {
        let graph = road_grid(3, 4, GeoPoint::new(50.0, 4.0), 0.01);
        let restored = RoadNetwork::from_snapshot(&graph.to_snapshot()).unwrap();

        assert_eq!(restored.node_count(), graph.node_count());
        assert_eq!(restored.edge_count(), graph.edge_count());
        for (original, copy) in graph.edges().iter().zip(restored.edges()) {
            assert_eq!(original, copy);
        }
    }

    #[test]
    fn snapshot_with_dangling_edge_is_rejected() {
        let snapshot = GraphSnapshot {
            nodes: vec![NodeRecord {
                id: 0,
                lat: 50.0,
                lng: 4.0,
            }],
            edges: vec![EdgeRecord {
                way_id: 1,
                source: 0,
                destination: 5,
                highway_type: HighwayType::Primary,
                max_speed: 0,
            }],
        };

        assert!(matches!(
            RoadNetwork::from_snapshot(&snapshot),
            Err(GraphError::UnknownNode(5))
        ));
    }

    #[test]
    fn save_and_load_from_file() {
        let path = env::temp_dir().join(format!("waymark-graph-{}.bin", std::process::id()));
        let graph = road_grid(2, 2, GeoPoint::new(50.0, 4.0), 0.01);

        graph.save_to_file(&path).unwrap();
        let loaded = RoadNetwork::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.node_count(), 4);
        assert_eq!(loaded.edge_count(), graph.edge_count());
    }

    #[test]
    fn loading_a_missing_file_fails() {
        let path = env::temp_dir().join("waymark-does-not-exist.bin");
        assert!(matches!(
            RoadNetwork::from_file(&path),
            Err(StorageError::Io(_))
        ));
    }
}
