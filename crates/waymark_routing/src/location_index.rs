use rstar::{RStarInsertionStrategy, RTree, RTreeParams, primitives::GeomWithData};
use tracing::info;

use crate::{
    geopoint::GeoPoint, graph::Graph, id_map::HasId, node::Spatial, stopwatch::Stopwatch,
    types::NodeId,
};

type LocationIndexObject = GeomWithData<[f64; 2], NodeId>;

struct LocationIndexTreeParams;

impl RTreeParams for LocationIndexTreeParams {
    type DefaultInsertionStrategy = RStarInsertionStrategy;

    const MAX_SIZE: usize = 64;
    const MIN_SIZE: usize = 28;
    const REINSERTION_COUNT: usize = 5;
}

/// Spatial index over the node positions of a graph.
///
/// Distances are planar in `[lng, lat]` space, which is good enough to pick
/// the closest node in a road network.
pub struct LocationIndex {
    tree: RTree<LocationIndexObject, LocationIndexTreeParams>,
}

impl LocationIndex {
    pub fn build_from_graph<G>(graph: &G) -> LocationIndex
    where
        G: Graph,
        G::Node: Spatial,
    {
        let stopwatch = Stopwatch::new("location_index/build");

        let objects: Vec<LocationIndexObject> = graph
            .node_ids()
            .filter_map(|node_id| graph.node(node_id))
            .map(|node| LocationIndexObject::new(node.coordinates().to_lng_lat(), node.id()))
            .collect();
        let size = objects.len();

        let tree = RTree::bulk_load_with_params(objects);

        info!("Built location index over {} nodes", size);
        stopwatch.report();

        LocationIndex { tree }
    }

    pub fn closest_node(&self, coordinates: &GeoPoint) -> Option<NodeId> {
        self.tree
            .nearest_neighbor(&coordinates.to_lng_lat())
            .map(|nearest| nearest.data)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
