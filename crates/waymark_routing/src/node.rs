use std::hash::{Hash, Hasher};

use crate::{geopoint::GeoPoint, id_map::HasId, types::NodeId};

/// Nodes that have a position on the globe.
pub trait Spatial {
    fn coordinates(&self) -> GeoPoint;
}

/// A node with an identity and nothing else.
#[derive(Clone, Copy, Debug)]
pub struct BasicNode {
    id: NodeId,
}

impl BasicNode {
    pub fn new(id: NodeId) -> Self {
        BasicNode { id }
    }
}

impl HasId for BasicNode {
    #[inline(always)]
    fn id(&self) -> usize {
        self.id
    }
}

impl PartialEq for BasicNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BasicNode {}

impl Hash for BasicNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RoadNode {
    id: NodeId,
    coordinates: GeoPoint,
}

impl RoadNode {
    pub fn new(id: NodeId, lat: f64, lng: f64) -> Self {
        RoadNode {
            id,
            coordinates: GeoPoint::new(lat, lng),
        }
    }

    pub fn lat(&self) -> f64 {
        self.coordinates.lat
    }

    pub fn lng(&self) -> f64 {
        self.coordinates.lng
    }
}

impl HasId for RoadNode {
    #[inline(always)]
    fn id(&self) -> usize {
        self.id
    }
}

impl Spatial for RoadNode {
    #[inline(always)]
    fn coordinates(&self) -> GeoPoint {
        self.coordinates
    }
}

// Identity only, coordinates do not take part in equality.
impl PartialEq for RoadNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RoadNode {}

impl Hash for RoadNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
