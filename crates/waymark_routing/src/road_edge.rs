use crate::{
    constants::{KMH_TO_METERS_PER_SECOND, MAX_SPEED_KMH},
    graph_edge::GraphEdge,
    highway_type::HighwayType,
    id_map::HasId,
    node::Spatial,
    types::{Cost, NodeId},
};

/// A directed road segment between two road nodes.
///
/// The cost is the travel time in seconds, derived from the haversine length
/// of the segment and the speed that applies to it.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadEdge {
    id: u64,
    source: NodeId,
    destination: NodeId,
    highway_type: HighwayType,
    // km/h, 0 when the way has no legal speed
    max_speed: u16,
    cost: Cost,
}

impl RoadEdge {
    pub fn new<N: HasId + Spatial>(
        id: u64,
        source: &N,
        destination: &N,
        highway_type: HighwayType,
        max_speed: u16,
    ) -> Self {
        let mut edge = RoadEdge {
            id,
            source: source.id(),
            destination: destination.id(),
            highway_type,
            max_speed,
            cost: 0.0,
        };
        edge.update_cost(source, destination);
        edge
    }

    /// Id of the way this segment belongs to.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn highway_type(&self) -> HighwayType {
        self.highway_type
    }

    pub fn max_speed(&self) -> u16 {
        self.max_speed
    }

    pub(crate) fn set_max_speed(&mut self, max_speed: u16) {
        self.max_speed = max_speed;
    }

    /// Speed in km/h used to derive the cost, clamped to `MAX_SPEED_KMH`.
    pub fn effective_speed(&self) -> f64 {
        let speed = if self.max_speed > 0 {
            self.max_speed
        } else {
            self.highway_type.default_speed()
        };

        f64::from(speed).min(MAX_SPEED_KMH)
    }

    pub fn update_cost<N: Spatial>(&mut self, source: &N, destination: &N) {
        let distance = source
            .coordinates()
            .haversine_distance(&destination.coordinates());
        let speed_meters_per_second = self.effective_speed() * KMH_TO_METERS_PER_SECOND;

        self.cost = distance / speed_meters_per_second;
    }
}

impl GraphEdge for RoadEdge {
    #[inline(always)]
    fn source(&self) -> NodeId {
        self.source
    }

    #[inline(always)]
    fn destination(&self) -> NodeId {
        self.destination
    }

    #[inline(always)]
    fn cost(&self) -> Cost {
        self.cost
    }
}
