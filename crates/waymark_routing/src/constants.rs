pub(crate) const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Highest speed any road edge may assume, in km/h. Edges with a higher legal
/// speed are clamped so that the crow-flies heuristic stays admissible.
pub const MAX_SPEED_KMH: f64 = 130.0;

pub(crate) const KMH_TO_METERS_PER_SECOND: f64 = 1.0 / 3.6;

pub const GRAPH_FILE_NAME: &str = "graph.bin";
pub const LANDMARKS_FILE_NAME: &str = "landmarks.bin";
