use rand::{SeedableRng, rngs::StdRng, seq::IteratorRandom};
use tracing::debug;

use crate::{graph::Graph, types::NodeId};

use super::landmark_provider::LandmarkProvider;

/// Picks landmarks uniformly at random.
pub struct RandomLandmarks<'a, G: Graph> {
    graph: &'a G,
    seed: Option<u64>,
}

impl<'a, G: Graph> RandomLandmarks<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        RandomLandmarks { graph, seed: None }
    }

    /// Same graph and seed, same landmarks.
    pub fn with_seed(graph: &'a G, seed: u64) -> Self {
        RandomLandmarks {
            graph,
            seed: Some(seed),
        }
    }
}

impl<G: Graph> LandmarkProvider for RandomLandmarks<'_, G> {
    fn landmarks(&self, amount: usize) -> Vec<NodeId> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut landmarks = self.graph.node_ids().choose_multiple(&mut rng, amount);
        landmarks.sort_unstable();

        debug!("Picked {} random landmarks", landmarks.len());
        landmarks
    }
}
