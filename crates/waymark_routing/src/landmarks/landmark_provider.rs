use crate::types::NodeId;

/// Strategy picking the nodes used as landmarks.
///
/// Implementations return at most `amount` distinct nodes, and never more
/// than the graph has.
pub trait LandmarkProvider {
    fn landmarks(&self, amount: usize) -> Vec<NodeId>;
}
