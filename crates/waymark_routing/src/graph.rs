use crate::{
    direction::Direction,
    graph_edge::GraphEdge,
    graph_view::GraphView,
    id_map::HasId,
    types::{EdgeId, NodeId},
};

/// Read access to a directed graph in its stored orientation.
///
/// Searches never use this trait directly for adjacency; they go through a
/// [`GraphView`], which decides whether outgoing or incoming edges are
/// followed.
pub trait Graph {
    type Node: HasId;
    type Edge: GraphEdge;
    type EdgeIterator<'a>: Iterator<Item = EdgeId>
    where
        Self: 'a;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn node(&self, node_id: NodeId) -> Option<&Self::Node>;

    fn contains_node(&self, node_id: NodeId) -> bool {
        self.node(node_id).is_some()
    }

    /// All node ids, in ascending order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_;

    fn edge(&self, edge_id: EdgeId) -> Option<&Self::Edge>;

    /// Edges whose stored source is `node`.
    fn outgoing_edges(&self, node: NodeId) -> Self::EdgeIterator<'_>;

    /// Edges whose stored destination is `node`.
    fn incoming_edges(&self, node: NodeId) -> Self::EdgeIterator<'_>;

    fn view(&self) -> GraphView<'_, Self>
    where
        Self: Sized,
    {
        GraphView::new(self, Direction::Forward)
    }

    fn reversed(&self) -> GraphView<'_, Self>
    where
        Self: Sized,
    {
        GraphView::new(self, Direction::Backward)
    }
}
