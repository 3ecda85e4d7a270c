use crate::{
    direction::Direction,
    graph::Graph,
    graph_edge::GraphEdge,
    types::{Cost, EdgeId, NodeId},
};

/// A graph seen in one orientation.
///
/// The view borrows the topology immutably. Walking backward follows the
/// stored incoming edges and swaps their endpoints, so a search written
/// against a view never needs to know which way it is going.
pub struct GraphView<'a, G> {
    graph: &'a G,
    direction: Direction,
}

impl<G> Clone for GraphView<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for GraphView<'_, G> {}

impl<'a, G: Graph> GraphView<'a, G> {
    pub fn new(graph: &'a G, direction: Direction) -> Self {
        GraphView { graph, direction }
    }

    pub fn forward(graph: &'a G) -> Self {
        Self::new(graph, Direction::Forward)
    }

    pub fn backward(graph: &'a G) -> Self {
        Self::new(graph, Direction::Backward)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.graph, self.direction.opposite())
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn graph(&self) -> &'a G {
        self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }

    /// Edges leaving `node` in this orientation.
    #[inline(always)]
    pub fn outgoing_edges(&self, node: NodeId) -> G::EdgeIterator<'a> {
        match self.direction {
            Direction::Forward => self.graph.outgoing_edges(node),
            Direction::Backward => self.graph.incoming_edges(node),
        }
    }

    pub fn edge(&self, edge_id: EdgeId) -> Option<&'a G::Edge> {
        self.graph.edge(edge_id)
    }

    #[inline(always)]
    pub fn source(&self, edge: &G::Edge) -> NodeId {
        match self.direction {
            Direction::Forward => edge.source(),
            Direction::Backward => edge.destination(),
        }
    }

    #[inline(always)]
    pub fn destination(&self, edge: &G::Edge) -> NodeId {
        match self.direction {
            Direction::Forward => edge.destination(),
            Direction::Backward => edge.source(),
        }
    }

    #[inline(always)]
    pub fn cost(&self, edge: &G::Edge) -> Cost {
        edge.cost()
    }
}
