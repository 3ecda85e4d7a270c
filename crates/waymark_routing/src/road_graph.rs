use tracing::info;

use crate::{
    error::GraphError,
    graph::Graph,
    graph_edge::{BasicEdge, GraphEdge},
    id_map::{HasId, IdMap},
    node::{BasicNode, RoadNode},
    road_edge::RoadEdge,
    scc::TarjanScc,
    types::{EdgeId, NodeId},
};

/// Owning directed graph.
///
/// Nodes are stored by id, edges by insertion order: the index of an edge in
/// the edge list is its `EdgeId`. Both the outgoing and the incoming
/// adjacency are kept so that the graph can be walked backward without
/// copying it.
pub struct RoadGraph<N: HasId, E: GraphEdge> {
    nodes: IdMap<NodeId, N>,
    edges: Vec<E>,
    outgoing: IdMap<NodeId, Vec<EdgeId>>,
    incoming: IdMap<NodeId, Vec<EdgeId>>,
}

pub type BasicGraph = RoadGraph<BasicNode, BasicEdge>;
pub type RoadNetwork = RoadGraph<RoadNode, RoadEdge>;

impl<N: HasId, E: GraphEdge> Default for RoadGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: HasId, E: GraphEdge> RoadGraph<N, E> {
    pub fn new() -> Self {
        RoadGraph {
            nodes: IdMap::new(),
            edges: Vec::new(),
            outgoing: IdMap::new(),
            incoming: IdMap::new(),
        }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        RoadGraph {
            nodes: IdMap::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            outgoing: IdMap::with_capacity(nodes),
            incoming: IdMap::with_capacity(nodes),
        }
    }

    /// Adds a node. Returns `false` and keeps the existing node when the id
    /// is already taken.
    pub fn add_node(&mut self, node: N) -> bool {
        let node_id = node.id();
        if self.nodes.contains_key(&node_id) {
            return false;
        }

        self.nodes.insert(&node_id, node);
        true
    }

    /// Adds an edge between two existing nodes and returns its id.
    pub fn add_edge(&mut self, edge: E) -> Result<EdgeId, GraphError> {
        let edge_id = self.edges.len();

        for endpoint in [edge.source(), edge.destination()] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(GraphError::UnknownNode(endpoint));
            }
        }

        let cost = edge.cost();
        if cost.is_nan() || cost < 0.0 {
            return Err(GraphError::InvalidCost {
                edge: edge_id,
                cost,
            });
        }

        self.outgoing
            .get_or_insert_with(&edge.source(), Vec::new)
            .push(edge_id);
        self.incoming
            .get_or_insert_with(&edge.destination(), Vec::new)
            .push(edge_id);
        self.edges.push(edge);

        Ok(edge_id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.values()
    }

    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    pub(crate) fn edge_mut(&mut self, edge_id: EdgeId) -> Option<&mut E> {
        self.edges.get_mut(edge_id)
    }

    /// Rebuilds the graph with the nodes matching `predicate` and the edges
    /// between them. Edge ids are reassigned in their previous order.
    pub fn retain_nodes<P: Fn(&N) -> bool>(self, predicate: P) -> Self {
        let RoadGraph { nodes, edges, .. } = self;

        let mut graph = RoadGraph::new();
        for (_, node) in nodes {
            if predicate(&node) {
                graph.add_node(node);
            }
        }

        for edge in edges {
            if graph.contains_node(edge.source()) && graph.contains_node(edge.destination()) {
                // Both endpoints exist and the cost was validated on insertion.
                let _ = graph.add_edge(edge);
            }
        }

        graph
    }

    /// Keeps only the biggest strongly connected component, so that every
    /// node can reach every other node.
    pub fn reduce_to_largest_scc(self) -> Self {
        let node_count = self.node_count();

        let Some(largest) = TarjanScc::new(self.view()).largest_scc() else {
            return self;
        };

        let keep: IdMap<NodeId, ()> = largest.nodes().iter().map(|&node| (node, ())).collect();
        let graph = self.retain_nodes(|node| keep.contains_key(&node.id()));

        info!(
            "Reduced graph to its largest strongly connected component: {} of {} nodes",
            graph.node_count(),
            node_count
        );

        graph
    }
}

impl RoadNetwork {
    /// Changes the legal speed of an edge and recomputes its cost.
    pub fn set_max_speed(&mut self, edge_id: EdgeId, max_speed: u16) -> Result<(), GraphError> {
        let edge = self
            .edges
            .get(edge_id)
            .ok_or(GraphError::UnknownEdge(edge_id))?;

        let source = *self
            .nodes
            .get(&edge.source())
            .ok_or(GraphError::UnknownNode(edge.source()))?;
        let destination = *self
            .nodes
            .get(&edge.destination())
            .ok_or(GraphError::UnknownNode(edge.destination()))?;

        let edge = self
            .edge_mut(edge_id)
            .ok_or(GraphError::UnknownEdge(edge_id))?;
        edge.set_max_speed(max_speed);
        edge.update_cost(&source, &destination);

        Ok(())
    }

    pub fn size_information(&self) -> String {
        format!(
            "Graph has {} nodes and {} edges",
            self.node_count(),
            self.edge_count()
        )
    }
}

impl<N: HasId, E: GraphEdge> Graph for RoadGraph<N, E> {
    type Node = N;
    type Edge = E;
    type EdgeIterator<'a>
        = std::iter::Copied<std::slice::Iter<'a, EdgeId>>
    where
        Self: 'a;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn node(&self, node_id: NodeId) -> Option<&N> {
        self.nodes.get(&node_id)
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.ids()
    }

    fn edge(&self, edge_id: EdgeId) -> Option<&E> {
        self.edges.get(edge_id)
    }

    fn outgoing_edges(&self, node: NodeId) -> Self::EdgeIterator<'_> {
        adjacent_edges(&self.outgoing, node)
    }

    fn incoming_edges(&self, node: NodeId) -> Self::EdgeIterator<'_> {
        adjacent_edges(&self.incoming, node)
    }
}

fn adjacent_edges(
    adjacency: &IdMap<NodeId, Vec<EdgeId>>,
    node: NodeId,
) -> std::iter::Copied<std::slice::Iter<'_, EdgeId>> {
    adjacency
        .get(&node)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .copied()
}
