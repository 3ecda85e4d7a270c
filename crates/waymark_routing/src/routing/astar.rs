use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::debug;

use crate::{
    error::RoutingError,
    graph::Graph,
    graph_view::GraphView,
    id_map::IdMap,
    node::Spatial,
    stopwatch::Stopwatch,
    types::{Cost, NodeId},
};

use super::{
    astar_heuristic::{AStarHeuristic, CrowFliesHeuristic},
    reachable_costs::{NodeCost, Predecessor, ReachableCosts, trace_path},
    routing_path::RoutingPath,
    shortest_path_computation::{SearchSource, ShortestPathComputation},
};

/// https://en.wikipedia.org/wiki/A*_search_algorithm

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,

    /// g_score is the current cheapest cost from the sources to node "node_id"
    g_score: Cost,

    /// f_score = g_score + h_score, with h_score being the heuristic value from node_id to the destination
    f_score: Cost,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip costs to make this a min-heap, equal entries pop in ascending node order
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.g_score.total_cmp(&self.g_score))
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

struct NodeData {
    settled: bool,
    node_cost: NodeCost,
}

/// Per query bookkeeping. Never shared between queries.
struct SearchState {
    heap: BinaryHeap<HeapItem>,
    data: IdMap<NodeId, NodeData>,
    search_space: Option<Vec<NodeId>>,
}

impl SearchState {
    fn new(track_search_space: bool) -> Self {
        SearchState {
            heap: BinaryHeap::with_capacity(1024),
            data: IdMap::new(),
            search_space: track_search_space.then(Vec::new),
        }
    }

    #[inline(always)]
    fn is_settled(&self, node: NodeId) -> bool {
        self.data.get(&node).is_some_and(|data| data.settled)
    }

    #[inline(always)]
    fn current_cost(&self, node: NodeId) -> Option<Cost> {
        self.data.get(&node).map(|data| data.node_cost.cost)
    }

    fn update_node_data(&mut self, node: NodeId, cost: Cost, predecessor: Option<Predecessor>) {
        self.data.insert(
            &node,
            NodeData {
                settled: false,
                node_cost: NodeCost { cost, predecessor },
            },
        );
    }

    fn set_settled(&mut self, node: NodeId) {
        if let Some(data) = self.data.get_mut(&node) {
            data.settled = true;
        }
        if let Some(search_space) = self.search_space.as_mut() {
            search_space.push(node);
        }
    }

    fn settled_cost(&self, node: NodeId) -> Option<Cost> {
        self.data
            .get(&node)
            .filter(|data| data.settled)
            .map(|data| data.node_cost.cost)
    }

    fn build_path(&self, destination: NodeId) -> Option<RoutingPath> {
        if !self.is_settled(destination) {
            return None;
        }
        trace_path(destination, |node| {
            self.data.get(&node).map(|data| &data.node_cost)
        })
    }

    fn into_reachable_costs(self) -> ReachableCosts {
        ReachableCosts::new(
            self.data
                .into_iter()
                .filter(|(_, data)| data.settled)
                .map(|(node, data)| (node, data.node_cost))
                .collect(),
        )
    }
}

/// A* over a graph view.
///
/// The search keeps a fresh state per query, so a single instance can answer
/// queries from several threads at once.
pub struct AStar<'a, G: Graph, H: AStarHeuristic> {
    view: GraphView<'a, G>,
    heuristic: H,
}

impl<'a, G: Graph, H: AStarHeuristic> AStar<'a, G, H> {
    pub fn with_heuristic(graph: &'a G, heuristic: H) -> Self {
        Self::on_view(GraphView::forward(graph), heuristic)
    }

    /// Searches in the orientation of `view`. The heuristic has to estimate
    /// costs in that same orientation.
    pub fn on_view(view: GraphView<'a, G>, heuristic: H) -> Self {
        AStar { view, heuristic }
    }

    pub fn view(&self) -> GraphView<'a, G> {
        self.view
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    fn validate(
        &self,
        sources: &[SearchSource],
        destination: Option<NodeId>,
    ) -> Result<(), RoutingError> {
        if sources.is_empty() {
            return Err(RoutingError::NoSources);
        }

        for source in sources {
            if !self.view.contains_node(source.node) {
                return Err(RoutingError::UnknownNode(source.node));
            }
            if source.offset.is_nan() || source.offset < 0.0 {
                return Err(RoutingError::InvalidOffset {
                    node: source.node,
                    offset: source.offset,
                });
            }
        }

        match destination {
            Some(destination) if !self.view.contains_node(destination) => {
                Err(RoutingError::UnknownNode(destination))
            }
            _ => Ok(()),
        }
    }

    #[inline(always)]
    fn estimate(&self, node: NodeId, destination: Option<NodeId>) -> Cost {
        destination.map_or(0.0, |destination| {
            self.heuristic.estimate(node, destination)
        })
    }

    /// Settles nodes until `destination` is settled, or until every reachable
    /// node is settled when there is no destination.
    fn run(
        &self,
        sources: &[SearchSource],
        destination: Option<NodeId>,
        track_search_space: bool,
    ) -> Result<SearchState, RoutingError> {
        self.validate(sources, destination)?;

        let stopwatch = Stopwatch::new("astar/run");
        let mut state = SearchState::new(track_search_space);

        for source in sources {
            // The cheapest offset wins when a node is given more than once
            if state
                .current_cost(source.node)
                .is_some_and(|cost| cost <= source.offset)
            {
                continue;
            }

            state.update_node_data(source.node, source.offset, None);
            state.heap.push(HeapItem {
                node_id: source.node,
                g_score: source.offset,
                f_score: source.offset + self.estimate(source.node, destination),
            });
        }

        let mut settled_nodes = 0;

        while let Some(HeapItem {
            node_id, g_score, ..
        }) = state.heap.pop()
        {
            // Node is already settled, skip
            if state.is_settled(node_id) {
                continue;
            }

            // Stale entry, the node was reached more cheaply since
            if state
                .current_cost(node_id)
                .is_some_and(|cost| g_score > cost)
            {
                continue;
            }

            state.set_settled(node_id);
            settled_nodes += 1;

            if destination == Some(node_id) {
                break;
            }

            for edge_id in self.view.outgoing_edges(node_id) {
                let Some(edge) = self.view.edge(edge_id) else {
                    continue;
                };

                let adj_node = self.view.destination(edge);
                if state.is_settled(adj_node) {
                    continue;
                }

                let edge_cost = self.view.cost(edge);
                let next_cost = g_score + edge_cost;

                if state
                    .current_cost(adj_node)
                    .is_none_or(|cost| next_cost < cost)
                {
                    state.update_node_data(
                        adj_node,
                        next_cost,
                        Some(Predecessor {
                            node: node_id,
                            edge_id,
                            edge_cost,
                        }),
                    );
                    state.heap.push(HeapItem {
                        node_id: adj_node,
                        g_score: next_cost,
                        f_score: next_cost + self.estimate(adj_node, destination),
                    });
                }
            }
        }

        debug!("AStar settled nodes: {}", settled_nodes);
        stopwatch.report();

        Ok(state)
    }
}

impl<G: Graph, H: AStarHeuristic> ShortestPathComputation for AStar<'_, G, H> {
    fn compute_shortest_path_from(
        &self,
        sources: &[SearchSource],
        destination: NodeId,
    ) -> Result<Option<RoutingPath>, RoutingError> {
        let state = self.run(sources, Some(destination), false)?;
        Ok(state.build_path(destination))
    }

    fn compute_shortest_path_cost_from(
        &self,
        sources: &[SearchSource],
        destination: NodeId,
    ) -> Result<Option<Cost>, RoutingError> {
        let state = self.run(sources, Some(destination), false)?;
        Ok(state.settled_cost(destination))
    }

    fn compute_search_space_from(
        &self,
        sources: &[SearchSource],
        destination: NodeId,
    ) -> Result<Vec<NodeId>, RoutingError> {
        let state = self.run(sources, Some(destination), true)?;
        Ok(state.search_space.unwrap_or_default())
    }

    fn compute_shortest_path_costs_reachable_from(
        &self,
        sources: &[SearchSource],
    ) -> Result<ReachableCosts, RoutingError> {
        let state = self.run(sources, None, false)?;
        Ok(state.into_reachable_costs())
    }
}

impl<'a, G> AStar<'a, G, CrowFliesHeuristic<'a, G>>
where
    G: Graph,
    G::Node: Spatial,
{
    pub fn new(graph: &'a G) -> Self {
        Self::with_heuristic(graph, CrowFliesHeuristic::new(graph))
    }
}
