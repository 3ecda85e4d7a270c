use fxhash::FxHashSet;
use tracing::{debug, info};

use crate::{
    graph::Graph,
    graph_view::GraphView,
    id_map::IdMap,
    stopwatch::Stopwatch,
    types::NodeId,
};

/// A set of nodes in which every node can reach every other node.
#[derive(Clone, Debug, Default)]
pub struct StronglyConnectedComponent {
    nodes: FxHashSet<NodeId>,
    root_node: Option<NodeId>,
}

impl StronglyConnectedComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the node was already part of the component.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        self.nodes.insert(node)
    }

    pub fn nodes(&self) -> &FxHashSet<NodeId> {
        &self.nodes
    }

    /// The node through which the component was discovered.
    pub fn root_node(&self) -> Option<NodeId> {
        self.root_node
    }

    pub fn set_root_node(&mut self, node: NodeId) {
        self.root_node = Some(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

struct TarjanData {
    index: usize,
    lowlink: usize,
    on_stack: bool,
}

/// Tarjan's algorithm, without recursion so that long chains of nodes do not
/// overflow the stack.
pub struct TarjanScc<'a, G: Graph> {
    view: GraphView<'a, G>,
}

impl<'a, G: Graph> TarjanScc<'a, G> {
    pub fn new(view: GraphView<'a, G>) -> Self {
        TarjanScc { view }
    }

    pub fn compute(&self) -> Vec<StronglyConnectedComponent> {
        let stopwatch = Stopwatch::new("scc/compute");

        let mut data: IdMap<NodeId, TarjanData> = IdMap::with_capacity(self.view.node_count());
        let mut stack: Vec<NodeId> = Vec::new();
        let mut call_stack: Vec<(NodeId, G::EdgeIterator<'a>)> = Vec::new();
        let mut components = Vec::new();
        let mut next_index = 0;

        for start in self.view.graph().node_ids() {
            if data.contains_key(&start) {
                continue;
            }

            self.visit(start, &mut next_index, &mut data, &mut stack, &mut call_stack);

            while let Some((node, next_edge)) = call_stack
                .last_mut()
                .map(|(node, edges)| (*node, edges.next()))
            {
                if let Some(edge_id) = next_edge {
                    let Some(edge) = self.view.edge(edge_id) else {
                        continue;
                    };
                    let adj_node = self.view.destination(edge);

                    let adj_state = data.get(&adj_node).map(|adj| (adj.index, adj.on_stack));
                    match adj_state {
                        None => self.visit(
                            adj_node,
                            &mut next_index,
                            &mut data,
                            &mut stack,
                            &mut call_stack,
                        ),
                        Some((adj_index, true)) => {
                            if let Some(node_data) = data.get_mut(&node) {
                                node_data.lowlink = node_data.lowlink.min(adj_index);
                            }
                        }
                        Some(_) => {}
                    }
                    continue;
                }

                // All successors of `node` are done
                call_stack.pop();

                let Some(&TarjanData { index, lowlink, .. }) = data.get(&node) else {
                    continue;
                };

                if let Some((parent, _)) = call_stack.last() {
                    if let Some(parent_data) = data.get_mut(parent) {
                        parent_data.lowlink = parent_data.lowlink.min(lowlink);
                    }
                }

                if lowlink == index {
                    let mut component = StronglyConnectedComponent::new();
                    while let Some(member) = stack.pop() {
                        if let Some(member_data) = data.get_mut(&member) {
                            member_data.on_stack = false;
                        }
                        component.add_node(member);
                        if member == node {
                            break;
                        }
                    }
                    component.set_root_node(node);
                    components.push(component);
                }
            }
        }

        debug!("Found {} strongly connected components", components.len());
        stopwatch.report();

        components
    }

    /// The component with the most nodes. Ties go to the component found
    /// first.
    pub fn largest_scc(&self) -> Option<StronglyConnectedComponent> {
        let components = self.compute();
        let count = components.len();

        let largest = components
            .into_iter()
            .reduce(|largest, component| {
                if component.len() > largest.len() {
                    component
                } else {
                    largest
                }
            });

        if let Some(largest) = &largest {
            info!(
                "Largest of {} strongly connected components has {} nodes",
                count,
                largest.len()
            );
        }

        largest
    }

    fn visit(
        &self,
        node: NodeId,
        next_index: &mut usize,
        data: &mut IdMap<NodeId, TarjanData>,
        stack: &mut Vec<NodeId>,
        call_stack: &mut Vec<(NodeId, G::EdgeIterator<'a>)>,
    ) {
        data.insert(
            &node,
            TarjanData {
                index: *next_index,
                lowlink: *next_index,
                on_stack: true,
            },
        );
        *next_index += 1;
        stack.push(node);
        call_stack.push((node, self.view.outgoing_edges(node)));
    }
}
