#[cfg(test)]
pub mod test_graphs {
    use crate::{
        graph::Graph,
        graph_edge::BasicEdge,
        node::BasicNode,
        road_graph::BasicGraph,
        types::{Cost, NodeId},
    };

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum RomaniaCity {
        Arad = 1,
        Bucharest = 2,
        Craiova = 3,
        Dobreta = 4,
        Eforie = 5,
        Fagaras = 6,
        Giurgiu = 7,
        Hirsova = 8,
        Iasi = 9,
        Lugoj = 10,
        Mehadia = 11,
        Neamt = 12,
        Oradea = 13,
        Pitesti = 14,
        RimnicuVilcea = 15,
        Sibiu = 16,
        Timisoara = 17,
        Urziceni = 18,
        Vaslui = 19,
        Zerind = 20,
    }

    impl RomaniaCity {
        pub const ALL: [RomaniaCity; 20] = [
            RomaniaCity::Arad,
            RomaniaCity::Bucharest,
            RomaniaCity::Craiova,
            RomaniaCity::Dobreta,
            RomaniaCity::Eforie,
            RomaniaCity::Fagaras,
            RomaniaCity::Giurgiu,
            RomaniaCity::Hirsova,
            RomaniaCity::Iasi,
            RomaniaCity::Lugoj,
            RomaniaCity::Mehadia,
            RomaniaCity::Neamt,
            RomaniaCity::Oradea,
            RomaniaCity::Pitesti,
            RomaniaCity::RimnicuVilcea,
            RomaniaCity::Sibiu,
            RomaniaCity::Timisoara,
            RomaniaCity::Urziceni,
            RomaniaCity::Vaslui,
            RomaniaCity::Zerind,
        ];

        pub fn id(self) -> NodeId {
            self as NodeId
        }
    }

    // https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
    fn romania_graph_edges() -> Vec<(RomaniaCity, RomaniaCity, Cost)> {
        use RomaniaCity::*;

        vec![
            (Oradea, Zerind, 71.0),
            (Oradea, Sibiu, 151.0),
            (Zerind, Arad, 75.0),
            (Arad, Sibiu, 140.0),
            (Arad, Timisoara, 118.0),
            (Timisoara, Lugoj, 111.0),
            (Lugoj, Mehadia, 70.0),
            (Mehadia, Dobreta, 75.0),
            (Dobreta, Craiova, 120.0),
            (Craiova, RimnicuVilcea, 146.0),
            (Craiova, Pitesti, 138.0),
            (RimnicuVilcea, Pitesti, 97.0),
            (RimnicuVilcea, Sibiu, 80.0),
            (Sibiu, Fagaras, 99.0),
            (Fagaras, Bucharest, 211.0),
            (Pitesti, Bucharest, 101.0),
            (Bucharest, Giurgiu, 90.0),
            (Bucharest, Urziceni, 85.0),
            (Urziceni, Hirsova, 98.0),
            (Hirsova, Eforie, 86.0),
            (Urziceni, Vaslui, 142.0),
            (Vaslui, Iasi, 92.0),
            (Iasi, Neamt, 87.0),
        ]
    }

    /// Builds a graph from `(source, destination, cost)` triples, adding the
    /// nodes on the way.
    pub fn graph_from_edges(edges: &[(NodeId, NodeId, Cost)]) -> BasicGraph {
        let mut graph = BasicGraph::new();
        for &(source, destination, cost) in edges {
            graph.add_node(BasicNode::new(source));
            graph.add_node(BasicNode::new(destination));
            let edge_id = graph.edge_count();
            graph
                .add_edge(BasicEdge::new(edge_id, source, destination, cost))
                .unwrap();
        }
        graph
    }

    /// The road map of Romania, every road usable in both directions. Costs
    /// are kilometers.
    pub fn romania_graph() -> BasicGraph {
        let edges: Vec<(NodeId, NodeId, Cost)> = romania_graph_edges()
            .into_iter()
            .flat_map(|(start, end, cost)| {
                [(start.id(), end.id(), cost), (end.id(), start.id(), cost)]
            })
            .collect();
        graph_from_edges(&edges)
    }

    /// One way cycle 1 -> 2 -> 3 -> 4 -> 1 with unit costs.
    pub fn unit_cycle_graph() -> BasicGraph {
        graph_from_edges(&[(1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0), (4, 1, 1.0)])
    }

    /// A one way triangle 0 -> 1 -> 2 -> 0 and an unrelated pair 10 <-> 11.
    pub fn disconnected_graph() -> BasicGraph {
        graph_from_edges(&[
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 0, 1.0),
            (10, 11, 1.0),
            (11, 10, 1.0),
        ])
    }
}
