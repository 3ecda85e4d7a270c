use crate::{graph::Graph, graph_view::GraphView};

use super::{astar::AStar, astar_heuristic::ZeroHeuristic};

pub struct Dijkstra;

/// Dijkstra is simply a variant of AStar with a zero heuristic
impl Dijkstra {
    #[allow(clippy::new_ret_no_self)]
    pub fn new<G: Graph>(graph: &G) -> AStar<'_, G, ZeroHeuristic> {
        AStar::with_heuristic(graph, ZeroHeuristic)
    }

    pub fn on_view<G: Graph>(view: GraphView<'_, G>) -> AStar<'_, G, ZeroHeuristic> {
        AStar::on_view(view, ZeroHeuristic)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RoutingError,
        graph::Graph,
        routing::shortest_path_computation::{SearchSource, ShortestPathComputation},
        test_graph_utils::test_graphs::{
            RomaniaCity, disconnected_graph, romania_graph, unit_cycle_graph,
        },
    };

    use super::*;

    #[test]
    fn test_calc_path() {
        let graph = romania_graph();
        let dijkstra = Dijkstra::new(&graph);

        let path = dijkstra
            .compute_shortest_path(RomaniaCity::Oradea.id(), RomaniaCity::Bucharest.id())
            .unwrap()
            .unwrap();

        assert_eq!(path.cost(), 429.0);
        assert_eq!(path.source(), RomaniaCity::Oradea.id());
        assert_eq!(path.destination(), RomaniaCity::Bucharest.id());
        assert_eq!(
            path.node_ids().collect::<Vec<_>>(),
            vec![
                RomaniaCity::Oradea.id(),
                RomaniaCity::Sibiu.id(),
                RomaniaCity::RimnicuVilcea.id(),
                RomaniaCity::Pitesti.id(),
                RomaniaCity::Bucharest.id(),
            ]
        );

        let leg_total: f64 = path.legs().iter().map(|leg| leg.cost).sum();
        assert_eq!(leg_total, path.cost());
    }

    #[test]
    fn test_calc_path_2() {
        let graph = romania_graph();
        let dijkstra = Dijkstra::new(&graph);

        let cost = dijkstra
            .compute_shortest_path_cost(RomaniaCity::Iasi.id(), RomaniaCity::Timisoara.id())
            .unwrap();

        assert_eq!(cost, Some(855.0));
    }

    #[test]
    fn path_to_itself_is_empty() {
        let graph = romania_graph();
        let dijkstra = Dijkstra::new(&graph);

        for city in RomaniaCity::ALL {
            let path = dijkstra
                .compute_shortest_path(city.id(), city.id())
                .unwrap()
                .unwrap();
            assert!(path.is_empty());
            assert_eq!(path.cost(), 0.0);
        }
    }

    #[test]
    fn cycle_shortest_path() {
        let graph = unit_cycle_graph();
        let dijkstra = Dijkstra::new(&graph);

        assert_eq!(dijkstra.compute_shortest_path_cost(1, 3), Ok(Some(2.0)));
        assert_eq!(dijkstra.compute_shortest_path_cost(3, 1), Ok(Some(2.0)));
        assert_eq!(dijkstra.compute_shortest_path_cost(2, 1), Ok(Some(3.0)));
    }

    #[test]
    fn backward_view_follows_edges_in_reverse() {
        let graph = unit_cycle_graph();
        let backward = Dijkstra::on_view(graph.reversed());

        // 2 -> 1 in the reversed cycle is the single edge 1 -> 2
        assert_eq!(backward.compute_shortest_path_cost(2, 1), Ok(Some(1.0)));
        assert_eq!(backward.compute_shortest_path_cost(1, 2), Ok(Some(3.0)));

        let path = backward.compute_shortest_path(2, 1).unwrap().unwrap();
        assert_eq!(path.legs()[0].source, 2);
        assert_eq!(path.legs()[0].destination, 1);
    }

    #[test]
    fn disconnected_graph_has_no_path() {
        let graph = disconnected_graph();
        let dijkstra = Dijkstra::new(&graph);

        assert_eq!(dijkstra.compute_shortest_path(0, 10), Ok(None));
        assert_eq!(dijkstra.compute_shortest_path_cost(10, 0), Ok(None));
    }

    #[test]
    fn reachable_costs_stay_in_the_component() {
        let graph = disconnected_graph();
        let dijkstra = Dijkstra::new(&graph);

        let reachable = dijkstra.compute_shortest_path_costs_reachable(0).unwrap();

        assert_eq!(reachable.len(), 3);
        assert_eq!(reachable.cost(0), Some(0.0));
        assert_eq!(reachable.cost(1), Some(1.0));
        assert_eq!(reachable.cost(2), Some(2.0));
        assert!(!reachable.contains(10));
        assert!(!reachable.contains(11));
    }

    #[test]
    fn reachable_costs_cover_every_city() {
        let graph = romania_graph();
        let dijkstra = Dijkstra::new(&graph);

        let reachable = dijkstra
            .compute_shortest_path_costs_reachable(RomaniaCity::Arad.id())
            .unwrap();

        assert_eq!(reachable.len(), graph.node_count());
        assert_eq!(reachable.cost(RomaniaCity::Bucharest.id()), Some(418.0));

        let path = reachable.path_to(RomaniaCity::Bucharest.id()).unwrap();
        assert_eq!(path.cost(), 418.0);
        assert_eq!(path.source(), RomaniaCity::Arad.id());
    }

    #[test]
    fn multiple_sources_use_the_closest() {
        let graph = romania_graph();
        let dijkstra = Dijkstra::new(&graph);

        let sources = [
            SearchSource::from(RomaniaCity::Oradea.id()),
            SearchSource::from(RomaniaCity::Pitesti.id()),
        ];
        let path = dijkstra
            .compute_shortest_path_from(&sources, RomaniaCity::Bucharest.id())
            .unwrap()
            .unwrap();

        assert_eq!(path.cost(), 101.0);
        assert_eq!(path.source(), RomaniaCity::Pitesti.id());
    }

    #[test]
    fn source_offsets_are_part_of_the_cost() {
        let graph = romania_graph();
        let dijkstra = Dijkstra::new(&graph);

        let sources = [
            SearchSource::new(RomaniaCity::Pitesti.id(), 400.0),
            SearchSource::new(RomaniaCity::Oradea.id(), 0.0),
        ];
        assert_eq!(
            dijkstra.compute_shortest_path_cost_from(&sources, RomaniaCity::Bucharest.id()),
            Ok(Some(429.0))
        );

        // The lowest offset of a repeated source wins
        let repeated = [
            SearchSource::new(RomaniaCity::Pitesti.id(), 50.0),
            SearchSource::new(RomaniaCity::Pitesti.id(), 10.0),
        ];
        assert_eq!(
            dijkstra.compute_shortest_path_cost_from(&repeated, RomaniaCity::Bucharest.id()),
            Ok(Some(111.0))
        );
    }

    #[test]
    fn unknown_destination_is_an_error() {
        let graph = romania_graph();
        let dijkstra = Dijkstra::new(&graph);

        assert_eq!(
            dijkstra.compute_shortest_path(RomaniaCity::Arad.id(), 1000),
            Err(RoutingError::UnknownNode(1000))
        );
    }
}
