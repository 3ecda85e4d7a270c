pub mod astar;
pub mod astar_heuristic;
pub mod dijkstra;
pub mod reachable_costs;
pub mod routing_path;
pub mod routing_request;
pub mod shortest_path_computation;
