use crate::errors::PathPlannerError;
use crate::graph::Graph;
use super::Path;
use super::heuristic::Heuristic;
use super::pathfinder::PathFinder;


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// One-shot search on a fresh engine. The returned path is optimal when the
/// heuristic is admissible (never overestimates the remaining cost)
pub fn a_star<G, H>(graph: &G, origin: &G::Node, destination: &G::Node, heuristic: H) -> Result<Path<G::Node>, PathPlannerError>
where
    G: Graph,
    H: Heuristic<G::Node>,
{
    PathFinder::with_heuristic(graph, heuristic).find_path(origin, destination)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;
    use crate::graph_algos::heuristic::{EuclideanHeuristic, ZeroHeuristic};
    use std::collections::HashMap;

    /// A* algorithm test
    #[test]
    fn test_a_star() {
        // Diamond-shaped graph: A -> B -> D and A -> C -> D
        let graph = AdjacencyGraph::from_edges([("A", "B", 1.0), ("A", "C", 3.0), ("B", "D", 5.0), ("C", "D", 1.0)]);

        // Simple zero heuristic (makes A* behave like Dijkstra)
        let path = a_star(&graph, &"A", &"D", ZeroHeuristic).unwrap();

        // The expected path is A -> C -> D (the cheapest path)
        assert_eq!(path.nodes, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_a_star_handles_unreachable_goal() {
        let mut graph = AdjacencyGraph::from_edges([("A", "B", 1.0), ("B", "C", 1.0)]);
        graph.add_node("D"); // D is not connected

        let result = a_star(&graph, &"A", &"D", ZeroHeuristic);
        assert!(matches!(result, Err(PathPlannerError::NoPathFound)));
    }

    #[test]
    fn test_a_star_with_heuristic() {
        // Simple grid-like graph where nodes have (x, y) coordinates
        // A(0,0) -> B(1,0) -> D(2,0)
        //   |
        //   v
        // C(0,1) ------> D(2,0)
        let graph = AdjacencyGraph::from_edges([("A", "B", 1.0), ("A", "C", 1.0), ("B", "D", 1.0), ("C", "D", 2.0)]);

        let coords = HashMap::from([("A", (0i32, 0i32)), ("B", (1, 0)), ("C", (0, 1)), ("D", (2, 0))]);

        // Manhattan distance looked up through the coordinate table
        let heuristic = |node: &&str, goal: &&str| {
            let (nx, ny) = coords[node];
            let (gx, gy) = coords[goal];
            ((nx - gx).abs() + (ny - gy).abs()) as f64
        };

        let path = a_star(&graph, &"A", &"D", heuristic).unwrap();

        // The expected path is A -> B -> D (the path guided by heuristic)
        assert_eq!(path.nodes, vec!["A", "B", "D"]);
        assert_eq!(path.cost, 2.0);
        assert_eq!(path.expansions, 2);
    }

    #[test]
    fn test_a_star_on_coordinate_nodes() {
        let graph: AdjacencyGraph<(i32, i32)> = AdjacencyGraph::from_edges([
            ((0, 0), (3, 4), 5.0),
            ((0, 0), (-3, 0), 3.0),
            ((-3, 0), (3, 4), 10.0),
        ]);

        let path = a_star(&graph, &(0, 0), &(3, 4), EuclideanHeuristic::default()).unwrap();
        assert_eq!(path.nodes, vec![(0, 0), (3, 4)]);
        assert_eq!(path.cost, 5.0);
    }
}
