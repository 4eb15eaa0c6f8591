use crate::errors::PathPlannerError;
use crate::graph::Graph;
use super::Path;
use super::pathfinder::PathFinder;


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// One-shot search on a fresh engine, no search limit
pub fn dijkstra<G: Graph>(graph: &G, origin: &G::Node, destination: &G::Node) -> Result<Path<G::Node>, PathPlannerError> {
    PathFinder::new(graph).find_path(origin, destination)
}
