mod adjacency;

pub use adjacency::AdjacencyGraph;

use std::{fmt::Debug, hash::Hash};


/// Read-only view of a weighted graph
///
/// The search engine only pulls from it: adjacency is asked for one node at a
/// time and edges are looked up on demand, so implementations are free to
/// compute both lazily.
pub trait Graph {
    /// Node identity, compared by equality and used as a map key
    type Node: Eq + Hash + Clone + Debug;

    fn nodes(&self) -> impl Iterator<Item = Self::Node>;

    fn edges(&self) -> impl Iterator<Item = Edge<Self::Node>>;

    /// Nodes reachable from `node` over a single edge
    fn adjacent_nodes(&self, node: &Self::Node) -> impl Iterator<Item = Self::Node>;

    /// The edge leading from `from` to `to`, if any
    fn edge(&self, from: &Self::Node, to: &Self::Node) -> Option<Edge<Self::Node>>;
}


/// Connection between two nodes
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<N> {
    origin: N,
    destination: N,
    weight: f64,
    weighted: bool,
    directed: bool,
}

impl<N> Edge<N> {

    /// Weighted edge, traversable from origin to destination only
    pub fn directed(origin: N, destination: N, weight: f64) -> Self {
        Self { origin, destination, weight, weighted: true, directed: true }
    }

    /// Weighted edge, traversable both ways
    pub fn undirected(origin: N, destination: N, weight: f64) -> Self {
        Self { origin, destination, weight, weighted: true, directed: false }
    }

    /// Edge without a weight of its own, reports a weight of 1
    pub fn unweighted(origin: N, destination: N, directed: bool) -> Self {
        Self { origin, destination, weight: 1.0, weighted: false, directed }
    }

    pub fn origin(&self) -> &N {
        &self.origin
    }

    pub fn destination(&self) -> &N {
        &self.destination
    }

    pub fn weight(&self) -> f64 {
        if self.weighted { self.weight } else { 1.0 }
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<N: PartialEq> Edge<N> {

    /// True if the edge can be walked from `from` to `to`
    pub fn connects(&self, from: &N, to: &N) -> bool {
        (self.origin == *from && self.destination == *to)
            || (!self.directed && self.origin == *to && self.destination == *from)
    }

    /// Endpoint opposite to `node`
    /// Returns None if `node` is not an endpoint, or if the edge is directed and `node` is its destination
    pub fn opposite(&self, node: &N) -> Option<&N> {
        if self.origin == *node {
            Some(&self.destination)
        } else if !self.directed && self.destination == *node {
            Some(&self.origin)
        } else {
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unweighted_edge_weight() {
        let edge = Edge::unweighted("A", "B", true);
        assert_eq!(edge.weight(), 1.0);
        assert!(!edge.is_weighted());
        assert!(edge.is_directed());
    }

    #[test]
    fn test_directed_edge_connects_one_way() {
        let edge = Edge::directed("A", "B", 2.5);
        assert!(edge.connects(&"A", &"B"));
        assert!(!edge.connects(&"B", &"A"));
        assert_eq!(edge.opposite(&"A"), Some(&"B"));
        assert_eq!(edge.opposite(&"B"), None);
    }

    #[test]
    fn test_undirected_edge_connects_both_ways() {
        let edge = Edge::undirected("A", "B", 2.5);
        assert!(edge.connects(&"B", &"A"));
        assert_eq!(edge.opposite(&"B"), Some(&"A"));
        assert_eq!(edge.opposite(&"C"), None);
        assert_eq!(edge.weight(), 2.5);
    }
}
