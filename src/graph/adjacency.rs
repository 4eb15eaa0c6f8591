use crate::collections::FxIndexMap;
use super::{Edge, Graph};

use std::{fmt::Debug, hash::Hash};


/// In-memory graph stored as per-node lists of edge indices
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<N> {
    adjacency: FxIndexMap<N, Vec<usize>>, // node -> indices into `edges` leaving it
    edges: Vec<Edge<N>>,
}

impl<N> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
            edges: Vec::new(),
        }
    }
}

impl<N: Eq + Hash + Clone> AdjacencyGraph<N> {

    pub fn new() -> Self {
        Self::default()
    }

    /// Directed graph from `(origin, destination, weight)` triples
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut graph = Self::new();
        for (origin, destination, weight) in edges {
            graph.add_edge(Edge::directed(origin, destination, weight));
        }
        graph
    }

    /// Returns false if the node was already present
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Add an edge, creating its endpoints as needed
    /// Every existing edge between the same endpoints that the new edge can be
    /// walked along (both directions for an undirected edge) is replaced
    pub fn add_edge(&mut self, edge: Edge<N>) {
        self.add_node(edge.origin().clone());
        self.add_node(edge.destination().clone());

        let mut covered = self.covered_by(&edge);
        covered.sort_unstable();
        covered.dedup();

        // keep the lowest index, swap_remove from the top never moves it
        let index = match covered.first() {
            Some(&index) => index,
            None => {
                self.edges.push(edge.clone());
                self.edges.len() - 1
            }
        };
        for &stale in covered.iter().skip(1).rev() {
            self.remove_edge_at(stale);
        }

        self.link(edge.origin(), index);
        if edge.origin() != edge.destination() {
            if edge.is_directed() {
                self.unlink(edge.destination(), index);
            } else {
                self.link(edge.destination(), index);
            }
        }
        self.edges[index] = edge;
    }

    // Indices of stored edges connecting the endpoints of `edge` in a direction it covers
    fn covered_by(&self, edge: &Edge<N>) -> Vec<usize> {
        let (origin, destination) = (edge.origin(), edge.destination());
        let mut lists = vec![&self.adjacency[origin]];
        if !edge.is_directed() {
            lists.push(&self.adjacency[destination]);
        }

        lists
            .into_iter()
            .flatten()
            .copied()
            .filter(|&i| {
                let stored = &self.edges[i];
                stored.connects(origin, destination) || (!edge.is_directed() && stored.connects(destination, origin))
            })
            .collect()
    }

    fn link(&mut self, node: &N, index: usize) {
        if let Some(out) = self.adjacency.get_mut(node) {
            if !out.contains(&index) {
                out.push(index);
            }
        }
    }

    fn unlink(&mut self, node: &N, index: usize) {
        if let Some(out) = self.adjacency.get_mut(node) {
            out.retain(|&i| i != index);
        }
    }

    // swap_remove the edge and patch the index of the edge that took its slot
    fn remove_edge_at(&mut self, index: usize) {
        let last = self.edges.len() - 1;
        self.edges.swap_remove(index);
        for out in self.adjacency.values_mut() {
            out.retain(|&i| i != index);
            for i in out.iter_mut() {
                if *i == last {
                    *i = index;
                }
            }
        }
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<N: Eq + Hash + Clone + Debug> Graph for AdjacencyGraph<N> {
    type Node = N;

    fn nodes(&self) -> impl Iterator<Item = N> {
        self.adjacency.keys().cloned()
    }

    fn edges(&self) -> impl Iterator<Item = Edge<N>> {
        self.edges.iter().cloned()
    }

    fn adjacent_nodes(&self, node: &N) -> impl Iterator<Item = N> {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .filter_map(move |&i| self.edges[i].opposite(node).cloned())
    }

    fn edge(&self, from: &N, to: &N) -> Option<Edge<N>> {
        self.adjacency
            .get(from)?
            .iter()
            .map(|&i| &self.edges[i])
            .find(|edge| edge.connects(from, to))
            .cloned()
    }
}
