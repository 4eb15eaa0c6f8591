pub mod a_star;
pub mod cancel;
pub mod config;
pub mod dijkstra;
pub mod heuristic;
pub mod pathfinder;
mod shortest_path;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;


/// Parent index of a node that has no predecessor (the origin)
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Search state of a single node
/// g: best known cost from the origin
/// h: heuristic estimate to the destination, computed once on discovery
/// parent: index of the predecessor in the score table, NO_PARENT for the origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Score {
    pub g: f64,
    pub h: f64,
    pub parent: usize,
}

impl Score {

    /// Priority used by the open set
    pub fn f(&self) -> f64 {
        self.g + self.h
    }

    pub fn predecessor(&self) -> Option<usize> {
        (self.parent != NO_PARENT).then_some(self.parent)
    }
}

/// Type alias for the score table used by the search engine
/// N: Node - space on a graph
/// The position of a node in the map doubles as its handle in the open heap
/// and in the closed set, and as the parent link of its successors
pub type ScoreTable<N> = FxIndexMap<N, Score>;


/// Found path
#[derive(Clone, Debug, PartialEq)]
pub struct Path<N> {
    pub nodes: Vec<N>, // origin first, destination last
    pub cost: f64, // recorded g-score of the destination
    pub expansions: usize, // nodes whose neighbors were enumerated
}

impl<N> Path<N> {

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn origin(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn destination(&self) -> Option<&N> {
        self.nodes.last()
    }
}
