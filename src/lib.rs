//! Best-first shortest-path search (Dijkstra / A*) over any graph that
//! implements [`Graph`], backed by a comparator-driven binary [`Heap`].

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;

pub use collections::{Comparator, Growth, Heap, MaxFirst, MinFirst};
pub use errors::{HeapError, PathPlannerError};
pub use graph::{AdjacencyGraph, Edge, Graph};
pub use graph_algos::a_star::a_star;
pub use graph_algos::cancel::CancelToken;
pub use graph_algos::config::{Relaxation, SearchConfig};
pub use graph_algos::dijkstra::dijkstra;
pub use graph_algos::heuristic::{
    ConstantHeuristic, EuclideanHeuristic, Heuristic, ManhattanHeuristic, ZeroHeuristic,
};
pub use graph_algos::pathfinder::PathFinder;
pub use graph_algos::{Path, Score, ScoreTable};
