use crate::geometry::{Coordinates, euclidean, manhattan_distance};

use num_traits::ToPrimitive;


/// Estimate of the remaining cost from a node to the destination
///
/// Must be non-negative and deterministic for a fixed destination: the search
/// computes it once per node and never revisits it. An estimate that never
/// overshoots the true remaining cost (admissible) keeps the search optimal.
pub trait Heuristic<N> {
    fn estimate(&self, node: &N, destination: &N) -> f64;
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N, &N) -> f64,
{
    fn estimate(&self, node: &N, destination: &N) -> f64 {
        self(node, destination)
    }
}


/// Always zero, turns the search into plain Dijkstra (uniform-cost search)
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<N> Heuristic<N> for ZeroHeuristic {
    fn estimate(&self, _node: &N, _destination: &N) -> f64 {
        0.0
    }
}

/// Same estimate for every node
///
/// Not admissible once the constant exceeds the cheapest remaining edge, so
/// the returned path may be suboptimal. `ConstantHeuristic::default()` is 1.0.
#[derive(Clone, Copy, Debug)]
pub struct ConstantHeuristic(pub f64);

impl Default for ConstantHeuristic {
    fn default() -> Self {
        ConstantHeuristic(1.0)
    }
}

impl<N> Heuristic<N> for ConstantHeuristic {
    fn estimate(&self, _node: &N, _destination: &N) -> f64 {
        self.0
    }
}


/// Manhattan distance times `scale`
/// Admissible on 4-connected grids whose step cost is at least `scale`
#[derive(Clone, Copy, Debug)]
pub struct ManhattanHeuristic {
    pub scale: f64,
}

/// Straight-line distance times `scale`
#[derive(Clone, Copy, Debug)]
pub struct EuclideanHeuristic {
    pub scale: f64,
}

impl Default for ManhattanHeuristic {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Default for EuclideanHeuristic {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

fn planar<N>(node: &N) -> (f64, f64)
where
    N: Coordinates,
    N::Scalar: ToPrimitive,
{
    let (x, y) = node.coordinates();
    (x.to_f64().unwrap_or(f64::NAN), y.to_f64().unwrap_or(f64::NAN))
}

impl<N> Heuristic<N> for ManhattanHeuristic
where
    N: Coordinates,
    N::Scalar: ToPrimitive,
{
    fn estimate(&self, node: &N, destination: &N) -> f64 {
        manhattan_distance(planar(node), planar(destination)) * self.scale
    }
}

impl<N> Heuristic<N> for EuclideanHeuristic
where
    N: Coordinates,
    N::Scalar: ToPrimitive,
{
    fn estimate(&self, node: &N, destination: &N) -> f64 {
        euclidean(planar(node), planar(destination)) * self.scale
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_heuristics() {
        assert_eq!(ZeroHeuristic.estimate(&"A", &"B"), 0.0);
        assert_eq!(ConstantHeuristic::default().estimate(&"A", &"B"), 1.0);
        assert_eq!(ManhattanHeuristic::default().estimate(&(0i32, 0), &(2, -3)), 5.0);
        assert_eq!(EuclideanHeuristic { scale: 2.0 }.estimate(&(0i64, 0), &(3, 4)), 10.0);
    }

    #[test]
    fn test_closure_heuristic() {
        let h = |node: &u32, destination: &u32| destination.abs_diff(*node) as f64;
        assert_eq!(h.estimate(&3, &10), 7.0);
    }
}
