use std::fmt;


/// Failures raised by the binary heap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    Empty, // peek or pop on an empty heap
    InvalidCapacity(usize), // capacity must be greater than zero
    CapacityBelowLength { capacity: usize, len: usize }, // resize would drop live elements
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathPlannerError {
    NoPathFound, // Open set exhausted before the destination was reached
    SearchLimitExceeded { limit: usize, expansions: usize }, // Gave up after too many expansions
    Cancelled { expansions: usize },
    MissingEdge { from: String, to: String }, // Graph reported a neighbor but has no edge to it
    InvalidWeight(f64), // Negative or NaN edge weight
    InvalidHeuristic(f64), // Negative or NaN heuristic estimate
    BrokenPredecessorChain, // Reconstruction did not reach the origin
    InvalidConfig(String),
    Heap(HeapError),
}

impl PathPlannerError {

    /// True for every outcome that means "no path found", whether the search
    /// space was exhausted or the search limit was hit first
    pub fn is_not_found(&self) -> bool {
        matches!(self, PathPlannerError::NoPathFound | PathPlannerError::SearchLimitExceeded { .. })
    }
}


impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::InvalidCapacity(capacity) => write!(f, "invalid heap capacity {capacity}"),
            HeapError::CapacityBelowLength { capacity, len } => {
                write!(f, "capacity {capacity} is smaller than the {len} elements in the heap")
            }
        }
    }
}

impl std::error::Error for HeapError {}

impl fmt::Display for PathPlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPlannerError::NoPathFound => write!(f, "no path found"),
            PathPlannerError::SearchLimitExceeded { limit, expansions } => {
                write!(f, "search limit of {limit} exceeded after {expansions} expansions")
            }
            PathPlannerError::Cancelled { expansions } => write!(f, "search cancelled after {expansions} expansions"),
            PathPlannerError::MissingEdge { from, to } => write!(f, "no edge from {from} to {to}"),
            PathPlannerError::InvalidWeight(w) => write!(f, "invalid edge weight {w}"),
            PathPlannerError::InvalidHeuristic(h) => write!(f, "invalid heuristic estimate {h}"),
            PathPlannerError::BrokenPredecessorChain => write!(f, "predecessor chain does not lead back to the origin"),
            PathPlannerError::InvalidConfig(reason) => write!(f, "invalid search config: {reason}"),
            PathPlannerError::Heap(e) => write!(f, "heap error: {e}"),
        }
    }
}

impl std::error::Error for PathPlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathPlannerError::Heap(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HeapError> for PathPlannerError {
    fn from(error: HeapError) -> Self {
        PathPlannerError::Heap(error)
    }
}
