use crate::collections::{Comparator, FxHashSet, Heap};
use crate::errors::PathPlannerError;
use crate::graph::Graph;
use super::cancel::CancelToken;
use super::config::{Relaxation, SearchConfig};
use super::heuristic::{Heuristic, ZeroHeuristic};
use super::{NO_PARENT, Path, Score, ScoreTable, shortest_path};

use std::{cell::RefCell, cmp::Ordering, rc::Rc};
use ordered_float::OrderedFloat;

/// Orders open-set handles by the g + h currently recorded in the score table
///
/// Priorities are read at comparison time, never cached in the heap. This is
/// only sound for the way the engine uses it: a node is inserted at most once,
/// and whenever its score changes while open the engine re-sifts it.
struct ScoreOrder<N> {
    scores: Rc<RefCell<ScoreTable<N>>>,
}

impl<N> Clone for ScoreOrder<N> {
    fn clone(&self) -> Self {
        Self { scores: Rc::clone(&self.scores) }
    }
}

impl<N> Comparator<usize> for ScoreOrder<N> {
    fn compare(&self, a: &usize, b: &usize) -> Ordering {
        let scores = self.scores.borrow();
        let priority = |index: &usize| {
            OrderedFloat(scores.get_index(*index).map_or(f64::INFINITY, |(_, score)| score.f()))
        };
        priority(a).cmp(&priority(b))
    }
}

/// Best-first search engine (Dijkstra, or A* with a non-zero heuristic)
///
/// State lives in the engine, not in a single query: score table, open set and
/// closed set fill up during `find_path` and stay there afterwards. Call
/// [`PathFinder::clear`] before reusing an instance for an unrelated search, or
/// set `auto_clear` in the config.
///
/// An engine is single-threaded. Concurrent searches need one engine each; they
/// can borrow the same graph.
pub struct PathFinder<'g, G: Graph, H = ZeroHeuristic> {
    graph: &'g G,
    heuristic: H,
    config: SearchConfig,
    scores: Rc<RefCell<ScoreTable<G::Node>>>, // shared with the open set comparator
    open: Heap<usize, ScoreOrder<G::Node>>, // handles are score table indices
    closed: FxHashSet<usize>,
    cancel: Option<CancelToken>,
}

impl<'g, G: Graph> PathFinder<'g, G, ZeroHeuristic> {

    /// Plain Dijkstra with the default config
    pub fn new(graph: &'g G) -> Self {
        Self::with_heuristic(graph, ZeroHeuristic)
    }
}

impl<'g, G, H> PathFinder<'g, G, H>
where
    G: Graph,
    H: Heuristic<G::Node>,
{

    pub fn with_heuristic(graph: &'g G, heuristic: H) -> Self {
        let scores = Rc::new(RefCell::new(ScoreTable::default()));
        let open = Heap::with_comparator(ScoreOrder { scores: Rc::clone(&scores) });
        Self::from_parts(graph, heuristic, SearchConfig::default(), scores, open)
    }

    /// Validates the config up front, nothing is checked once a search runs
    pub fn with_config(graph: &'g G, heuristic: H, config: SearchConfig) -> Result<Self, PathPlannerError> {
        config.validate()?;
        let scores = Rc::new(RefCell::new(ScoreTable::default()));
        let mut open = Heap::with_capacity(config.heap_capacity, ScoreOrder { scores: Rc::clone(&scores) })?;
        open.set_growth(config.heap_growth);
        Ok(Self::from_parts(graph, heuristic, config, scores, open))
    }

    fn from_parts(
        graph: &'g G,
        heuristic: H,
        config: SearchConfig,
        scores: Rc<RefCell<ScoreTable<G::Node>>>,
        open: Heap<usize, ScoreOrder<G::Node>>,
    ) -> Self {
        Self {
            graph,
            heuristic,
            config,
            scores,
            open,
            closed: FxHashSet::default(),
            cancel: None,
        }
    }

    /// Poll `token` once per expansion and stop when it fires
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn search_limit(&self) -> usize {
        self.config.search_limit
    }

    /// 0 removes the limit
    pub fn set_search_limit(&mut self, search_limit: usize) {
        self.config.search_limit = search_limit;
    }

    /// Score recorded for `node` by the last search, if it was discovered
    pub fn score(&self, node: &G::Node) -> Option<Score> {
        self.scores.borrow().get(node).copied()
    }

    pub fn is_closed(&self, node: &G::Node) -> bool {
        self.scores
            .borrow()
            .get_index_of(node)
            .is_some_and(|index| self.closed.contains(&index))
    }

    /// Number of discovered nodes still waiting in the open set
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// True when no search state is held
    pub fn is_clean(&self) -> bool {
        self.open.is_empty() && self.closed.is_empty() && self.scores.borrow().is_empty()
    }

    /// Reset the open set, score table (with predecessor links) and closed set
    pub fn clear(&mut self) {
        self.open.clear();
        self.scores.borrow_mut().clear();
        self.closed.clear();
    }

    /// Search the cheapest path from `origin` to `destination`
    ///
    /// The origin is closed before the first expansion, the open set only ever
    /// receives its successors. Fails with `NoPathFound` when the open set runs
    /// dry and with `SearchLimitExceeded` when reaching the destination would
    /// take more than the configured number of expansions. Searching from a
    /// node to itself records no state.
    pub fn find_path(&mut self, origin: &G::Node, destination: &G::Node) -> Result<Path<G::Node>, PathPlannerError> {

        if !self.is_clean() {
            if self.config.auto_clear {
                self.clear();
            } else {
                log::warn!(
                    "find_path called with {} nodes left over from a previous search, results may be wrong; call clear() first",
                    self.scores.borrow().len()
                );
            }
        }
        log::debug!("searching path from {origin:?} to {destination:?}");

        // nothing to search, leave the engine untouched
        if origin == destination {
            return Ok(Path { nodes: vec![origin.clone()], cost: 0.0, expansions: 0 });
        }

        let h = self.heuristic_of(origin, destination)?;
        let origin_index = self
            .scores
            .borrow_mut()
            .insert_full(origin.clone(), Score { g: 0.0, h, parent: NO_PARENT })
            .0;
        self.closed.insert(origin_index);

        let mut current = origin_index;
        let mut expansions = 0;

        loop {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                log::debug!("search cancelled after {expansions} expansions");
                return Err(PathPlannerError::Cancelled { expansions });
            }

            // at most `limit` expansions ever run
            let limit = self.config.search_limit;
            if limit > 0 && expansions >= limit {
                log::debug!("search limit of {limit} exceeded");
                return Err(PathPlannerError::SearchLimitExceeded { limit, expansions });
            }

            expansions += 1;
            self.expand(current, destination)?;

            // Best open node becomes the next one to expand
            let Ok(next) = self.open.pop() else {
                log::debug!("open set exhausted after {expansions} expansions");
                return Err(PathPlannerError::NoPathFound);
            };
            self.closed.insert(next);
            current = next;

            let reached = self
                .scores
                .borrow()
                .get_index(current)
                .is_some_and(|(node, _)| node == destination);
            if reached {
                break;
            }
        }

        let scores = self.scores.borrow();
        let nodes = shortest_path(&scores, origin_index, current)?;
        let cost = scores
            .get_index(current)
            .map(|(_, score)| score.g)
            .ok_or(PathPlannerError::BrokenPredecessorChain)?;

        log::debug!("found path of {} nodes with cost {cost} after {expansions} expansions", nodes.len());
        Ok(Path { nodes, cost, expansions })
    }

    /// Discover or relax every neighbor of `current` that is not closed yet
    fn expand(&mut self, current: usize, destination: &G::Node) -> Result<(), PathPlannerError> {
        let graph = self.graph;
        let (node, g_current) = match self.scores.borrow().get_index(current) {
            Some((node, score)) => (node.clone(), score.g),
            None => return Err(PathPlannerError::BrokenPredecessorChain),
        };
        log::trace!("expanding {node:?} (g = {g_current})");

        for neighbor in graph.adjacent_nodes(&node) {
            let known = self.scores.borrow().get_index_of(&neighbor);

            // closed nodes are final
            if known.is_some_and(|index| self.closed.contains(&index)) {
                continue;
            }

            let candidate = g_current + self.edge_weight(&node, &neighbor)?;

            match known {
                None => {
                    // first time we're seeing this neighbor, h is computed once here
                    let h = self.heuristic_of(&neighbor, destination)?;
                    let index = self
                        .scores
                        .borrow_mut()
                        .insert_full(neighbor, Score { g: candidate, h, parent: current })
                        .0;
                    self.open.insert(index);
                }
                Some(index) => self.relax(index, current, candidate),
            }
        }
        Ok(())
    }

    /// Relink an open node to `current` if going through it is cheaper
    fn relax(&mut self, index: usize, current: usize, candidate: f64) {
        let update_score = self.config.relaxation == Relaxation::UpdateScore;

        let improved = match self.scores.borrow_mut().get_index_mut(index) {
            Some((_, score)) if candidate < score.g => {
                score.parent = current;
                if update_score {
                    score.g = candidate;
                }
                true
            }
            _ => false,
        };

        // priority went down, move it towards the root
        if improved && update_score {
            self.open.refresh(&index);
        }
    }

    fn edge_weight(&self, from: &G::Node, to: &G::Node) -> Result<f64, PathPlannerError> {
        let edge = self.graph.edge(from, to).ok_or_else(|| PathPlannerError::MissingEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        })?;

        let weight = edge.weight();
        if weight.is_nan() || weight < 0.0 {
            return Err(PathPlannerError::InvalidWeight(weight));
        }
        Ok(weight)
    }

    fn heuristic_of(&self, node: &G::Node, destination: &G::Node) -> Result<f64, PathPlannerError> {
        let h = self.heuristic.estimate(node, destination);
        if h.is_nan() || h < 0.0 {
            return Err(PathPlannerError::InvalidHeuristic(h));
        }
        Ok(h)
    }
}
