//! Provides the building blocks for search algorithms

use std::default::Default;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, trace};
use thiserror::Error;

use self::cache::{Admission, Cache};
use crate::errors::{Result, SearchError};
use crate::node::{NodeId, SearchTree};
use crate::path::{Outcome, Solution};
use crate::statistics::SearchStatistics;
use crate::traits::SearchState;

pub mod astar;
pub mod basic;
pub mod cache;

/// Cost of a single transition between states.
pub const UNIT_COST: f64 = 1.0;

/// Anything which can be ranked by an estimated total cost.
///
/// Only the numeric key needs an ordering, never the state itself.
pub trait Estimate {
    fn estimate(&self) -> f64;
}

impl Estimate for f64 {
    fn estimate(&self) -> f64 {
        *self
    }
}

/// Trait used to implement frontiers of discovered
/// but not yet expanded search nodes.
///
/// The choice of frontier is the only thing which distinguishes
/// depth-first, breadth-first and A* searches. No frontier rejects
/// duplicates, that is the job of the [Cache].
pub trait Frontier: Default {
    type Item;

    fn pop(&mut self) -> Option<Self::Item>;

    fn push(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A reference to a node waiting on the frontier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    node: NodeId,
    estimate: f64,
}

impl Candidate {
    pub fn node(&self) -> NodeId {
        self.node
    }
}

impl Estimate for Candidate {
    fn estimate(&self) -> f64 {
        self.estimate
    }
}

/// Limits and logging for a single search.
///
/// The default places no limits on the search, so a search over
/// an infinite state space may never return.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum number of nodes to expand.
    pub step_limit: Option<usize>,

    /// Maximum wall-clock time to spend searching.
    pub time_limit: Option<Duration>,

    /// Log progress every this many expansions. Zero disables progress logs.
    pub log_interval: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            step_limit: None,
            time_limit: None,
            log_interval: 10_000,
        }
    }
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug)]
struct TimeLimit {
    started: Instant,
    maximum: Duration,
}

impl TimeLimit {
    fn new(started: Instant, limit: Duration) -> Self {
        Self {
            started,
            maximum: limit,
        }
    }

    fn check(&self) -> Result<()> {
        let elapsed = self.started.elapsed();
        if elapsed > self.maximum {
            Err(SearchError::TimeLimitExhausted(elapsed))
        } else {
            Ok(())
        }
    }
}

/// Implementation of search, using generic components.
///
/// Uses a generic frontier (F) and a generic cache (C) to provide
/// a single foundation for multiple search algorithms. Each searcher
/// owns its frontier, cache and node tree, and is consumed by [run](Self::run).
#[derive(Debug)]
pub struct SearchAlgorithm<S, F, C>
where
    S: SearchState,
    F: Frontier<Item = Candidate>,
    C: Cache<State = S>,
{
    origin: S,
    cache: C,
    frontier: F,
    tree: SearchTree<S>,
    options: SearchOptions,
    statistics: SearchStatistics,
}

impl<S, F, C> SearchAlgorithm<S, F, C>
where
    S: SearchState,
    F: Frontier<Item = Candidate>,
    C: Cache<State = S>,
{
    pub(crate) fn new(origin: S) -> Self {
        SearchAlgorithm {
            origin,
            cache: C::default(),
            frontier: F::default(),
            tree: SearchTree::new(),
            options: SearchOptions::default(),
            statistics: SearchStatistics::default(),
        }
    }

    /// Replace the options for this search.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When more than this many nodes have been expanded,
    /// the search algorithm will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.options.step_limit = Some(limit)
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    fn push(&mut self, node: NodeId) {
        let estimate = self.tree.get(node).estimate();
        self.frontier.push(Candidate { node, estimate });
        self.statistics.generated += 1;
        self.statistics.max_frontier = self.statistics.max_frontier.max(self.frontier.len());
    }

    fn progress(&self) {
        let interval = self.options.log_interval;
        if interval > 0 && self.statistics.expanded % interval == 0 {
            debug!("{} (frontier {})", self.statistics, self.frontier.len());
        }
    }

    /// Run the search to completion.
    ///
    /// Pops nodes from the frontier until one satisfies `goal_test`,
    /// expanding each failed node with `successors`. The `heuristic` is
    /// evaluated once for every node created. Returns an [Outcome] without
    /// a solution when the frontier is exhausted, and an error only when
    /// one of the limits in [SearchOptions] is exceeded.
    pub fn run<G, N, I, H>(
        mut self,
        goal_test: G,
        successors: N,
        heuristic: H,
    ) -> Result<Outcome<S>>
    where
        G: Fn(&S) -> bool,
        N: Fn(&S) -> I,
        I: IntoIterator<Item = S>,
        H: Fn(&S) -> f64,
    {
        let started = Instant::now();
        let mut steps = self.options.step_limit.map(StepLimit::new);
        let clock = self.options.time_limit.map(|t| TimeLimit::new(started, t));

        debug!("Searching from {:?}", self.origin);
        self.cache.seed(&self.origin);
        let h = heuristic(&self.origin);
        let root = self.tree.root(self.origin.clone(), h);
        self.push(root);

        while let Some(candidate) = self.frontier.pop() {
            if let Some(limit) = steps.as_mut() {
                limit.increment()?;
            }
            if let Some(limit) = clock.as_ref() {
                limit.check()?;
            }
            self.statistics.expanded += 1;

            let parent = candidate.node();
            let node = self.tree.get(parent);
            trace!("Expanding {} {:?} f={}", parent, node.state(), node.estimate());

            if goal_test(node.state()) {
                self.statistics.elapsed = started.elapsed();
                debug!("Found goal {:?}: {}", node.state(), self.statistics);
                let solution = Solution::new(self.tree, parent);
                return Ok(Outcome::new(Some(solution), self.statistics));
            }

            let cost = node.cost() + UNIT_COST;
            for state in successors(node.state()) {
                match self.cache.check(&state, cost) {
                    Admission::Rejected => {
                        self.statistics.pruned += 1;
                        continue;
                    }
                    Admission::Improved => self.statistics.reopened += 1,
                    Admission::New => {}
                }

                let h = heuristic(&state);
                let child = self.tree.child(parent, state, cost, h);
                self.push(child);
            }

            self.progress();
        }

        self.statistics.elapsed = started.elapsed();
        debug!("No solution found: {}", self.statistics);
        Ok(Outcome::new(None, self.statistics))
    }
}

/// Error when parsing an [Algorithm] by name.
#[derive(Debug, Error)]
#[error("Unknown search algorithm: {0}")]
pub struct UnknownAlgorithm(String);

/// The search algorithms, for choosing one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    AStar,
}

impl Algorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [Algorithm::DepthFirst, Algorithm::BreadthFirst, Algorithm::AStar]
            .iter()
            .cloned()
    }

    /// Run this search with the given options.
    ///
    /// The heuristic is only consulted by [Algorithm::AStar].
    pub fn search<S, G, N, I, H>(
        self,
        initial: S,
        goal_test: G,
        successors: N,
        heuristic: H,
        options: SearchOptions,
    ) -> Result<Outcome<S>>
    where
        S: SearchState,
        G: Fn(&S) -> bool,
        N: Fn(&S) -> I,
        I: IntoIterator<Item = S>,
        H: Fn(&S) -> f64,
    {
        use crate::heuristic::zero;

        match self {
            Algorithm::DepthFirst => basic::dfs::build(initial)
                .with_options(options)
                .run(goal_test, successors, zero),
            Algorithm::BreadthFirst => basic::bfs::build(initial)
                .with_options(options)
                .run(goal_test, successors, zero),
            Algorithm::AStar => astar::build(initial)
                .with_options(options)
                .run(goal_test, successors, heuristic),
        }
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" | "depth" | "depth-first" => Ok(Algorithm::DepthFirst),
            "bfs" | "breadth" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::DepthFirst => write!(f, "dfs"),
            Algorithm::BreadthFirst => write!(f, "bfs"),
            Algorithm::AStar => write!(f, "astar"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn step_limit_allows_maximum() {
        let mut limit = StepLimit::new(2);
        assert!(limit.increment().is_ok());
        assert!(limit.increment().is_ok());
        assert!(matches!(
            limit.increment(),
            Err(SearchError::StepLimitExhausted(2))
        ));
    }

    #[test]
    fn time_limit() {
        let limit = TimeLimit::new(Instant::now(), Duration::from_secs(3600));
        assert!(limit.check().is_ok());

        let started = Instant::now() - Duration::from_millis(5);
        let limit = TimeLimit::new(started, Duration::from_millis(1));
        assert!(matches!(
            limit.check(),
            Err(SearchError::TimeLimitExhausted(_))
        ));
    }

    #[test]
    fn algorithm_names() {
        for algorithm in Algorithm::all() {
            let name = algorithm.to_string();
            assert_eq!(name.parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!("A*".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert!("dijkstra".parse::<Algorithm>().is_err());
    }

    #[test]
    fn search_by_name() {
        let successors = |n: &i32| vec![n - 1, n + 1];
        let goal = |n: &i32| *n == 3;
        let heuristic = |n: &i32| f64::from((3 - n).abs());
        let options = SearchOptions {
            step_limit: Some(100),
            ..SearchOptions::default()
        };

        for algorithm in Algorithm::all() {
            let outcome = algorithm
                .search(0, goal, successors, heuristic, options.clone())
                .unwrap();
            let path = outcome.into_solution().unwrap().path();
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&3));
        }
    }

    #[test]
    fn default_options_are_unlimited() {
        let options = SearchOptions::default();
        assert!(options.step_limit.is_none());
        assert!(options.time_limit.is_none());
    }
}
