//! Search caching support to eliminate already explored states.

use std::collections::{HashMap, HashSet};
use std::default::Default;

use crate::traits::SearchState;

/// What a [Cache] decided about a newly generated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The state has never been seen before.
    New,

    /// The state was seen before, but this path to it is cheaper.
    Improved,

    /// The state should not be pushed onto the frontier.
    Rejected,
}

impl Admission {
    pub fn is_admitted(self) -> bool {
        !matches!(self, Admission::Rejected)
    }
}

/// Defines the behavior required of a search cache.
///
/// A cache records the states which have been pushed onto the
/// frontier, and decides whether a newly generated state should
/// be pushed as well. Every search builds its own empty cache.
pub trait Cache: Default {
    type State: SearchState;

    /// Record the initial state of the search, at zero cost.
    fn seed(&mut self, state: &Self::State);

    /// Check whether a state reached at `cost` should be pushed,
    /// recording it if so.
    fn check(&mut self, state: &Self::State, cost: f64) -> Admission;

    /// Number of distinct states recorded.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Records every state ever pushed. The first path
/// discovered to a state wins, no matter what it cost.
#[derive(Debug)]
pub struct ExploredSet<S> {
    explored: HashSet<S>,
}

impl<S> Default for ExploredSet<S> {
    fn default() -> Self {
        ExploredSet {
            explored: HashSet::new(),
        }
    }
}

impl<S> ExploredSet<S>
where
    S: SearchState,
{
    pub fn contains(&self, state: &S) -> bool {
        self.explored.contains(state)
    }
}

impl<S> Cache for ExploredSet<S>
where
    S: SearchState,
{
    type State = S;

    fn seed(&mut self, state: &S) {
        self.explored.insert(state.clone());
    }

    fn check(&mut self, state: &S, _cost: f64) -> Admission {
        if self.explored.contains(state) {
            return Admission::Rejected;
        }
        self.explored.insert(state.clone());
        Admission::New
    }

    fn len(&self) -> usize {
        self.explored.len()
    }
}

/// Records the cheapest cost seen for every state.
///
/// A state is admitted again whenever a strictly cheaper path
/// to it is found.
#[derive(Debug)]
pub struct CostMap<S> {
    costs: HashMap<S, f64>,
}

impl<S> Default for CostMap<S> {
    fn default() -> Self {
        CostMap {
            costs: HashMap::new(),
        }
    }
}

impl<S> CostMap<S>
where
    S: SearchState,
{
    /// Best cost recorded for this state, if any.
    pub fn cost(&self, state: &S) -> Option<f64> {
        self.costs.get(state).copied()
    }
}

impl<S> Cache for CostMap<S>
where
    S: SearchState,
{
    type State = S;

    fn seed(&mut self, state: &S) {
        self.costs.insert(state.clone(), 0.0);
    }

    fn check(&mut self, state: &S, cost: f64) -> Admission {
        // Check if we have already seen this state in our cache.
        // (a) For states which are not in the cache, add them.
        // (b) If the state is already in the cache at a lower or equal
        //     cost, we should ignore this candidate.
        // (c) For states which are already in the cache but at a higher
        //     cost, mark this state as the new winner.
        match self.costs.get_mut(state) {
            // (a)
            None => {
                self.costs.insert(state.clone(), cost);
                Admission::New
            }
            // (c)
            Some(best) if cost < *best => {
                *best = cost;
                Admission::Improved
            }
            // (b)
            Some(_) => Admission::Rejected,
        }
    }

    fn len(&self) -> usize {
        self.costs.len()
    }
}
