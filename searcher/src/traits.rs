use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::astar::astar;
use crate::algorithm::basic::{bfs, dfs};
use crate::path::Solution;

/// Requirements for a state to be tracked by a search.
///
/// States are opaque to the search algorithms, and are only
/// ever cloned, compared and hashed.
pub trait SearchState: Debug + Clone + Eq + Hash {}

impl<T> SearchState for T where T: Debug + Clone + Eq + Hash {}

/// Provides an interface for conducting searches.
///
/// Implementors describe an implicit graph: where it starts,
/// which states are goals and how to move between states. Each
/// provided search builds its own frontier and cache, so a problem
/// can be searched any number of times.
pub trait SearchProblem {
    type State: SearchState;

    /// The state every search starts from.
    fn initial(&self) -> Self::State;

    /// Indicates that this state is a goal, and causes the
    /// search algorithm to stop.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Produces the states reachable from this state in one step.
    /// The order of the states breaks ties between them.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    fn dfs(&self) -> Option<Solution<Self::State>> {
        dfs(
            self.initial(),
            |s| self.is_goal(s),
            |s| self.successors(s),
        )
    }

    fn bfs(&self) -> Option<Solution<Self::State>> {
        bfs(
            self.initial(),
            |s| self.is_goal(s),
            |s| self.successors(s),
        )
    }

    fn astar<H>(&self, heuristic: H) -> Option<Solution<Self::State>>
    where
        H: Fn(&Self::State) -> f64,
    {
        astar(
            self.initial(),
            |s| self.is_goal(s),
            |s| self.successors(s),
            heuristic,
        )
    }
}
