//! Turning a finished search back into a path.

use crate::node::{NodeId, SearchNode, SearchTree};
use crate::statistics::SearchStatistics;

/// A goal node found by a search, along with every node
/// created during that search.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    tree: SearchTree<S>,
    goal: NodeId,
}

impl<S> Solution<S> {
    pub(crate) fn new(tree: SearchTree<S>, goal: NodeId) -> Self {
        Self { tree, goal }
    }

    /// The node which satisfied the goal test.
    pub fn node(&self) -> &SearchNode<S> {
        self.tree.get(self.goal)
    }

    /// The state which satisfied the goal test.
    pub fn state(&self) -> &S {
        self.node().state()
    }

    /// Accumulated cost of the path to the goal.
    pub fn cost(&self) -> f64 {
        self.node().cost()
    }

    /// Number of transitions from the initial state to the goal.
    pub fn len(&self) -> usize {
        self.tree.ancestors(self.goal).count() - 1
    }

    /// True when the initial state was already a goal.
    pub fn is_empty(&self) -> bool {
        self.node().is_root()
    }

    /// All nodes created during the search.
    pub fn tree(&self) -> &SearchTree<S> {
        &self.tree
    }

    /// Iterate over the nodes from the goal back to the initial state.
    pub fn nodes(&self) -> impl Iterator<Item = &SearchNode<S>> {
        self.tree.ancestors(self.goal)
    }
}

impl<S> Solution<S>
where
    S: Clone,
{
    /// The states from the initial state to the goal, inclusive.
    pub fn path(&self) -> Vec<S> {
        let mut path: Vec<S> = self.nodes().map(|n| n.state().clone()).collect();
        path.reverse();
        path
    }

    pub fn into_path(self) -> Vec<S> {
        self.path()
    }
}

/// Everything a completed search produced.
#[derive(Debug, Clone)]
pub struct Outcome<S> {
    solution: Option<Solution<S>>,
    statistics: SearchStatistics,
}

impl<S> Outcome<S> {
    pub(crate) fn new(solution: Option<Solution<S>>, statistics: SearchStatistics) -> Self {
        Self {
            solution,
            statistics,
        }
    }

    /// The solution, or `None` when the frontier was exhausted
    /// without reaching a goal.
    pub fn solution(&self) -> Option<&Solution<S>> {
        self.solution.as_ref()
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn into_solution(self) -> Option<Solution<S>> {
        self.solution
    }
}
