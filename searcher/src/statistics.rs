use std::fmt;
use std::time::Duration;

/// Counters collected while a search runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStatistics {
    pub(crate) expanded: usize,
    pub(crate) generated: usize,
    pub(crate) reopened: usize,
    pub(crate) pruned: usize,
    pub(crate) max_frontier: usize,
    pub(crate) elapsed: Duration,
}

impl SearchStatistics {
    /// Nodes popped from the frontier, including the goal.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Nodes pushed onto the frontier, including the root.
    pub fn generated(&self) -> usize {
        self.generated
    }

    /// Nodes pushed for a state which had already been seen
    /// at a higher cost.
    pub fn reopened(&self) -> usize {
        self.reopened
    }

    /// Successor states turned away by the cache.
    pub fn pruned(&self) -> usize {
        self.pruned
    }

    /// Largest size the frontier reached.
    pub fn max_frontier(&self) -> usize {
        self.max_frontier
    }

    /// Wall-clock time taken by the search.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "expanded={} generated={} reopened={} pruned={} max_frontier={} elapsed={:?}",
            self.expanded,
            self.generated,
            self.reopened,
            self.pruned,
            self.max_frontier,
            self.elapsed
        )
    }
}
