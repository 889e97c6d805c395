//! Path data structures
//!
//! A path is a sequence of steps in a 2D geometry.

use std::ops::Deref;

use searcher::Solution;

use super::Point;

/// A sequence of steps found by a search.
///
/// Paths are only built from a [Solution], so they always
/// contain at least their origin.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Path {
    steps: Vec<Point>,
}

impl From<Solution<Point>> for Path {
    fn from(solution: Solution<Point>) -> Self {
        Self {
            steps: solution.into_path(),
        }
    }
}

impl Path {
    /// Where this path started
    pub fn origin(&self) -> &Point {
        &self.steps[0]
    }

    /// Where this path ends
    pub fn destination(&self) -> &Point {
        &self.steps[self.steps.len() - 1]
    }

    /// How many steps this path takes.
    pub fn distance(&self) -> usize {
        self.steps.len() - 1
    }
}

impl Deref for Path {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
