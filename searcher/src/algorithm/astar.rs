use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::default::Default;

use ordered_float::OrderedFloat;

use super::cache::CostMap;
use super::{Candidate, Estimate, Frontier, SearchAlgorithm};
use crate::path::{Outcome, Solution};
use crate::traits::SearchState;

/// Heap entry ordered so that the smallest estimate,
/// and then the earliest insertion, is the greatest element.
#[derive(Debug)]
struct Ranked<T> {
    estimate: Reverse<OrderedFloat<f64>>,
    sequence: Reverse<u64>,
    item: T,
}

impl<T> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ranked<T> {}

impl<T> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimate
            .cmp(&other.estimate)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl<T> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority frontier which pops the item with the lowest
/// [Estimate] first.
///
/// Items with equal estimates come out in the order they were
/// pushed. Estimates are compared as [OrderedFloat], so a NaN
/// estimate sorts after every number instead of corrupting the heap.
#[derive(Debug)]
pub struct AStarQueue<T> {
    queue: BinaryHeap<Ranked<T>>,
    pushed: u64,
}

impl<T> Default for AStarQueue<T> {
    fn default() -> Self {
        AStarQueue {
            queue: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl<T> Frontier for AStarQueue<T>
where
    T: Estimate,
{
    type Item = T;

    fn pop(&mut self) -> Option<Self::Item> {
        self.queue.pop().map(|r| r.item)
    }

    fn push(&mut self, item: Self::Item) {
        self.queue.push(Ranked {
            estimate: Reverse(OrderedFloat(item.estimate())),
            sequence: Reverse(self.pushed),
            item,
        });
        self.pushed += 1;
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type AStarSearcher<S> = SearchAlgorithm<S, AStarQueue<Candidate>, CostMap<S>>;

pub fn build<S>(origin: S) -> AStarSearcher<S>
where
    S: SearchState,
{
    SearchAlgorithm::new(origin)
}

/// A* search, guided by a heuristic estimate of the remaining cost.
///
/// Every transition costs [UNIT_COST](super::UNIT_COST). When the heuristic is
/// admissible (never overestimates) the path found has the fewest
/// transitions. A state is expanded again whenever a cheaper path
/// to it turns up.
pub fn astar<S, G, N, I, H>(
    initial: S,
    goal_test: G,
    successors: N,
    heuristic: H,
) -> Option<Solution<S>>
where
    S: SearchState,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
    H: Fn(&S) -> f64,
{
    // Without limits the search cannot fail.
    build(initial)
        .run(goal_test, successors, heuristic)
        .ok()
        .and_then(Outcome::into_solution)
}
