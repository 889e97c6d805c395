pub use bfs::bfs;
pub use dfs::dfs;

pub mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use crate::algorithm::cache::ExploredSet;
    use crate::algorithm::{Candidate, Frontier, SearchAlgorithm};
    use crate::heuristic::zero;
    use crate::path::{Outcome, Solution};
    use crate::traits::SearchState;

    /// First-in, first-out frontier.
    #[derive(Debug)]
    pub struct BreadthQueue<T> {
        queue: VecDeque<T>,
    }

    impl<T> Frontier for BreadthQueue<T> {
        type Item = T;

        fn pop(&mut self) -> Option<Self::Item> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Item) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<T> Default for BreadthQueue<T> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    pub type BreadthFirstSearcher<S> = SearchAlgorithm<S, BreadthQueue<Candidate>, ExploredSet<S>>;

    pub fn build<S>(origin: S) -> BreadthFirstSearcher<S>
    where
        S: SearchState,
    {
        SearchAlgorithm::new(origin)
    }

    /// Breadth-first search, where ties are broken by the order
    /// of the states returned by `successors`.
    ///
    /// Returns the first goal reached, which is one with the fewest
    /// transitions from `initial`.
    pub fn bfs<S, G, N, I>(initial: S, goal_test: G, successors: N) -> Option<Solution<S>>
    where
        S: SearchState,
        G: Fn(&S) -> bool,
        N: Fn(&S) -> I,
        I: IntoIterator<Item = S>,
    {
        // Without limits the search cannot fail.
        build(initial)
            .run(goal_test, successors, zero)
            .ok()
            .and_then(Outcome::into_solution)
    }
}

pub mod dfs {
    use std::default::Default;

    use crate::algorithm::cache::ExploredSet;
    use crate::algorithm::{Candidate, Frontier, SearchAlgorithm};
    use crate::heuristic::zero;
    use crate::path::{Outcome, Solution};
    use crate::traits::SearchState;

    /// Last-in, first-out frontier.
    #[derive(Debug)]
    pub struct DepthQueue<T> {
        stack: Vec<T>,
    }

    impl<T> Default for DepthQueue<T> {
        fn default() -> Self {
            DepthQueue { stack: Vec::new() }
        }
    }

    impl<T> Frontier for DepthQueue<T> {
        type Item = T;

        fn pop(&mut self) -> Option<Self::Item> {
            self.stack.pop()
        }

        fn push(&mut self, item: Self::Item) {
            self.stack.push(item);
        }

        fn len(&self) -> usize {
            self.stack.len()
        }
    }

    pub type DepthFirstSearcher<S> = SearchAlgorithm<S, DepthQueue<Candidate>, ExploredSet<S>>;

    pub fn build<S>(origin: S) -> DepthFirstSearcher<S>
    where
        S: SearchState,
    {
        SearchAlgorithm::new(origin)
    }

    /// Depth-first search. The last state returned by `successors`
    /// is the first one explored.
    ///
    /// The path found is not necessarily the shortest.
    pub fn dfs<S, G, N, I>(initial: S, goal_test: G, successors: N) -> Option<Solution<S>>
    where
        S: SearchState,
        G: Fn(&S) -> bool,
        N: Fn(&S) -> I,
        I: IntoIterator<Item = S>,
    {
        // Without limits the search cannot fail.
        build(initial)
            .run(goal_test, successors, zero)
            .ok()
            .and_then(Outcome::into_solution)
    }
}

#[cfg(test)]
mod test {
    use super::bfs::BreadthQueue;
    use super::dfs::DepthQueue;
    use super::*;
    use crate::algorithm::Frontier;

    /// DFS explores the last successor first, which here is the long way:
    ///
    /// ```text
    /// 0 -> 1 -> 9
    /// 0 -> 4 -> 5 -> 6 -> 9
    /// ```
    fn detour(n: &u32) -> Vec<u32> {
        match n {
            0 => vec![1, 4],
            1 => vec![9],
            4 => vec![5],
            5 => vec![6],
            6 => vec![9],
            _ => vec![],
        }
    }

    fn grid(size: i32) -> impl Fn(&(i32, i32)) -> Vec<(i32, i32)> {
        move |&(x, y): &(i32, i32)| {
            vec![(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
                .into_iter()
                .filter(|&(x, y)| x >= 0 && y >= 0 && x < size && y < size)
                .collect()
        }
    }

    #[test]
    fn queue_order() {
        let mut stack = DepthQueue::default();
        let mut queue = BreadthQueue::default();
        for i in 1..4 {
            stack.push(i);
            queue.push(i);
        }
        assert_eq!(stack.len(), 3);

        let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
        assert_eq!(popped, vec![3, 2, 1]);
        let popped: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
        assert_eq!(popped, vec![1, 2, 3]);

        assert!(stack.is_empty());
        assert!(queue.is_empty());
    }

    #[test_log::test]
    fn dfs_takes_the_long_way() {
        let solution = dfs(0, |n| *n == 9, detour).unwrap();
        assert_eq!(solution.path(), vec![0, 4, 5, 6, 9]);
        assert_eq!(solution.len(), 4);
    }

    #[test_log::test]
    fn bfs_takes_the_short_way() {
        let solution = bfs(0, |n| *n == 9, detour).unwrap();
        assert_eq!(solution.path(), vec![0, 1, 9]);
        assert_eq!(solution.cost(), 2.0);
    }

    #[test_log::test]
    fn start_is_goal() {
        let solution = dfs(4, |n| *n == 4, detour).unwrap();
        assert_eq!(solution.path(), vec![4]);
        assert_eq!(solution.len(), 0);
    }

    #[test_log::test]
    fn bfs_open_grid() {
        let solution = bfs((0, 0), |p| *p == (9, 9), grid(10)).unwrap();
        let path = solution.path();
        assert_eq!(path.len(), 19);
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(9, 9)));
    }

    #[test_log::test]
    fn dfs_open_grid_is_valid() {
        let solution = dfs((0, 0), |p| *p == (9, 9), grid(10)).unwrap();
        let path = solution.path();
        assert!(path.len() >= 19);
        for pair in path.windows(2) {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            assert_eq!((x0 - x1).abs() + (y0 - y1).abs(), 1);
        }
    }

    #[test_log::test]
    fn unreachable() {
        let goal = |n: &u32| *n == 7;
        assert!(dfs(0, goal, detour).is_none());
        assert!(bfs(0, goal, detour).is_none());
    }

    #[test_log::test]
    fn exhaustion_visits_each_state_once() {
        let outcome = bfs::build((0, 0))
            .run(|_| false, grid(5), crate::heuristic::zero)
            .unwrap();
        assert!(outcome.solution().is_none());
        assert_eq!(outcome.statistics().expanded(), 25);
        assert_eq!(outcome.statistics().generated(), 25);

        let outcome = dfs::build((0, 0))
            .run(|_| false, grid(5), crate::heuristic::zero)
            .unwrap();
        assert_eq!(outcome.statistics().expanded(), 25);
        assert_eq!(outcome.statistics().reopened(), 0);
    }

    #[test_log::test]
    fn deterministic() {
        let first = dfs((0, 0), |p| *p == (4, 3), grid(6)).unwrap();
        let second = dfs((0, 0), |p| *p == (4, 3), grid(6)).unwrap();
        assert_eq!(first.path(), second.path());
    }

    #[test_log::test]
    fn bfs_deterministic() {
        let first = bfs((0, 0), |p| *p == (4, 3), grid(6)).unwrap();
        let second = bfs((0, 0), |p| *p == (4, 3), grid(6)).unwrap();
        assert_eq!(first.path(), second.path());
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn step_limit() {
        let mut searcher = bfs::build(0u64);
        searcher.set_limit(10);
        let result = searcher.run(|_| false, |n| vec![n + 1], crate::heuristic::zero);
        assert!(matches!(
            result,
            Err(crate::SearchError::StepLimitExhausted(10))
        ));
    }
}
