//! Generalized search algorithms over implicit state graphs.
//!
//! A search is described by an initial state, a goal test and a
//! successor function. Depth-first ([dfs]), breadth-first ([bfs])
//! and A* ([astar]) searches share a single driver,
//! [SearchAlgorithm](algorithm::SearchAlgorithm), and differ only in
//! their [Frontier] and [Cache]:
//!
//! | search  | frontier       | cache         |
//! |---------|----------------|---------------|
//! | [dfs]   | [DepthQueue]   | [ExploredSet] |
//! | [bfs]   | [BreadthQueue] | [ExploredSet] |
//! | [astar] | [AStarQueue]   | [CostMap]     |
//!
//! Searches return a [Solution], from which the path back to the
//! initial state can be reconstructed.

pub mod algorithm;
mod errors;
pub mod heuristic;
pub mod node;
mod path;
mod statistics;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use path::{Outcome, Solution};
pub use statistics::SearchStatistics;
pub use traits::SearchProblem;
pub use traits::SearchState;

pub use algorithm::astar::{self, astar, AStarQueue, AStarSearcher};
pub use algorithm::basic::bfs::{self, bfs, BreadthFirstSearcher, BreadthQueue};
pub use algorithm::basic::dfs::{self, dfs, DepthFirstSearcher, DepthQueue};
pub use algorithm::cache::{Admission, Cache, CostMap, ExploredSet};
pub use algorithm::{Algorithm, Candidate, Estimate, Frontier, SearchOptions, UnknownAlgorithm};
pub use algorithm::{SearchAlgorithm, UNIT_COST};
pub use heuristic::{
    euclidean_distance, manhattan_distance, Coordinate, Heuristic, UnknownHeuristic,
};
pub use node::{NodeId, SearchNode, SearchTree};
