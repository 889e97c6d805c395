//! Pathfinding in two dimensions using the searcher algorithms.
use std::clone::Clone;

use searcher::{Algorithm, Heuristic, Outcome, SearchOptions, SearchResult};

pub use super::map::Map;
pub use super::path::Path;
use super::Point;

/// Implements pathfinding for a map.
///
/// Defaults to an unlimited A* search guided by the
/// Manhattan distance, which finds a shortest path.
#[derive(Debug, Clone)]
pub struct Pathfinder<'m, M> {
    map: &'m M,
    algorithm: Algorithm,
    heuristic: Heuristic,
    options: SearchOptions,
}

impl<'m, M> Pathfinder<'m, M>
where
    M: Map,
{
    /// Construct a new pathfinder.
    pub(crate) fn new(map: &'m M) -> Self {
        Self {
            map,
            algorithm: Algorithm::AStar,
            heuristic: Heuristic::Manhattan,
            options: SearchOptions::default(),
        }
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Heuristic used when the algorithm is [Algorithm::AStar].
    pub fn heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Search for a path, reporting statistics and limits.
    pub fn search(&self, origin: Point, destination: Point) -> SearchResult<Outcome<Point>> {
        self.algorithm.search(
            origin,
            |p| *p == destination,
            |p| self.map.successors(*p),
            self.heuristic.towards(destination),
            self.options.clone(),
        )
    }

    /// Find a path between the origin and destination given.
    ///
    /// When no path exists, the search is exhausted or
    /// the origin can't be stood on, return None.
    pub fn find_path(&self, origin: Point, destination: Point) -> Option<Path> {
        if !self.map.is_traversable(origin) {
            return None;
        }

        self.search(origin, destination)
            .ok()?
            .into_solution()
            .map(Path::from)
    }
}

#[cfg(test)]
mod test {

    use super::super::map::helpers::*;

    use super::*;

    const MULTI: &str = "
        ###############
        #.............#
        #.###########.#
        #.#.........#.#
        #.#.#.#####.#.#
        #...#.....#...#
        #####.###.#####
        #.........#...#
        #.#######.#.#.#
        #.#.....#...#.#
        #.#.###.#####.#
        #...#.........#
        ###############
    ";

    #[test]
    fn simple() {
        let map: SimpleMap = vec![(0, 0).into()].into();

        let path = map.path(Point::origin(), Point::origin()).unwrap();
        assert_eq!(path.to_vec(), vec![Point::origin()]);
        assert_eq!(path.distance(), 0);
    }

    #[test]
    fn blocked_origin() {
        let map: SimpleMap = vec![(0, 0).into()].into();
        assert_eq!(map.path((1, 0).into(), (0, 0).into()), None);
    }

    #[test]
    fn every_algorithm_arrives() {
        let map: SimpleMap = MULTI.trim().parse().unwrap();
        let origin = Point::new(1, 1);
        let destination = Point::new(13, 11);

        let shortest = map.path(origin, destination).unwrap();
        for algorithm in Algorithm::all() {
            let path = map
                .pathfinder()
                .algorithm(algorithm)
                .find_path(origin, destination)
                .unwrap();
            assert_eq!(path.origin(), &origin);
            assert_eq!(path.destination(), &destination);
            assert!(path.windows(2).all(|w| w[0].adjacent().any(|p| p == w[1])));
            assert!(path.iter().all(|p| map.is_traversable(*p)));
            assert!(path.distance() >= shortest.distance());
        }
    }

    #[test]
    fn heuristics_agree() {
        let map: SimpleMap = MULTI.trim().parse().unwrap();
        let origin = Point::new(1, 1);
        let destination = Point::new(13, 11);

        let bfs = map
            .pathfinder()
            .algorithm(Algorithm::BreadthFirst)
            .find_path(origin, destination)
            .unwrap();
        let euclid = map
            .pathfinder()
            .heuristic(Heuristic::Euclidean)
            .find_path(origin, destination)
            .unwrap();
        let manhattan = map.path(origin, destination).unwrap();

        assert_eq!(euclid.distance(), bfs.distance());
        assert_eq!(manhattan.distance(), bfs.distance());
    }

    #[test]
    fn step_limit() {
        let map: OpenMap = Vec::new().into();
        let options = SearchOptions {
            step_limit: Some(50),
            ..SearchOptions::default()
        };

        let finder = map
            .pathfinder()
            .algorithm(Algorithm::DepthFirst)
            .options(options);
        assert!(finder.search(Point::origin(), Point::new(1000, 1000)).is_err());
        assert_eq!(finder.find_path(Point::origin(), Point::new(1000, 1000)), None);
    }
}
