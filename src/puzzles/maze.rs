use anyhow::Error;
use geometry::coord2d::maze::Maze;
use geometry::coord2d::pathfinder::{Map, Path};
use geometry::coord2d::Point;
use geometry::Position;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use searcher::Algorithm;

use std::io::Read;

use crate::{BoxedRead, Options};

/// Build a random maze from the command line options. Without a
/// start or goal, they go in the top left and bottom right corners.
fn generate(options: &Options) -> Result<Maze, Error> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let start = options.start.unwrap_or_else(Point::origin);
    let goal = options.goal.unwrap_or_else(|| {
        Point::new(
            options.columns.saturating_sub(1) as Position,
            options.rows.saturating_sub(1) as Position,
        )
    });
    let maze = Maze::random(
        options.rows,
        options.columns,
        options.sparseness,
        start,
        goal,
        &mut rng,
    )?;
    Ok(maze)
}

/// Solve the maze with one algorithm, returning the marked up maze
/// when a path was found.
fn solve(
    maze: &Maze,
    algorithm: Algorithm,
    options: &Options,
) -> Result<Option<(Path, Maze)>, Error> {
    let outcome = maze
        .pathfinder()
        .algorithm(algorithm)
        .heuristic(options.heuristic)
        .options(options.search.clone())
        .search(maze.start(), maze.goal())?;
    info!("{}: {}", algorithm, outcome.statistics());

    Ok(outcome.into_solution().map(|solution| {
        let path = Path::from(solution);
        let mut marked = maze.clone();
        marked.mark(&path);
        (path, marked)
    }))
}

pub(crate) fn main(
    input: Option<BoxedRead>,
    options: &Options,
) -> ::std::result::Result<(), Error> {
    let maze = match input {
        Some(mut reader) => {
            let mut buffer = String::new();
            reader.read_to_string(&mut buffer)?;
            buffer.parse::<Maze>()?
        }
        None => generate(options)?,
    };

    println!("{}", maze);

    for algorithm in options.algorithms.iter().cloned() {
        println!("\n{}", "-".repeat(maze.columns().max(30)));
        match solve(&maze, algorithm, options) {
            Ok(Some((path, marked))) => {
                println!("{}: {} steps", algorithm, path.distance());
                println!("{}", marked);
            }
            Ok(None) => println!("{}: No solution found", algorithm),
            Err(e) => {
                warn!("{} gave up: {}", algorithm, e);
                println!("{}: {}", algorithm, e);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use searcher::SearchOptions;

    #[test]
    fn generated_corners() {
        let options = Options {
            seed: Some(11),
            sparseness: 0.0,
            ..Options::default()
        };
        let maze = generate(&options).unwrap();
        assert_eq!(maze.start(), Point::new(0, 0));
        assert_eq!(maze.goal(), Point::new(9, 9));
        assert_eq!(generate(&options).unwrap(), maze);
    }

    #[test]
    fn chosen_corners() {
        let options = Options {
            seed: Some(11),
            sparseness: 0.0,
            start: Some(Point::new(2, 3)),
            goal: Some(Point::new(7, 1)),
            ..Options::default()
        };
        let maze = generate(&options).unwrap();
        assert_eq!(maze.start(), Point::new(2, 3));
        assert_eq!(maze.goal(), Point::new(7, 1));

        let (path, _) = solve(&maze, Algorithm::AStar, &options).unwrap().unwrap();
        assert_eq!(path.distance(), 7);

        let outside = Options {
            goal: Some(Point::new(10, 10)),
            ..Options::default()
        };
        assert!(generate(&outside).is_err());
    }

    #[test]
    fn oversized() {
        let options = Options {
            rows: 1 << 33,
            columns: 1 << 31,
            ..Options::default()
        };
        assert!(generate(&options).is_err());
    }

    #[test]
    fn every_algorithm() {
        let options = Options {
            seed: Some(3),
            sparseness: 0.0,
            ..Options::default()
        };
        let maze = generate(&options).unwrap();

        for algorithm in Algorithm::all() {
            let (path, marked) = solve(&maze, algorithm, &options).unwrap().unwrap();
            assert_eq!(path.origin(), &maze.start());
            assert_eq!(path.destination(), &maze.goal());
            assert!(marked.to_string().contains('*'));
            if algorithm != Algorithm::DepthFirst {
                assert_eq!(path.distance(), 18);
            }
        }
    }

    #[test]
    fn gives_up() {
        let options = Options {
            seed: Some(3),
            sparseness: 0.0,
            search: SearchOptions {
                step_limit: Some(3),
                ..SearchOptions::default()
            },
            ..Options::default()
        };
        let maze = generate(&options).unwrap();
        assert!(solve(&maze, Algorithm::BreadthFirst, &options).is_err());
    }

    #[test]
    fn from_input() {
        let input: BoxedRead = Box::new("S.#\n#..\n#.G".as_bytes());
        assert!(main(Some(input), &Options::default()).is_ok());

        let input: BoxedRead = Box::new("S.?\n..G".as_bytes());
        assert!(main(Some(input), &Options::default()).is_err());
    }
}
