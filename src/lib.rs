#![deny(clippy::all)]

use clap::{value_t, App, Arg, ArgMatches};

use geometry::coord2d::Point;
use lazy_static::lazy_static;
use log::debug;
use searcher::{Algorithm, Heuristic, SearchOptions};
use thiserror::Error;

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::time::Duration;

pub mod puzzles;

type Error = anyhow::Error;
type BoxedRead = Box<dyn ::std::io::Read + 'static>;
type Actor =
    Box<dyn (Fn(Option<BoxedRead>, &Options) -> Result<(), Error>) + Send + Sync + 'static>;

lazy_static! {
    static ref SOLVERS: HashMap<&'static str, Actor> = {
        let mut s: HashMap<&'static str, Actor> = HashMap::new();
        s.insert("maze", Box::new(puzzles::maze::main));
        s.insert("missionaries", Box::new(puzzles::missionaries::main));
        s
    };
}

/// Settings shared by every puzzle, collected from the command line.
#[derive(Debug, Clone)]
pub struct Options {
    /// Searches to run, in order.
    pub algorithms: Vec<Algorithm>,
    pub heuristic: Heuristic,
    pub rows: usize,
    pub columns: usize,
    pub sparseness: f64,
    pub seed: Option<u64>,
    /// Start of a random maze, the top left corner when not given.
    pub start: Option<Point>,
    /// Goal of a random maze, the bottom right corner when not given.
    pub goal: Option<Point>,
    pub search: SearchOptions,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            algorithms: Algorithm::all().collect(),
            heuristic: Heuristic::default(),
            rows: 10,
            columns: 10,
            sparseness: geometry::coord2d::maze::DEFAULT_SPARSENESS,
            seed: None,
            start: None,
            goal: None,
            search: SearchOptions::default(),
        }
    }
}

impl Options {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let algorithms = match matches.value_of("algorithm") {
            None | Some("all") => Algorithm::all().collect(),
            Some(name) => vec![name.parse::<Algorithm>()?],
        };

        let heuristic = match matches.value_of("heuristic") {
            None => Heuristic::default(),
            Some(name) => name.parse()?,
        };

        let seed = if matches.is_present("seed") {
            Some(value_t!(matches, "seed", u64)?)
        } else {
            None
        };

        let start = match matches.value_of("start") {
            None => None,
            Some(point) => Some(point.parse::<Point>()?),
        };

        let goal = match matches.value_of("goal") {
            None => None,
            Some(point) => Some(point.parse::<Point>()?),
        };

        let step_limit = if matches.is_present("step-limit") {
            Some(value_t!(matches, "step-limit", usize)?)
        } else {
            None
        };

        let time_limit = if matches.is_present("time-limit") {
            let seconds = value_t!(matches, "time-limit", f64)?;
            if !seconds.is_finite() || seconds < 0.0 {
                return Err(AppError::InvalidArgument("time-limit", seconds.to_string()).into());
            }
            Some(Duration::from_secs_f64(seconds))
        } else {
            None
        };

        let sparseness = value_t!(matches, "sparseness", f64)?;
        if !(0.0..=1.0).contains(&sparseness) {
            return Err(AppError::InvalidArgument("sparseness", sparseness.to_string()).into());
        }

        Ok(Options {
            algorithms,
            heuristic,
            rows: value_t!(matches, "rows", usize)?,
            columns: value_t!(matches, "columns", usize)?,
            sparseness,
            seed,
            start,
            goal,
            search: SearchOptions {
                step_limit,
                time_limit,
                ..SearchOptions::default()
            },
        })
    }
}

pub fn app() -> App<'static, 'static> {
    App::new("State Space Search")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Solve puzzles with depth-first, breadth-first and A* search")
        .arg(
            Arg::with_name("puzzle")
                .value_name("PUZZLE")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("algorithm")
                .long("algorithm")
                .short("a")
                .takes_value(true)
                .help("dfs, bfs, astar or all"),
        )
        .arg(
            Arg::with_name("heuristic")
                .long("heuristic")
                .takes_value(true)
                .help("manhattan or euclidean, used by astar"),
        )
        .arg(
            Arg::with_name("rows")
                .long("rows")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("columns")
                .long("columns")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("sparseness")
                .long("sparseness")
                .takes_value(true)
                .default_value("0.2")
                .help("Fraction of random maze cells to block"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("Seed for random mazes"),
        )
        .arg(
            Arg::with_name("start")
                .long("start")
                .takes_value(true)
                .value_name("X,Y")
                .help("Start of a random maze"),
        )
        .arg(
            Arg::with_name("goal")
                .long("goal")
                .takes_value(true)
                .value_name("X,Y")
                .help("Goal of a random maze"),
        )
        .arg(
            Arg::with_name("step-limit")
                .long("step-limit")
                .takes_value(true)
                .help("Give up after expanding this many states"),
        )
        .arg(
            Arg::with_name("time-limit")
                .long("time-limit")
                .takes_value(true)
                .help("Give up after this many seconds"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log search progress, repeat for more detail"),
        )
}

pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let puzzle = matches.value_of("puzzle").unwrap_or_default();
    let options = Options::from_matches(&matches)?;
    debug!("Solving {} with {:?}", puzzle, options);

    let reader = get_input_reader(matches.value_of("input"))?;

    match SOLVERS.get(puzzle) {
        None => Err(AppError::PuzzleNotFound(puzzle.to_string()).into()),
        Some(actor) => actor(reader, &options),
    }
}

/// Open the named input, where `-` means standard input.
pub fn get_input_reader(filename: Option<&str>) -> Result<Option<BoxedRead>, AppError> {
    let reader: Option<BoxedRead> = match filename {
        Some("-") => Some(Box::new(::std::io::stdin())),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| AppError::InputNotFound(path.to_string(), e))?;
            Some(Box::new(f))
        }
        None => None,
    };
    Ok(reader)
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No puzzle named {0}")]
    PuzzleNotFound(String),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),

    #[error("Invalid value for --{0}: {1}")]
    InvalidArgument(&'static str, String),
}

#[cfg(test)]
mod test {
    use super::*;

    fn options(args: &[&str]) -> Result<Options, Error> {
        let mut argv = vec!["statespace", "maze"];
        argv.extend_from_slice(args);
        let matches = app().get_matches_from_safe(argv)?;
        Options::from_matches(&matches)
    }

    #[test]
    fn defaults() {
        let options = options(&[]).unwrap();
        assert_eq!(options.algorithms, Algorithm::all().collect::<Vec<_>>());
        assert_eq!(options.heuristic, Heuristic::Manhattan);
        assert_eq!((options.rows, options.columns), (10, 10));
        assert_eq!(options.sparseness, 0.2);
        assert!(options.seed.is_none());
        assert!(options.start.is_none());
        assert!(options.goal.is_none());
        assert!(options.search.step_limit.is_none());
        assert!(options.search.time_limit.is_none());
    }

    #[test]
    fn flags() {
        let options = options(&[
            "--algorithm",
            "bfs",
            "--heuristic",
            "euclidean",
            "--rows",
            "5",
            "--seed",
            "42",
            "--start",
            "1,2",
            "--goal",
            "4, 3",
            "--step-limit",
            "100",
            "--time-limit",
            "0.5",
        ])
        .unwrap();
        assert_eq!(options.algorithms, vec![Algorithm::BreadthFirst]);
        assert_eq!(options.heuristic, Heuristic::Euclidean);
        assert_eq!(options.rows, 5);
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.start, Some(Point::new(1, 2)));
        assert_eq!(options.goal, Some(Point::new(4, 3)));
        assert_eq!(options.search.step_limit, Some(100));
        assert_eq!(options.search.time_limit, Some(Duration::from_millis(500)));
    }

    #[test]
    fn invalid_flags() {
        assert!(options(&["--algorithm", "dijkstra"]).is_err());
        assert!(options(&["--heuristic", "chebyshev"]).is_err());
        assert!(options(&["--rows", "many"]).is_err());
        assert!(options(&["--start", "1;2"]).is_err());
        assert!(options(&["--goal", "x,3"]).is_err());
        assert!(options(&["--sparseness", "1.5"]).is_err());
        assert!(options(&["--time-limit", "-1"]).is_err());
    }

    #[test]
    fn missing_input() {
        assert!(matches!(
            get_input_reader(Some("no/such/maze.txt")),
            Err(AppError::InputNotFound(_, _))
        ));
        assert!(get_input_reader(None).unwrap().is_none());
    }

    #[test]
    fn registry() {
        assert!(SOLVERS.contains_key("maze"));
        assert!(SOLVERS.contains_key("missionaries"));
        assert!(!SOLVERS.contains_key("hanoi"));
    }
}
