//! Rectangular mazes of open and blocked cells.
//!
//! A maze has a single start and a single goal, and can be
//! searched with any of the searcher algorithms either as a
//! [Map] or as a [SearchProblem].

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use searcher::SearchProblem;
use thiserror::Error;

use super::map::Map;
use super::path::Path;
use super::Point;
use crate::Position;

/// Fraction of cells blocked in a random maze, unless told otherwise.
pub const DEFAULT_SPARSENESS: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Blocked,
    Start,
    Goal,
    Path,
}

impl Cell {
    pub fn is_blocked(self) -> bool {
        self == Cell::Blocked
    }
}

impl TryFrom<char> for Cell {
    type Error = MazeError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            ' ' | '.' => Ok(Cell::Empty),
            'X' | '#' => Ok(Cell::Blocked),
            'S' => Ok(Cell::Start),
            'G' => Ok(Cell::Goal),
            '*' => Ok(Cell::Path),
            _ => Err(MazeError::UnknownCell(value)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Blocked => write!(f, "X"),
            Cell::Start => write!(f, "S"),
            Cell::Goal => write!(f, "G"),
            Cell::Path => write!(f, "*"),
        }
    }
}

/// Errors when building or modifying a maze.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("A maze needs at least one row and one column")]
    Empty,

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown maze cell: {0:?}")]
    UnknownCell(char),

    #[error("Maze has no {0:?} cell")]
    MissingMarker(Cell),

    #[error("Maze has more than one {0:?} cell")]
    DuplicateMarker(Cell),

    #[error("{0} is outside the maze")]
    OutOfBounds(Point),

    #[error("Can't block the start or goal at {0}")]
    Reserved(Point),

    #[error("A maze of {rows} by {columns} cells is too large")]
    TooLarge { rows: usize, columns: usize },

    #[error("Sparseness must be between 0 and 1, got {0}")]
    InvalidSparseness(f64),
}

type MazeResult<T> = Result<T, MazeError>;

/// A grid of cells, stored row by row.
///
/// Points address the maze as `x` for the column and `y` for the row,
/// with `(0, 0)` in the top left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    start: Point,
    goal: Point,
}

impl Maze {
    /// An open maze with nothing blocked.
    pub fn new(rows: usize, columns: usize, start: Point, goal: Point) -> MazeResult<Self> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::Empty);
        }

        // Every cell must be addressable by a Point.
        let size = rows
            .checked_mul(columns)
            .filter(|&size| size <= Position::MAX as usize)
            .ok_or(MazeError::TooLarge { rows, columns })?;

        let mut maze = Maze {
            rows,
            columns,
            cells: vec![Cell::Empty; size],
            start,
            goal,
        };
        maze.set(start, Cell::Start)?;
        maze.set(goal, Cell::Goal)?;
        Ok(maze)
    }

    /// A maze where each cell is blocked with probability `sparseness`.
    ///
    /// The start and goal are always left open.
    pub fn random<R>(
        rows: usize,
        columns: usize,
        sparseness: f64,
        start: Point,
        goal: Point,
        rng: &mut R,
    ) -> MazeResult<Self>
    where
        R: Rng + ?Sized,
    {
        if !(0.0..=1.0).contains(&sparseness) {
            return Err(MazeError::InvalidSparseness(sparseness));
        }

        let mut maze = Self::new(rows, columns, start, goal)?;
        for cell in maze.cells.iter_mut() {
            if *cell == Cell::Empty && rng.gen::<f64>() < sparseness {
                *cell = Cell::Blocked;
            }
        }
        Ok(maze)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn goal_test(&self, location: &Point) -> bool {
        *location == self.goal
    }

    fn index(&self, location: Point) -> Option<usize> {
        if location.x < 0 || location.y < 0 {
            return None;
        }
        let (x, y) = (location.x as usize, location.y as usize);
        if x >= self.columns || y >= self.rows {
            return None;
        }
        Some(y * self.columns + x)
    }

    /// The cell at this location, if it is inside the maze.
    pub fn get(&self, location: Point) -> Option<Cell> {
        self.index(location).map(|i| self.cells[i])
    }

    fn set(&mut self, location: Point, cell: Cell) -> MazeResult<()> {
        let index = self
            .index(location)
            .ok_or(MazeError::OutOfBounds(location))?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Block a single cell.
    pub fn block(&mut self, location: Point) -> MazeResult<()> {
        if location == self.start || location == self.goal {
            return Err(MazeError::Reserved(location));
        }
        self.set(location, Cell::Blocked)
    }

    /// Mark the open cells along a path.
    pub fn mark(&mut self, path: &Path) {
        for point in path.iter() {
            if let Some(i) = self.index(*point) {
                if self.cells[i] == Cell::Empty {
                    self.cells[i] = Cell::Path;
                }
            }
        }
    }

    /// Undo [mark](Self::mark) for a path.
    pub fn clear(&mut self, path: &Path) {
        for point in path.iter() {
            if let Some(i) = self.index(*point) {
                if self.cells[i] == Cell::Path {
                    self.cells[i] = Cell::Empty;
                }
            }
        }
    }

    /// Count the cells of a given kind.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }
}

impl Map for Maze {
    fn is_traversable(&self, location: Point) -> bool {
        self.get(location).map_or(false, |c| !c.is_blocked())
    }
}

impl SearchProblem for Maze {
    type State = Point;

    fn initial(&self) -> Point {
        self.start
    }

    fn is_goal(&self, state: &Point) -> bool {
        self.goal_test(state)
    }

    fn successors(&self, state: &Point) -> Vec<Point> {
        Map::successors(self, *state)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.columns).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut columns = None;
        let mut start = None;
        let mut goal = None;

        let lines = s.lines().map(|l| l.trim_end_matches('\r')).filter(|l| !l.is_empty());
        for (y, line) in lines.enumerate() {
            let found = line.chars().count();
            let expected = *columns.get_or_insert(found);
            if found != expected {
                return Err(MazeError::RaggedRow {
                    row: y,
                    expected,
                    found,
                });
            }

            for (x, c) in line.chars().enumerate() {
                let cell = Cell::try_from(c)?;
                let marker = match cell {
                    Cell::Start => &mut start,
                    Cell::Goal => &mut goal,
                    _ => {
                        cells.push(cell);
                        continue;
                    }
                };
                if marker.is_some() {
                    return Err(MazeError::DuplicateMarker(cell));
                }
                *marker = Some(Point::new(x as Position, y as Position));
                cells.push(cell);
            }
        }

        let columns = columns.ok_or(MazeError::Empty)?;
        if columns == 0 {
            return Err(MazeError::Empty);
        }

        Ok(Maze {
            rows: cells.len() / columns,
            columns,
            cells,
            start: start.ok_or(MazeError::MissingMarker(Cell::Start))?,
            goal: goal.ok_or(MazeError::MissingMarker(Cell::Goal))?,
        })
    }
}
