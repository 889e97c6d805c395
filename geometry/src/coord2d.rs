//! Coordinate work in two dimensions.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use searcher::Coordinate;
use thiserror::Error;

use crate::Position;

pub mod map;
pub mod maze;
pub mod path;
pub mod pathfinder;

/// A movement direction in two dimensions.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Right,
    Direction::Down,
];

impl Direction {
    /// Enumertates all directions of movement in "reading order",
    /// i.e. such that the resulting points are in reading order
    /// from the current position.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }
}

/// A location in 2D space.
///
/// On a grid, `x` is the column and `y` is the row,
/// with rows counting downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Position,
    pub y: Position,
}

impl Point {
    /// Build a new point from coordinates.
    pub fn new(x: Position, y: Position) -> Self {
        Self { x, y }
    }

    /// Returns a point at (0, 0)
    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Step in a given direction.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
        }
    }

    /// Iterate over all adjacent points.
    pub fn adjacent(self) -> impl Iterator<Item = Self> {
        Direction::all().map(move |d| self.step(d))
    }
}

impl Coordinate for Point {
    fn x(&self) -> f64 {
        f64::from(self.x)
    }

    fn y(&self) -> f64 {
        f64::from(self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(Position, Position)> for Point {
    fn from(coordinates: (Position, Position)) -> Self {
        Self {
            x: coordinates.0,
            y: coordinates.1,
        }
    }
}

/// Error when parsing a point from string.
#[derive(Debug, Error)]
pub enum ParsePointError {
    #[error("Invalid Point: {}", _0)]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber,
}

impl From<::std::num::ParseIntError> for ParsePointError {
    fn from(_: ::std::num::ParseIntError) -> Self {
        ParsePointError::InvalidNumber
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^\s*(?P<x>-?\d+)\s*,\s*(?P<y>-?\d+)\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParsePointError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::from((cap["x"].parse()?, cap["y"].parse()?)))
    }
}
