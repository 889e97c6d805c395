//! Distance heuristics for states laid out on a plane.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A state with a position in two dimensions.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

macro_rules! tuple_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for ($t, $t) {
                fn x(&self) -> f64 {
                    self.0 as f64
                }

                fn y(&self) -> f64 {
                    self.1 as f64
                }
            }
        )*
    };
}

tuple_coordinate!(i32, i64, usize, f64);

/// Straight line distance to `goal`.
pub fn euclidean_distance<C>(goal: C) -> impl Fn(&C) -> f64
where
    C: Coordinate,
{
    move |c: &C| {
        let dx = c.x() - goal.x();
        let dy = c.y() - goal.y();
        (dx * dx + dy * dy).sqrt()
    }
}

/// Distance to `goal` moving only along the axes.
pub fn manhattan_distance<C>(goal: C) -> impl Fn(&C) -> f64
where
    C: Coordinate,
{
    move |c: &C| (c.x() - goal.x()).abs() + (c.y() - goal.y()).abs()
}

/// No information at all about the remaining cost.
pub fn zero<S>(_: &S) -> f64 {
    0.0
}

/// Error when parsing a [Heuristic] by name.
#[derive(Debug, Error)]
#[error("Unknown heuristic: {0}")]
pub struct UnknownHeuristic(String);

/// Named distance heuristics, for choosing one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Euclidean,
    Manhattan,
}

impl Heuristic {
    /// Build the heuristic function towards `goal`.
    pub fn towards<C>(self, goal: C) -> Box<dyn Fn(&C) -> f64>
    where
        C: Coordinate + 'static,
    {
        match self {
            Heuristic::Euclidean => Box::new(euclidean_distance(goal)),
            Heuristic::Manhattan => Box::new(manhattan_distance(goal)),
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Manhattan
    }
}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" | "euclid" => Ok(Heuristic::Euclidean),
            "manhattan" | "taxicab" => Ok(Heuristic::Manhattan),
            _ => Err(UnknownHeuristic(s.to_string())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Heuristic::Euclidean => write!(f, "euclidean"),
            Heuristic::Manhattan => write!(f, "manhattan"),
        }
    }
}
