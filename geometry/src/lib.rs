#![deny(clippy::all)]

//! Two dimensional grids, and searching for paths across them.

pub mod coord2d;

/// Data type used for coordinates
pub type Position = i32;
