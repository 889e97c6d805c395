//! Puzzles which can be solved from the command line.

pub mod maze;
pub mod missionaries;
