use anyhow::{anyhow, Error};
use itertools::Itertools;
use log::info;
use searcher::SearchProblem;

use std::fmt;

use crate::{BoxedRead, Options};

/// People the boat can carry on each crossing.
const BOAT_CAPACITY: u8 = 2;

/// Loads the boat can take across, in the order they are tried.
const LOADS: [(u8, u8); 5] = [(2, 0), (1, 0), (0, 2), (0, 1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Bank {
    West,
    East,
}

impl Bank {
    fn opposite(self) -> Self {
        match self {
            Bank::West => Bank::East,
            Bank::East => Bank::West,
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Bank::West => write!(f, "west"),
            Bank::East => write!(f, "east"),
        }
    }
}

/// Who is still waiting on the west bank, and where the boat is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Crossing {
    missionaries: u8,
    cannibals: u8,
    boat: Bank,
}

/// Missionaries and cannibals who must all cross from the west bank
/// to the east, without the cannibals ever outnumbering the
/// missionaries on either bank.
#[derive(Debug, Clone, Copy)]
struct River {
    people: u8,
}

impl River {
    fn east(&self, state: &Crossing) -> (u8, u8) {
        (
            self.people - state.missionaries,
            self.people - state.cannibals,
        )
    }

    fn is_legal(&self, state: &Crossing) -> bool {
        let (em, ec) = self.east(state);
        let west = state.missionaries == 0 || state.missionaries >= state.cannibals;
        let east = em == 0 || em >= ec;
        west && east
    }

    /// Admissible estimate of the crossings left: every crossing
    /// takes at most a boat load off the west bank.
    fn crossings_left(&self, state: &Crossing) -> f64 {
        let waiting = state.missionaries + state.cannibals;
        f64::from(waiting) / f64::from(BOAT_CAPACITY)
    }

    fn describe(&self, state: &Crossing) -> String {
        let (em, ec) = self.east(state);
        format!(
            "west {}M {}C | east {}M {}C | boat {}",
            state.missionaries, state.cannibals, em, ec, state.boat
        )
    }
}

impl SearchProblem for River {
    type State = Crossing;

    fn initial(&self) -> Crossing {
        Crossing {
            missionaries: self.people,
            cannibals: self.people,
            boat: Bank::West,
        }
    }

    fn is_goal(&self, state: &Crossing) -> bool {
        state.missionaries == 0 && state.cannibals == 0
    }

    fn successors(&self, state: &Crossing) -> Vec<Crossing> {
        let (em, ec) = self.east(state);
        LOADS
            .iter()
            .filter_map(|&(m, c)| match state.boat {
                Bank::West if state.missionaries >= m && state.cannibals >= c => Some(Crossing {
                    missionaries: state.missionaries - m,
                    cannibals: state.cannibals - c,
                    boat: state.boat.opposite(),
                }),
                Bank::East if em >= m && ec >= c => Some(Crossing {
                    missionaries: state.missionaries + m,
                    cannibals: state.cannibals + c,
                    boat: state.boat.opposite(),
                }),
                _ => None,
            })
            .filter(|s| self.is_legal(s))
            .collect()
    }
}

pub(crate) fn main(
    _input: Option<BoxedRead>,
    options: &Options,
) -> ::std::result::Result<(), Error> {
    let river = River { people: 3 };

    for algorithm in options.algorithms.iter().cloned() {
        let outcome = algorithm.search(
            river.initial(),
            |s| river.is_goal(s),
            |s| river.successors(s),
            |s| river.crossings_left(s),
            options.search.clone(),
        )?;
        info!("{}: {}", algorithm, outcome.statistics());

        let solution = outcome
            .into_solution()
            .ok_or_else(|| anyhow!("{}: No solution found", algorithm))?;

        println!("{}: {} crossings", algorithm, solution.len());
        println!(
            "{}",
            solution
                .path()
                .iter()
                .map(|s| river.describe(s))
                .join("\n")
        );
    }

    Ok(())
}
