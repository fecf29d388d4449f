//! Human-style solving and difficulty rating for Gradoku puzzles.
//!
//! # Overview
//!
//! The [`technique`] module holds a catalogue of twelve deduction
//! techniques, from filling a cell with its last remaining candidate up
//! to the X-Wing pattern. Each carries a first-use and a cheaper
//! subsequent-use cost.
//!
//! [`HumanSolver`] drives the catalogue the way a person works through a
//! puzzle: every step it tries the techniques in ascending order of
//! their active cost and charges the first one that makes a deduction.
//! The accumulated charges become the difficulty score of the puzzle,
//! reported in a [`Rating`] together with the set of techniques used and
//! whether the catalogue sufficed to solve the grid.
//!
//! # Examples
//!
//! ```
//! use gradoku_core::Puzzle;
//! use gradoku_solver::HumanSolver;
//!
//! let puzzle: Puzzle = "
//!     001000570 706050003 900630040
//!     025073090 367080154 080540230
//!     070062009 600090702 093000400
//! "
//! .parse()?;
//!
//! let rating = HumanSolver::with_all_techniques().rate(&puzzle);
//! assert!(rating.is_solved);
//! assert_eq!(rating.score, 420);
//! # Ok::<(), gradoku_core::ParsePuzzleError>(())
//! ```

pub use self::human_solver::{HumanSolver, Rating};

mod human_solver;
mod subsets;
pub mod technique;

#[cfg(test)]
mod testing;
