//! Core types for the Gradoku workspace.
//!
//! # Overview
//!
//! This crate provides the vocabulary shared by the solver, oracle, and
//! generator crates:
//!
//! 1. [`Digit`] and [`DigitSet`] represent the nine symbols and bit-mask
//!    sets of them.
//! 2. [`Position`], [`Figure`], [`LineSet`], and [`Unit`] describe the
//!    board geometry: single cells, sets of cells, sets of line indices,
//!    and the 27 constraint groups.
//! 3. [`Puzzle`] tracks clues and candidate (pencilmark) sets, parses and
//!    prints the 81-character text form, and offers the mutation
//!    primitives solving techniques are built from.
//! 4. [`SolutionOracle`] is the seam to an exhaustive solver used for
//!    uniqueness checks and clue minimization.
//!
//! # Examples
//!
//! ```
//! use gradoku_core::{Digit, Figure, Position, Puzzle};
//!
//! let puzzle: Puzzle = concat!(
//!     "001000570",
//!     "706050003",
//!     "900630040",
//!     "025073090",
//!     "367080154",
//!     "080540230",
//!     "070062009",
//!     "600090702",
//!     "093000400",
//! )
//! .parse()?;
//!
//! let row = Figure::ROWS[0];
//! let ones = puzzle.cells_with_candidate(row, Digit::D1);
//! assert!(ones.is_empty(), "row 0 already contains a 1 clue");
//! assert_eq!(puzzle.clue(Position::new(2, 0)), Some(Digit::D1));
//! # Ok::<(), gradoku_core::ParsePuzzleError>(())
//! ```

pub use self::{
    digit::Digit,
    digit_set::{DigitSet, DigitSetIter},
    figure::{Figure, FigureIter, LineSet},
    oracle::SolutionOracle,
    position::Position,
    puzzle::{DigitHistogram, ParsePuzzleError, Puzzle},
    unit::Unit,
};

mod digit;
mod digit_set;
mod figure;
mod oracle;
mod position;
mod puzzle;
mod unit;
