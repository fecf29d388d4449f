//! Seeded random generation of Gradoku puzzles.
//!
//! # Overview
//!
//! [`PuzzleGenerator`] builds a complete solution grid from a
//! [`PuzzleSeed`] and carves a problem out of it by removing clues while
//! a [`SolutionOracle`](gradoku_core::SolutionOracle) confirms the
//! solution stays unique. The outcome is a [`GeneratedPuzzle`] bundling
//! the problem, its solution, and the seed, and the construction is a
//! pure function of the seed.
//!
//! # Examples
//!
//! ```
//! use gradoku_generator::{PuzzleGenerator, PuzzleSeed};
//! use gradoku_oracle::BacktrackingOracle;
//!
//! let oracle = BacktrackingOracle::new();
//! let generator = PuzzleGenerator::new(&oracle);
//!
//! let seed: PuzzleSeed = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
//!     .parse()?;
//! let first = generator.generate_with_seed(seed);
//! let second = generator.generate_with_seed(seed);
//!
//! assert!(first.solution.is_solved());
//! assert_eq!(first, second);
//! # Ok::<(), gradoku_generator::ParseSeedError>(())
//! ```

pub use self::{
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};

mod generator;
mod seed;
