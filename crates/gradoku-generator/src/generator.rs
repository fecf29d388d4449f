use gradoku_core::{Digit, Figure, Position, Puzzle, SolutionOracle};
use rand::{Rng, seq::SliceRandom as _};

use crate::PuzzleSeed;

/// A puzzle produced by [`PuzzleGenerator`], together with its solution
/// and the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The minimized problem grid handed to players.
    pub problem: Puzzle,
    /// The complete grid the problem was carved from.
    pub solution: Puzzle,
    /// The seed that deterministically reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Builds random puzzles with a unique solution.
///
/// Generation runs in three steps: the three diagonal boxes are filled
/// with independently shuffled digits, the rest of the grid is completed
/// by backtracking, and clues are then removed through the oracle's
/// [`minimize`](SolutionOracle::minimize) until every remaining clue is
/// needed to keep the solution unique.
///
/// # Examples
///
/// ```
/// use gradoku_core::SolutionOracle as _;
/// use gradoku_generator::{PuzzleGenerator, PuzzleSeed};
/// use gradoku_oracle::BacktrackingOracle;
///
/// let oracle = BacktrackingOracle::new();
/// let generator = PuzzleGenerator::new(&oracle);
///
/// let puzzle = generator.generate_with_seed(PuzzleSeed::from_bytes([42; 32]));
/// assert!(puzzle.solution.is_solved());
/// assert!(oracle.has_unique_solution(&puzzle.problem.to_string()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a, O> {
    oracle: &'a O,
}

impl<'a, O> PuzzleGenerator<'a, O>
where
    O: SolutionOracle,
{
    /// Creates a generator that checks uniqueness through `oracle`.
    #[must_use]
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same seed always yields the same puzzle, so seeds can be
    /// shared to reproduce a puzzle elsewhere.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let mut start = Puzzle::new();
        fill_diagonal_boxes(&mut start, &mut rng);
        // A diagonal-box start can always be completed.
        let solution = fill_remaining(&start).unwrap_or(start);
        let problem = self
            .oracle
            .minimize(&solution.to_string())
            .parse()
            .unwrap_or_else(|_| solution.clone());
        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

/// Fills boxes 0, 4, and 8 with shuffled digits.
///
/// The diagonal boxes share no row, column, or box, so any shuffle is
/// consistent and the remaining cells keep all their candidates open
/// except for eliminations within the filled boxes' lines.
fn fill_diagonal_boxes<R: Rng>(puzzle: &mut Puzzle, rng: &mut R) {
    for box_index in [0, 4, 8] {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        for (pos, digit) in Figure::BOXES[box_index].iter().zip(digits) {
            puzzle.set_clue(pos, digit);
        }
    }
}

/// Completes `puzzle` by backtracking over the empty cells in row-major
/// order, trying each cell's candidates in ascending digit order.
fn fill_remaining(puzzle: &Puzzle) -> Option<Puzzle> {
    let Some(pos) = first_empty(puzzle) else {
        return Some(puzzle.clone());
    };
    for digit in puzzle.candidates(pos) {
        let mut next = puzzle.clone();
        next.set_clue(pos, digit);
        if let Some(filled) = fill_remaining(&next) {
            return Some(filled);
        }
    }
    None
}

fn first_empty(puzzle: &Puzzle) -> Option<Position> {
    Figure::GRID.iter().find(|&pos| puzzle.clue(pos).is_none())
}
