use gradoku_core::{Figure, Puzzle};

use super::{BoxedTechnique, Technique, TechniqueCost};

const NAME: &str = "Single Candidate";

/// A technique that fills a cell holding exactly one candidate.
///
/// Cells are scanned in row-major order and the first cell whose
/// candidate set has shrunk to a single digit receives that digit as its
/// clue.
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleCandidate {}

impl SingleCandidate {
    /// Creates a new `SingleCandidate` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for SingleCandidate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn cost(&self) -> TechniqueCost {
        TechniqueCost {
            first_use: 10,
            subsequent: 10,
        }
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        for pos in Figure::GRID {
            if puzzle.clue(pos).is_some() {
                continue;
            }
            if let Some(digit) = puzzle.candidates(pos).as_single() {
                puzzle.set_clue(pos, digit);
                return true;
            }
        }
        false
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}
