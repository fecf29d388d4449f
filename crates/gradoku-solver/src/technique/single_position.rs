use gradoku_core::{Figure, Puzzle};

use super::{BoxedTechnique, Technique, TechniqueCost};

const NAME: &str = "Single Position";

/// A technique that places a digit with exactly one possible cell left
/// in a unit.
///
/// For each unit index the box, the column, and the row are examined in
/// that order, and within a unit the digits are tried in ascending
/// order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SinglePosition {}

impl SinglePosition {
    /// Creates a new `SinglePosition` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for SinglePosition {
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
        for n in 0..9 {
            for figure in [Figure::BOXES[n], Figure::COLUMNS[n], Figure::ROWS[n]] {
                let histogram = puzzle.candidate_histogram(figure);
                for digit in histogram.digits_with_count_in(1..=1) {
                    if let Some(pos) = puzzle.cells_with_candidate(figure, digit).as_single() {
                        puzzle.set_clue(pos, digit);
                        return true;
                    }
                }
            }
        }
        false
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}
