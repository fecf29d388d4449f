use gradoku_core::{Figure, Puzzle};

use super::{BoxedTechnique, Technique, TechniqueCost};

const NAME: &str = "Candidate Lines";

/// A technique that eliminates a digit locked into one line of a box.
///
/// When a digit has exactly two marks in a box and both lie in the same
/// column or the same row, the digit cannot appear anywhere else on that
/// line, so it is removed from the line outside the pair. Boxes are
/// scanned in index order and digits in ascending order; a pair whose
/// elimination removes nothing is skipped and the scan continues.
#[derive(Debug, Default, Clone, Copy)]
pub struct CandidateLines {}

impl CandidateLines {
    /// Creates a new `CandidateLines` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for CandidateLines {
    fn name(&self) -> &'static str {
        NAME
    }

    fn cost(&self) -> TechniqueCost {
        TechniqueCost {
            first_use: 35,
            subsequent: 20,
        }
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        for n in 0..9 {
            let box_figure = Figure::BOXES[n];
            let histogram = puzzle.candidate_histogram(box_figure);
            for digit in histogram.digits_with_count_in(2..=2) {
                let cells = puzzle.cells_with_candidate(box_figure, digit);
                let Some((first, second)) = cells.as_pair() else {
                    continue;
                };
                let line = if first.x() == second.x() {
                    Figure::COLUMNS[usize::from(first.x())]
                } else if first.y() == second.y() {
                    Figure::ROWS[usize::from(first.y())]
                } else {
                    continue;
                };
                if puzzle.remove_candidates(line - cells, digit) {
                    return true;
                }
            }
        }
        false
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}
