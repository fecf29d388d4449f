use gradoku_core::{Digit, Figure, Puzzle};

use super::{BoxedTechnique, Technique, TechniqueCost};

const NAME: &str = "X-Wing";

/// A line whose marks for one digit sit in exactly two cells.
#[derive(Debug, Clone, Copy)]
struct LineCandidate {
    digit: Digit,
    is_row: bool,
    cells: Figure,
}

impl LineCandidate {
    /// Returns `true` if the other candidate pins the same digit to the
    /// same pair of crossing lines.
    fn matches(&self, other: &Self) -> bool {
        if self.is_row != other.is_row || self.digit != other.digit {
            return false;
        }
        if self.is_row {
            self.cells.columns_occupied() == other.cells.columns_occupied()
        } else {
            self.cells.rows_occupied() == other.cells.rows_occupied()
        }
    }
}

fn collect_line_candidates(
    puzzle: &Puzzle,
    line: Figure,
    is_row: bool,
    candidates: &mut Vec<LineCandidate>,
) {
    for digit in puzzle.candidate_histogram(line).digits_with_count_in(2..=2) {
        candidates.push(LineCandidate {
            digit,
            is_row,
            cells: puzzle.cells_with_candidate(line, digit),
        });
    }
}

/// A technique that eliminates a digit cornered in a rectangle of two
/// rows or two columns.
///
/// When a digit has exactly two marks in each of two rows and those
/// marks share the same two columns, the digit must sit on two opposite
/// corners of the rectangle, so it is removed from the rest of both
/// columns. The column-based form works the same way with rows and
/// columns swapped.
#[derive(Debug, Default, Clone, Copy)]
pub struct XWing {}

impl XWing {
    /// Creates a new `XWing` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for XWing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn cost(&self) -> TechniqueCost {
        TechniqueCost {
            first_use: 280,
            subsequent: 160,
        }
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        let mut candidates = Vec::new();
        for n in 0..9 {
            collect_line_candidates(puzzle, Figure::ROWS[n], true, &mut candidates);
            collect_line_candidates(puzzle, Figure::COLUMNS[n], false, &mut candidates);
        }

        for i in 0..candidates.len() {
            for j in i + 1..candidates.len() {
                let (first, second) = (candidates[i], candidates[j]);
                if !first.matches(&second) {
                    continue;
                }
                let corners = first.cells | second.cells;
                let lines = if first.is_row {
                    let Some((a, b)) = corners.columns_occupied().as_pair() else {
                        continue;
                    };
                    Figure::COLUMNS[usize::from(a)] | Figure::COLUMNS[usize::from(b)]
                } else {
                    let Some((a, b)) = corners.rows_occupied().as_pair() else {
                        continue;
                    };
                    Figure::ROWS[usize::from(a)] | Figure::ROWS[usize::from(b)]
                };
                if puzzle.remove_candidates(lines - corners, first.digit) {
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
