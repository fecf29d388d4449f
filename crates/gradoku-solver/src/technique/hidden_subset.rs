//! Hidden pairs, triples, and quads.

use gradoku_core::{Digit, DigitSet, Figure, Puzzle};
use tinyvec::ArrayVec;

use super::{BoxedTechnique, Technique, TechniqueCost};
use crate::subsets::SubsetIndices;

/// Finds `n` digits of one unit that fit into exactly `n` cells and
/// strips every other candidate from those cells.
///
/// The pool holds the unit's digits with 2 to `n` marks, in ascending
/// order. A subset whose cells already carry nothing else is skipped and
/// the scan continues.
fn retain_in_unit(puzzle: &mut Puzzle, figure: Figure, n: u8) -> bool {
    let pool: ArrayVec<[u8; 9]> = puzzle
        .candidate_histogram(figure)
        .digits_with_count_in(2..=n)
        .map(Digit::value)
        .collect();
    if pool.len() < usize::from(n) {
        return false;
    }
    for indices in SubsetIndices::new(usize::from(n), pool.len()) {
        let mut digits = DigitSet::EMPTY;
        let mut cells = Figure::EMPTY;
        for &i in &indices {
            let digit = Digit::from_value(pool[usize::from(i)]);
            digits.insert(digit);
            cells = cells | puzzle.cells_with_candidate(figure, digit);
        }
        if cells.len() == usize::from(n) && puzzle.retain_candidates(cells, digits) {
            return true;
        }
    }
    false
}

fn spot(puzzle: &mut Puzzle, n: u8) -> bool {
    for unit in 0..9 {
        for figure in [
            Figure::COLUMNS[unit],
            Figure::ROWS[unit],
            Figure::BOXES[unit],
        ] {
            if retain_in_unit(puzzle, figure, n) {
                return true;
            }
        }
    }
    false
}

/// A technique that removes candidates using a hidden pair within a
/// unit.
///
/// A hidden pair occurs when two digits of a unit can only go into the
/// same two cells. Whatever else those cells carry can be eliminated.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenPair {}

impl HiddenPair {
    /// Creates a new `HiddenPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for HiddenPair {
    fn name(&self) -> &'static str {
        "Hidden Pair"
    }

    fn cost(&self) -> TechniqueCost {
        TechniqueCost {
            first_use: 150,
            subsequent: 120,
        }
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        spot(puzzle, 2)
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}

/// A technique that removes candidates using a hidden triple within a
/// unit.
///
/// Three digits confined to the same three cells of a unit exclude every
/// other candidate from those cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenTriple {}

impl HiddenTriple {
    /// Creates a new `HiddenTriple` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for HiddenTriple {
    fn name(&self) -> &'static str {
        "Hidden Triple"
    }

    fn cost(&self) -> TechniqueCost {
        TechniqueCost {
            first_use: 240,
            subsequent: 160,
        }
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        spot(puzzle, 3)
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}

/// A technique that removes candidates using a hidden quad within a
/// unit.
///
/// Four digits confined to the same four cells of a unit exclude every
/// other candidate from those cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenQuad {}

impl HiddenQuad {
    /// Creates a new `HiddenQuad` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for HiddenQuad {
    fn name(&self) -> &'static str {
        "Hidden Quad"
    }

    fn cost(&self) -> TechniqueCost {
        TechniqueCost {
            first_use: 700,
            subsequent: 500,
        }
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        spot(puzzle, 4)
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}
