//! Naked pairs, triples, and quads.

use gradoku_core::{Figure, Position, Puzzle};
use tinyvec::ArrayVec;

use super::{BoxedTechnique, Technique, TechniqueCost};
use crate::subsets::SubsetIndices;

/// Finds `n` cells of one unit whose candidates union to exactly `n`
/// digits and clears those digits from the rest of the unit.
///
/// The pool holds the unit's cells with 2 to `n` candidates, in
/// row-major order. A subset whose elimination removes nothing is
/// skipped and the scan continues.
fn eliminate_in_unit(puzzle: &mut Puzzle, figure: Figure, n: usize) -> bool {
    let pool: ArrayVec<[Position; 9]> = figure
        .iter()
        .filter(|&pos| (2..=n).contains(&puzzle.candidates(pos).len()))
        .collect();
    if pool.len() < n {
        return false;
    }
    for indices in SubsetIndices::new(n, pool.len()) {
        let cells: Figure = indices.iter().map(|&i| pool[usize::from(i)]).collect();
        let union = puzzle.distinct_candidates(cells);
        if union.len() != n {
            continue;
        }
        let rest = figure - cells;
        let mut changed = false;
        for digit in union {
            changed |= puzzle.remove_candidates(rest, digit);
        }
        if changed {
            return true;
        }
    }
    false
}

fn spot(puzzle: &mut Puzzle, n: usize) -> bool {
    for unit in 0..9 {
        for figure in [
            Figure::COLUMNS[unit],
            Figure::ROWS[unit],
            Figure::BOXES[unit],
        ] {
            if eliminate_in_unit(puzzle, figure, n) {
                return true;
            }
        }
    }
    false
}

/// A technique that removes candidates using a naked pair within a unit.
///
/// A naked pair occurs when two cells of a unit carry the same two
/// candidates. Those digits can be eliminated from every other cell of
/// the unit.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedPair {}

impl NakedPair {
    /// Creates a new `NakedPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedPair {
    fn name(&self) -> &'static str {
        "Naked Pair"
    }

    fn cost(&self) -> TechniqueCost {
        TechniqueCost {
            first_use: 75,
            subsequent: 50,
        }
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        spot(puzzle, 2)
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}

/// A technique that removes candidates using a naked triple within a
/// unit.
///
/// Three cells of a unit, each holding two or three candidates, form a
/// naked triple when their candidates union to exactly three digits.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTriple {}

impl NakedTriple {
    /// Creates a new `NakedTriple` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedTriple {
    fn name(&self) -> &'static str {
        "Naked Triple"
    }

    fn cost(&self) -> TechniqueCost {
        TechniqueCost {
            first_use: 200,
            subsequent: 140,
        }
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        spot(puzzle, 3)
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}

/// A technique that removes candidates using a naked quad within a unit.
///
/// Four cells of a unit, each holding two to four candidates, form a
/// naked quad when their candidates union to exactly four digits.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedQuad {}

impl NakedQuad {
    /// Creates a new `NakedQuad` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedQuad {
    fn name(&self) -> &'static str {
        "Naked Quad"
    }

    fn cost(&self) -> TechniqueCost {
        TechniqueCost {
            first_use: 500,
            subsequent: 400,
        }
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        spot(puzzle, 4)
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}
