//! Box-to-box line interactions within one stack or band.

use std::ops::RangeInclusive;

use gradoku_core::{Digit, Figure, Puzzle};

use super::{BoxedTechnique, Technique, TechniqueCost};

/// A digit whose marks inside one box span exactly two columns or two
/// rows.
#[derive(Debug, Clone, Copy)]
struct BoxLinePair {
    digit: Digit,
    columns: Option<(u8, u8)>,
    rows: Option<(u8, u8)>,
}

fn find_box_line_pairs(
    puzzle: &Puzzle,
    box_figure: Figure,
    counts: RangeInclusive<u8>,
) -> Vec<BoxLinePair> {
    puzzle
        .candidate_histogram(box_figure)
        .digits_with_count_in(counts)
        .filter_map(|digit| {
            let cells = puzzle.cells_with_candidate(box_figure, digit);
            let pair = BoxLinePair {
                digit,
                columns: cells.columns_occupied().as_pair(),
                rows: cells.rows_occupied().as_pair(),
            };
            (pair.columns.is_some() || pair.rows.is_some()).then_some(pair)
        })
        .collect()
}

fn third_box_in_stack(box1: usize, box2: usize) -> usize {
    let mut third = box1 % 3;
    while third == box1 || third == box2 {
        third += 3;
    }
    third
}

fn third_box_in_band(box1: usize, box2: usize) -> usize {
    let mut third = box1 / 3 * 3;
    while third == box1 || third == box2 {
        third += 1;
    }
    third
}

/// Eliminates `first.digit` from the third box of the shared stack or
/// band when the two entries pin the same digit to the same two lines.
///
/// Line indices are absolute, so equal column pairs imply a shared stack
/// and equal row pairs a shared band.
fn eliminate(
    puzzle: &mut Puzzle,
    first: &BoxLinePair,
    second: &BoxLinePair,
    box1: usize,
    box2: usize,
) -> bool {
    if first.digit != second.digit {
        return false;
    }
    if let (Some(pair), Some(other)) = (first.columns, second.columns)
        && pair == other
    {
        let lines = Figure::COLUMNS[usize::from(pair.0)] | Figure::COLUMNS[usize::from(pair.1)];
        let target = Figure::BOXES[third_box_in_stack(box1, box2)] & lines;
        if puzzle.remove_candidates(target, first.digit) {
            return true;
        }
    }
    if let (Some(pair), Some(other)) = (first.rows, second.rows)
        && pair == other
    {
        let lines = Figure::ROWS[usize::from(pair.0)] | Figure::ROWS[usize::from(pair.1)];
        let target = Figure::BOXES[third_box_in_band(box1, box2)] & lines;
        if puzzle.remove_candidates(target, first.digit) {
            return true;
        }
    }
    false
}

fn spot(puzzle: &mut Puzzle, counts: &RangeInclusive<u8>) -> bool {
    let candidates: Vec<Vec<BoxLinePair>> = (0..9)
        .map(|n| find_box_line_pairs(puzzle, Figure::BOXES[n], counts.clone()))
        .collect();

    for box1 in 0..8 {
        for first in &candidates[box1] {
            for box2 in box1 + 1..9 {
                for second in &candidates[box2] {
                    if eliminate(puzzle, first, second, box1, box2) {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// A technique that eliminates a digit paired up on the same two lines
/// of two boxes.
///
/// When a digit has exactly two marks in each of two boxes and both
/// pairs share the same two columns of a stack (or rows of a band), the
/// digit must occupy those lines there, so it is cleared from the same
/// lines in the third box.
#[derive(Debug, Default, Clone, Copy)]
pub struct DoublePairs {}

impl DoublePairs {
    /// Creates a new `DoublePairs` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for DoublePairs {
    fn name(&self) -> &'static str {
        "Double Pairs"
    }

    fn cost(&self) -> TechniqueCost {
        TechniqueCost {
            first_use: 50,
            subsequent: 25,
        }
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        spot(puzzle, &(2..=2))
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}

/// The [`DoublePairs`] pattern relaxed to up to six marks per box.
#[derive(Debug, Default, Clone, Copy)]
pub struct MultipleLines {}

impl MultipleLines {
    /// Creates a new `MultipleLines` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for MultipleLines {
    fn name(&self) -> &'static str {
        "Multiple Lines"
    }

    fn cost(&self) -> TechniqueCost {
        TechniqueCost {
            first_use: 70,
            subsequent: 40,
        }
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        spot(puzzle, &(2..=6))
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }
}
