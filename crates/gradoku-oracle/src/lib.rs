//! An exhaustive backtracking solver behind the [`SolutionOracle`] seam.
//!
//! The human-technique solver only performs deductions it can prove, so
//! it can neither tell whether a grid has a second completion nor strip
//! clues down to a minimal set. [`BacktrackingOracle`] answers both
//! questions by brute-force search over bit masks of the digits used in
//! each row, column, and box.
//!
//! # Examples
//!
//! ```
//! use gradoku_core::SolutionOracle as _;
//! use gradoku_oracle::BacktrackingOracle;
//!
//! let oracle = BacktrackingOracle::new();
//! let grid = "
//!     001000570 706050003 900630040
//!     025073090 367080154 080540230
//!     070062009 600090702 093000400
//! ";
//! assert!(oracle.has_unique_solution(grid));
//! ```

use std::str::FromStr as _;

use gradoku_core::{Digit, Position, Puzzle, SolutionOracle};

const ALL_DIGITS: u16 = 0x1ff;

/// Backtracking search state over one puzzle.
///
/// Each row, column, and box carries a bit mask of the digits already
/// placed in it, so the digits free for a cell are one load and a few
/// bit operations away.
#[derive(Debug)]
struct Search {
    rows: [u16; 9],
    columns: [u16; 9],
    boxes: [u16; 9],
    empties: Vec<Position>,
    found: usize,
}

impl Search {
    fn new(puzzle: &Puzzle) -> Self {
        let mut search = Self {
            rows: [0; 9],
            columns: [0; 9],
            boxes: [0; 9],
            empties: Vec::new(),
            found: 0,
        };
        for index in 0..81 {
            let pos = Position::from_index(index);
            match puzzle.clue(pos) {
                Some(digit) => search.place(pos, 1 << digit.index()),
                None => search.empties.push(pos),
            }
        }
        search
    }

    fn place(&mut self, pos: Position, bit: u16) {
        self.rows[usize::from(pos.y())] |= bit;
        self.columns[usize::from(pos.x())] |= bit;
        self.boxes[usize::from(pos.box_index())] |= bit;
    }

    fn unplace(&mut self, pos: Position, bit: u16) {
        self.rows[usize::from(pos.y())] &= !bit;
        self.columns[usize::from(pos.x())] &= !bit;
        self.boxes[usize::from(pos.box_index())] &= !bit;
    }

    fn free_digits(&self, pos: Position) -> u16 {
        let used = self.rows[usize::from(pos.y())]
            | self.columns[usize::from(pos.x())]
            | self.boxes[usize::from(pos.box_index())];
        ALL_DIGITS & !used
    }

    /// Picks the empty cell with the fewest free digits.
    ///
    /// A cell with no free digit is picked first, which prunes the dead
    /// branch before any placement is tried.
    fn most_constrained_slot(&self) -> Option<usize> {
        self.empties
            .iter()
            .enumerate()
            .min_by_key(|&(_, &pos)| self.free_digits(pos).count_ones())
            .map(|(slot, _)| slot)
    }

    /// Counts completions into `found`, stopping once `limit` is reached.
    fn count(&mut self, limit: usize) {
        if self.found >= limit {
            return;
        }
        let Some(slot) = self.most_constrained_slot() else {
            self.found += 1;
            return;
        };
        let pos = self.empties.swap_remove(slot);
        let mut free = self.free_digits(pos);
        while free != 0 && self.found < limit {
            let bit = free & free.wrapping_neg();
            free ^= bit;
            self.place(pos, bit);
            self.count(limit);
            self.unplace(pos, bit);
        }
        self.empties.push(pos);
    }
}

/// A [`SolutionOracle`] that counts completions by backtracking.
///
/// Used by the puzzle generator for uniqueness checks and clue
/// minimization. The search carries per-unit digit masks and always
/// branches on the most constrained empty cell, so counting the
/// completions of a well-posed puzzle up to a small limit is cheap.
///
/// # Examples
///
/// ```
/// use gradoku_core::SolutionOracle as _;
/// use gradoku_oracle::BacktrackingOracle;
///
/// let oracle = BacktrackingOracle::new();
///
/// // Text that does not parse as a puzzle counts as zero.
/// assert_eq!(oracle.count_solutions("123", 2), 0);
///
/// // The empty grid completes in a vast number of ways.
/// let empty = "0".repeat(81);
/// assert_eq!(oracle.count_solutions(&empty, 2), 2);
/// assert!(!oracle.has_unique_solution(&empty));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingOracle {}

impl BacktrackingOracle {
    /// Creates a new `BacktrackingOracle`.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl SolutionOracle for BacktrackingOracle {
    fn count_solutions(&self, grid: &str, limit: usize) -> usize {
        let Ok(puzzle) = Puzzle::from_str(grid) else {
            return 0;
        };
        let mut search = Search::new(&puzzle);
        search.count(limit);
        search.found
    }

    fn minimize(&self, grid: &str) -> String {
        let Ok(puzzle) = Puzzle::from_str(grid) else {
            return grid.to_owned();
        };
        let mut clues: Vec<Option<Digit>> = (0..81)
            .map(|index| puzzle.clue(Position::from_index(index)))
            .collect();
        for index in 0..81 {
            let Some(digit) = clues[index] else {
                continue;
            };
            clues[index] = None;
            if !self.has_unique_solution(&render(&clues)) {
                clues[index] = Some(digit);
            }
        }
        render(&clues)
    }
}

fn render(clues: &[Option<Digit>]) -> String {
    clues
        .iter()
        .map(|clue| clue.map_or('0', |digit| char::from(b'0' + digit.value())))
        .collect()
}
