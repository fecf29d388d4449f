use std::{fmt, ops::RangeInclusive, str::FromStr};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, Figure, Position, Unit};

/// Error produced when parsing a puzzle from its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParsePuzzleError {
    /// The text does not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {len}")]
    BadLength {
        /// Number of cell characters found.
        len: usize,
    },
    /// A character denotes neither a digit nor an empty cell.
    #[display("invalid cell character {c:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        c: char,
        /// Row-major index of the cell the character belongs to.
        index: usize,
    },
    /// The same digit is given twice in one unit.
    #[display("digit {digit} appears twice in {unit}")]
    DuplicateDigit {
        /// The repeated digit.
        digit: Digit,
        /// The unit containing the repetition.
        unit: Unit,
    },
}

/// A 9x9 Sudoku puzzle: clues plus per-cell candidate (pencilmark) sets.
///
/// Every cell either holds a clue and an empty candidate set, or is empty
/// and holds the digits still possible there. Parsing derives each empty
/// cell's candidates as {1..9} minus the clues among its 20 neighbours;
/// solving techniques then only ever shrink candidate sets or promote a
/// cell to a clue through [`set_clue`](Self::set_clue). Clues are never
/// unset.
///
/// The text form is 81 characters in row-major order, `'1'`-`'9'` for
/// clues and `'0'`, `'.'`, or `'_'` for empty cells; ASCII whitespace
/// between cells is ignored when parsing and [`Display`](fmt::Display)
/// emits `'0'` for empty cells.
///
/// # Examples
///
/// ```
/// use gradoku_core::{Digit, Position, Puzzle};
///
/// let puzzle: Puzzle = concat!(
///     "001000570",
///     "706050003",
///     "900630040",
///     "025073090",
///     "367080154",
///     "080540230",
///     "070062009",
///     "600090702",
///     "093000400",
/// )
/// .parse()?;
///
/// assert_eq!(puzzle.clue(Position::new(2, 0)), Some(Digit::D1));
/// assert!(puzzle.candidates(Position::new(0, 0)).contains(Digit::D2));
/// assert!(!puzzle.is_solved());
/// # Ok::<(), gradoku_core::ParsePuzzleError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Puzzle {
    clues: [Option<Digit>; 81],
    candidates: [DigitSet; 81],
}

impl Puzzle {
    /// Creates an empty puzzle: no clues, every candidate still open.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clues: [None; 81],
            candidates: [DigitSet::FULL; 81],
        }
    }

    /// Returns the clue at `pos`, if any.
    #[must_use]
    #[inline]
    pub fn clue(&self, pos: Position) -> Option<Digit> {
        self.clues[pos.index()]
    }

    /// Returns the candidate set of the cell at `pos`.
    ///
    /// Clue cells have an empty candidate set.
    #[must_use]
    #[inline]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        self.candidates[pos.index()]
    }

    /// Returns `true` if no cell in the row, column, or box of `pos`
    /// already holds `digit` as a clue.
    #[must_use]
    pub fn is_valid_clue(&self, pos: Position, digit: Digit) -> bool {
        Figure::neighbours(pos)
            .iter()
            .all(|p| self.clues[p.index()] != Some(digit))
    }

    /// Records `digit` as the clue at `pos`.
    ///
    /// Empties the cell's own candidate set and removes `digit` from the
    /// candidates of the 20 neighbouring cells. Callers place digits they
    /// have already proven sound.
    pub fn set_clue(&mut self, pos: Position, digit: Digit) {
        debug_assert!(self.clues[pos.index()].is_none());
        debug_assert!(self.is_valid_clue(pos, digit));
        self.clues[pos.index()] = Some(digit);
        self.candidates[pos.index()] = DigitSet::EMPTY;
        for p in Figure::neighbours(pos) {
            self.candidates[p.index()].remove(digit);
        }
    }

    /// Removes `digit` from the candidates of the cell at `pos`.
    ///
    /// Returns `true` if the mark was present.
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        self.candidates[pos.index()].remove(digit)
    }

    /// Removes `digit` from the candidates of every cell in `figure`.
    ///
    /// Returns `true` if any cell changed.
    pub fn remove_candidates(&mut self, figure: Figure, digit: Digit) -> bool {
        let mut changed = false;
        for pos in figure {
            changed |= self.candidates[pos.index()].remove(digit);
        }
        changed
    }

    /// Removes every digit not in `keep` from the candidates of every
    /// cell in `figure`.
    ///
    /// Returns `true` if any cell changed.
    pub fn retain_candidates(&mut self, figure: Figure, keep: DigitSet) -> bool {
        let mut changed = false;
        for pos in figure {
            let cell = &mut self.candidates[pos.index()];
            let kept = cell.intersection(keep);
            changed |= kept != *cell;
            *cell = kept;
        }
        changed
    }

    /// Counts, for each digit, how many cells of `figure` carry it as a
    /// candidate.
    #[must_use]
    pub fn candidate_histogram(&self, figure: Figure) -> DigitHistogram {
        let mut histogram = DigitHistogram::default();
        for pos in figure {
            for digit in self.candidates[pos.index()] {
                histogram.counts[digit.index()] += 1;
            }
        }
        histogram
    }

    /// Returns the cells of `figure` whose candidates contain `digit`.
    #[must_use]
    pub fn cells_with_candidate(&self, figure: Figure, digit: Digit) -> Figure {
        figure
            .iter()
            .filter(|&pos| self.candidates[pos.index()].contains(digit))
            .collect()
    }

    /// Returns the union of the candidate sets of the cells in `figure`.
    #[must_use]
    pub fn distinct_candidates(&self, figure: Figure) -> DigitSet {
        figure
            .iter()
            .fold(DigitSet::EMPTY, |acc, pos| {
                acc.union(self.candidates[pos.index()])
            })
    }

    /// Returns `true` while any cell lacks a clue.
    #[must_use]
    pub fn has_empty_cells(&self) -> bool {
        self.clues.iter().any(Option::is_none)
    }

    /// Returns `true` if no unit contains the same clue twice.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.duplicate_digit().is_none()
    }

    /// Returns `true` when all 81 cells are clued and every unit is free
    /// of repetitions.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.has_empty_cells() && self.is_consistent()
    }

    fn duplicate_digit(&self) -> Option<(Digit, Unit)> {
        for unit in Unit::ALL {
            let mut seen = DigitSet::EMPTY;
            for pos in unit.positions() {
                if let Some(digit) = self.clues[pos.index()]
                    && !seen.insert(digit)
                {
                    return Some((digit, unit));
                }
            }
        }
        None
    }

    fn derive_candidates(&mut self) {
        for index in 0..81 {
            self.candidates[index] = if self.clues[index].is_some() {
                DigitSet::EMPTY
            } else {
                let mut open = DigitSet::FULL;
                for p in Figure::neighbours(Position::from_index(index)) {
                    if let Some(digit) = self.clues[p.index()] {
                        open.remove(digit);
                    }
                }
                open
            };
        }
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Puzzle {
    type Err = ParsePuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut clues = [None; 81];
        let mut count = 0_usize;
        for c in s.chars().filter(|c| !c.is_ascii_whitespace()) {
            if count < 81 {
                clues[count] = match c {
                    '0' | '.' | '_' => None,
                    _ => match Digit::from_ascii(c) {
                        Some(digit) => Some(digit),
                        None => {
                            return Err(ParsePuzzleError::InvalidCharacter { c, index: count });
                        }
                    },
                };
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParsePuzzleError::BadLength { len: count });
        }

        let mut puzzle = Self {
            clues,
            candidates: [DigitSet::EMPTY; 81],
        };
        if let Some((digit, unit)) = puzzle.duplicate_digit() {
            return Err(ParsePuzzleError::DuplicateDigit { digit, unit });
        }
        puzzle.derive_candidates();
        Ok(puzzle)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clue in &self.clues {
            match clue {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str("0")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Puzzle({self})")
    }
}

/// Per-digit candidate counts across a figure.
///
/// Produced by [`Puzzle::candidate_histogram`]; techniques query it for
/// the digits occurring a particular number of times in a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitHistogram {
    counts: [u8; 9],
}

impl DigitHistogram {
    /// Returns the number of cells carrying `digit`.
    #[must_use]
    #[inline]
    pub fn count(self, digit: Digit) -> u8 {
        self.counts[digit.index()]
    }

    /// Returns the digits whose count lies within `range`, in ascending
    /// digit order.
    pub fn digits_with_count_in(self, range: RangeInclusive<u8>) -> impl Iterator<Item = Digit> {
        Digit::ALL
            .into_iter()
            .filter(move |&digit| range.contains(&self.count(digit)))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const PUZZLE: &str =
        "001000570706050003900630040025073090367080154080540230070062009600090702093000400";
    const SOLVED: &str =
        "123456789456789123789123456214365897365897214897214365531642978642978531978531642";

    fn digit_set(values: &[u8]) -> DigitSet {
        values.iter().map(|&v| Digit::from_value(v)).collect()
    }

    #[test]
    fn test_parse_derives_candidates() {
        let puzzle: Puzzle = PUZZLE.parse().unwrap();
        // (0, 0) sees 1, 5, 7 in its row, 3, 6, 7, 9 in its column, and
        // 1, 6, 7, 9 in its box.
        assert_eq!(puzzle.candidates(Position::new(0, 0)), digit_set(&[2, 4, 8]));
        assert_eq!(puzzle.candidates(Position::new(2, 0)), DigitSet::EMPTY);
        assert_eq!(puzzle.clue(Position::new(2, 0)), Some(Digit::D1));
        assert!(puzzle.is_consistent());
        assert!(puzzle.has_empty_cells());
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn test_parse_accepts_dots_underscores_and_whitespace() {
        let dotted = PUZZLE.replace('0', ".");
        let spaced = dotted
            .as_bytes()
            .chunks(9)
            .map(|row| String::from_utf8_lossy(row).into_owned())
            .collect::<Vec<_>>()
            .join("\n");
        let from_plain: Puzzle = PUZZLE.parse().unwrap();
        let from_spaced: Puzzle = spaced.parse().unwrap();
        assert_eq!(from_plain, from_spaced);

        let underscored: Puzzle = PUZZLE.replace('0', "_").parse().unwrap();
        assert_eq!(from_plain, underscored);
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        let short = &PUZZLE[..80];
        assert_eq!(
            short.parse::<Puzzle>(),
            Err(ParsePuzzleError::BadLength { len: 80 })
        );
        assert_eq!(
            "".parse::<Puzzle>(),
            Err(ParsePuzzleError::BadLength { len: 0 })
        );
        let long = format!("{PUZZLE}0");
        assert_eq!(
            long.parse::<Puzzle>(),
            Err(ParsePuzzleError::BadLength { len: 82 })
        );
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let mut cells = PUZZLE.to_string();
        cells.replace_range(4..5, "x");
        assert_eq!(
            cells.parse::<Puzzle>(),
            Err(ParsePuzzleError::InvalidCharacter { c: 'x', index: 4 })
        );
    }

    #[test]
    fn test_parse_rejects_duplicate_in_unit() {
        let twice_in_row = format!("550000000{}", "0".repeat(72));
        assert_eq!(
            twice_in_row.parse::<Puzzle>(),
            Err(ParsePuzzleError::DuplicateDigit {
                digit: Digit::D5,
                unit: Unit::Row { y: 0 },
            })
        );

        let twice_in_column = format!("300000000{}300000000", "0".repeat(63));
        assert_eq!(twice_in_column.len(), 81);
        assert_eq!(
            twice_in_column.parse::<Puzzle>(),
            Err(ParsePuzzleError::DuplicateDigit {
                digit: Digit::D3,
                unit: Unit::Column { x: 0 },
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParsePuzzleError::BadLength { len: 80 }.to_string(),
            "expected 81 cells, found 80"
        );
        assert_eq!(
            ParsePuzzleError::DuplicateDigit {
                digit: Digit::D5,
                unit: Unit::Row { y: 0 },
            }
            .to_string(),
            "digit 5 appears twice in row 0"
        );
    }

    #[test]
    fn test_set_clue_updates_neighbours() {
        let mut puzzle = Puzzle::new();
        let pos = Position::new(4, 4);
        assert!(puzzle.is_valid_clue(pos, Digit::D5));
        puzzle.set_clue(pos, Digit::D5);

        assert_eq!(puzzle.clue(pos), Some(Digit::D5));
        assert_eq!(puzzle.candidates(pos), DigitSet::EMPTY);
        assert!(!puzzle.candidates(Position::new(0, 4)).contains(Digit::D5));
        assert!(!puzzle.candidates(Position::new(4, 0)).contains(Digit::D5));
        assert!(!puzzle.candidates(Position::new(3, 3)).contains(Digit::D5));
        assert_eq!(puzzle.candidates(Position::new(0, 0)), DigitSet::FULL);
        assert!(!puzzle.is_valid_clue(Position::new(0, 4), Digit::D5));
        assert!(puzzle.is_valid_clue(Position::new(0, 0), Digit::D5));
    }

    #[test]
    fn test_remove_candidates_reports_change() {
        let mut puzzle = Puzzle::new();
        let row = Figure::ROWS[2];
        assert!(puzzle.remove_candidates(row, Digit::D9));
        assert!(!puzzle.remove_candidates(row, Digit::D9));
        for pos in row {
            assert!(!puzzle.candidates(pos).contains(Digit::D9));
        }
        assert!(puzzle.remove_candidate(Position::new(0, 0), Digit::D9));
        assert!(!puzzle.remove_candidate(Position::new(0, 0), Digit::D9));
    }

    #[test]
    fn test_retain_candidates() {
        let mut puzzle = Puzzle::new();
        let mut cells = Figure::new();
        cells.insert(Position::new(0, 0));
        cells.insert(Position::new(1, 0));
        let keep = digit_set(&[2, 7]);

        assert!(puzzle.retain_candidates(cells, keep));
        assert_eq!(puzzle.candidates(Position::new(0, 0)), keep);
        assert_eq!(puzzle.candidates(Position::new(1, 0)), keep);
        assert_eq!(puzzle.candidates(Position::new(2, 0)), DigitSet::FULL);
        assert!(!puzzle.retain_candidates(cells, keep));
    }

    #[test]
    fn test_candidate_histogram() {
        let puzzle: Puzzle = PUZZLE.parse().unwrap();
        let histogram = puzzle.candidate_histogram(Figure::ROWS[0]);
        // Row 0 clues are 1, 5, 7; those digits cannot appear as marks.
        assert_eq!(histogram.count(Digit::D1), 0);
        assert_eq!(histogram.count(Digit::D5), 0);
        assert_eq!(histogram.count(Digit::D7), 0);
        assert!(histogram.count(Digit::D2) > 0);

        let twos: Vec<_> = histogram.digits_with_count_in(1..=9).collect();
        assert!(twos.windows(2).all(|w| w[0] < w[1]));
        assert!(!twos.contains(&Digit::D1));
    }

    #[test]
    fn test_cells_with_candidate() {
        let mut puzzle = Puzzle::new();
        puzzle.set_clue(Position::new(0, 0), Digit::D1);
        // Row 1 cells in column 0 or box 0 lost the mark; the rest kept it.
        let cells = puzzle.cells_with_candidate(Figure::ROWS[1], Digit::D1);
        assert_eq!(cells.len(), 6);
        assert!(!cells.contains(Position::new(0, 1)));
        assert!(!cells.contains(Position::new(2, 1)));
        assert!(cells.contains(Position::new(3, 1)));
    }

    #[test]
    fn test_distinct_candidates() {
        let mut puzzle = Puzzle::new();
        let mut cells = Figure::new();
        cells.insert(Position::new(0, 0));
        cells.insert(Position::new(1, 0));
        puzzle.retain_candidates(cells, digit_set(&[1, 2]));

        let mut one_more = cells;
        one_more.insert(Position::new(2, 0));
        puzzle.retain_candidates(
            Figure::ROWS[0].difference(cells),
            digit_set(&[3, 4]),
        );
        assert_eq!(
            puzzle.distinct_candidates(one_more),
            digit_set(&[1, 2, 3, 4])
        );
    }

    #[test]
    fn test_solved_grid() {
        let puzzle: Puzzle = SOLVED.parse().unwrap();
        assert!(!puzzle.has_empty_cells());
        assert!(puzzle.is_consistent());
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.to_string(), SOLVED);
    }

    #[test]
    fn test_display_roundtrip() {
        let puzzle: Puzzle = PUZZLE.parse().unwrap();
        assert_eq!(puzzle.to_string(), PUZZLE);
        assert_eq!(format!("{puzzle:?}"), format!("Puzzle({PUZZLE})"));
    }

    proptest! {
        #[test]
        fn prop_clue_sequences_roundtrip(seq in prop::collection::vec((0..81_usize, 1..=9_u8), 0..40)) {
            let mut puzzle = Puzzle::new();
            for (index, value) in seq {
                let pos = Position::from_index(index);
                let digit = Digit::from_value(value);
                if puzzle.clue(pos).is_none() && puzzle.is_valid_clue(pos, digit) {
                    puzzle.set_clue(pos, digit);
                }
            }
            prop_assert!(puzzle.is_consistent());
            let reparsed: Puzzle = puzzle.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, puzzle);
        }

        #[test]
        fn prop_candidates_shrink_under_removal(digit in 1..=9_u8, line in 0..9_usize) {
            let mut puzzle: Puzzle = PUZZLE.parse().unwrap();
            let digit = Digit::from_value(digit);
            let before: Vec<_> = Figure::ROWS[line].iter().map(|p| puzzle.candidates(p)).collect();
            puzzle.remove_candidates(Figure::ROWS[line], digit);
            for (pos, old) in Figure::ROWS[line].iter().zip(before) {
                let new = puzzle.candidates(pos);
                prop_assert_eq!(new, old.difference(DigitSet::only(digit)));
            }
        }
    }
}
