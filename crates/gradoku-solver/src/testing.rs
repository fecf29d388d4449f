//! Test utilities for technique implementations.

use std::str::FromStr as _;

use gradoku_core::{Digit, DigitSet, Figure, Position, Puzzle};

use crate::technique::Technique;

/// A test harness for verifying technique implementations.
///
/// The tester holds the initial and current state of a puzzle. Builder
/// methods sculpt the candidate marks before a technique runs, and
/// assertion methods compare the two states afterwards.
///
/// All methods consume and return `self`, enabling fluent method
/// chaining, and all assertions use `#[track_caller]` to report the
/// calling test on failure.
#[derive(Debug)]
pub(crate) struct TechniqueTester {
    initial: Puzzle,
    current: Puzzle,
}

impl TechniqueTester {
    /// Creates a tester over an empty puzzle with full candidate marks.
    pub(crate) fn new() -> Self {
        Self::with_puzzle(Puzzle::new())
    }

    /// Creates a tester from an 81-cell grid string.
    ///
    /// The string format matches [`Puzzle::from_str`]: digits 1-9 for
    /// clues, `.`, `_`, or `0` for empty cells, whitespace ignored.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid puzzle.
    #[track_caller]
    pub(crate) fn from_grid(text: &str) -> Self {
        Self::with_puzzle(Puzzle::from_str(text).unwrap())
    }

    fn with_puzzle(puzzle: Puzzle) -> Self {
        Self {
            initial: puzzle.clone(),
            current: puzzle,
        }
    }

    /// Removes one candidate mark before the technique runs.
    pub(crate) fn remove(mut self, pos: Position, digit: Digit) -> Self {
        self.initial.remove_candidate(pos, digit);
        self.current.remove_candidate(pos, digit);
        self
    }

    /// Removes a candidate mark from every cell of `figure` before the
    /// technique runs.
    pub(crate) fn remove_all(mut self, figure: Figure, digit: Digit) -> Self {
        self.initial.remove_candidates(figure, digit);
        self.current.remove_candidates(figure, digit);
        self
    }

    /// Restricts the marks of the cell at `pos` to `digits` before the
    /// technique runs.
    pub(crate) fn keep<D>(mut self, pos: Position, digits: D) -> Self
    where
        D: IntoIterator<Item = Digit>,
    {
        let keep = DigitSet::from_iter(digits);
        self.initial.retain_candidates(Figure::only(pos), keep);
        self.current.retain_candidates(Figure::only(pos), keep);
        self
    }

    /// Applies the technique once, asserting that it makes a deduction.
    ///
    /// # Panics
    ///
    /// Panics if the technique reports no change.
    #[track_caller]
    pub(crate) fn apply_once(mut self, technique: &dyn Technique) -> Self {
        assert!(
            technique.apply(&mut self.current),
            "Expected {} to make a deduction",
            technique.name()
        );
        self
    }

    /// Applies the technique repeatedly until it makes no more progress.
    pub(crate) fn apply_until_stuck(mut self, technique: &dyn Technique) -> Self {
        while technique.apply(&mut self.current) {}
        self
    }

    /// Asserts that the technique finds nothing and leaves the puzzle
    /// untouched.
    #[track_caller]
    pub(crate) fn assert_stuck(mut self, technique: &dyn Technique) -> Self {
        let before = self.current.clone();
        assert!(
            !technique.apply(&mut self.current),
            "Expected {} to find nothing",
            technique.name()
        );
        assert_eq!(
            self.current,
            before,
            "Expected {} to leave the puzzle untouched",
            technique.name()
        );
        self
    }

    /// Asserts that the technique placed `digit` as the clue at `pos`.
    #[track_caller]
    pub(crate) fn assert_placed(self, pos: Position, digit: Digit) -> Self {
        assert!(
            self.initial.clue(pos).is_none(),
            "Expected the cell at {pos} to start without a clue"
        );
        assert_eq!(
            self.current.clue(pos),
            Some(digit),
            "Expected {digit} to be placed at {pos}"
        );
        self
    }

    /// Asserts that the cell at `pos` still carries the mark `digit`.
    #[track_caller]
    pub(crate) fn assert_candidate(self, pos: Position, digit: Digit) -> Self {
        let candidates = self.current.candidates(pos);
        assert!(
            candidates.contains(digit),
            "Expected {pos} to keep the mark {digit}, but candidates are {candidates:?}"
        );
        self
    }

    /// Asserts that the mark `digit` is gone from the cell at `pos`.
    #[track_caller]
    pub(crate) fn assert_no_candidate(self, pos: Position, digit: Digit) -> Self {
        let candidates = self.current.candidates(pos);
        assert!(
            !candidates.contains(digit),
            "Expected the mark {digit} to be gone from {pos}, but candidates are {candidates:?}"
        );
        self
    }

    /// Asserts the exact candidate set of the cell at `pos`.
    #[track_caller]
    pub(crate) fn assert_candidates<D>(self, pos: Position, digits: D) -> Self
    where
        D: IntoIterator<Item = Digit>,
    {
        let expected = DigitSet::from_iter(digits);
        assert_eq!(
            self.current.candidates(pos),
            expected,
            "Unexpected candidates at {pos}"
        );
        self
    }

    /// Asserts that neither the clue nor the candidates of the cell at
    /// `pos` changed.
    #[track_caller]
    pub(crate) fn assert_no_change(self, pos: Position) -> Self {
        assert_eq!(
            self.current.clue(pos),
            self.initial.clue(pos),
            "Expected the clue at {pos} to stay unchanged"
        );
        assert_eq!(
            self.current.candidates(pos),
            self.initial.candidates(pos),
            "Expected the candidates at {pos} to stay unchanged"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::technique::{BoxedTechnique, TechniqueCost};

    #[derive(Debug)]
    struct NoOpTechnique;

    impl Technique for NoOpTechnique {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn cost(&self) -> TechniqueCost {
            TechniqueCost {
                first_use: 0,
                subsequent: 0,
            }
        }

        fn apply(&self, _puzzle: &mut Puzzle) -> bool {
            false
        }

        fn clone_box(&self) -> BoxedTechnique {
            Box::new(NoOpTechnique)
        }
    }

    // Places D1 at (0, 0) until the cell is decided.
    #[derive(Debug)]
    struct PlaceD1AtOrigin;

    impl Technique for PlaceD1AtOrigin {
        fn name(&self) -> &'static str {
            "place-d1-at-origin"
        }

        fn cost(&self) -> TechniqueCost {
            TechniqueCost {
                first_use: 0,
                subsequent: 0,
            }
        }

        fn apply(&self, puzzle: &mut Puzzle) -> bool {
            let pos = Position::new(0, 0);
            if puzzle.clue(pos).is_some() {
                return false;
            }
            puzzle.set_clue(pos, Digit::D1);
            true
        }

        fn clone_box(&self) -> BoxedTechnique {
            Box::new(PlaceD1AtOrigin)
        }
    }

    #[test]
    fn test_from_grid_creates_tester() {
        let tester = TechniqueTester::from_grid(
            "1________\
             _________\
             _________\
             _________\
             _________\
             _________\
             _________\
             _________\
             _________",
        );
        let _ = tester;
    }

    #[test]
    fn test_apply_once_and_assert_placed() {
        TechniqueTester::new()
            .apply_once(&PlaceD1AtOrigin)
            .assert_placed(Position::new(0, 0), Digit::D1);
    }

    #[test]
    #[should_panic(expected = "Expected no-op to make a deduction")]
    fn test_apply_once_panics_without_deduction() {
        let _ = TechniqueTester::new().apply_once(&NoOpTechnique);
    }

    #[test]
    fn test_apply_until_stuck_stops() {
        TechniqueTester::new()
            .apply_until_stuck(&PlaceD1AtOrigin)
            .assert_placed(Position::new(0, 0), Digit::D1)
            .assert_stuck(&PlaceD1AtOrigin);
    }

    #[test]
    fn test_builders_shape_candidates() {
        TechniqueTester::new()
            .remove(Position::new(4, 4), Digit::D5)
            .remove_all(Figure::ROWS[0], Digit::D9)
            .keep(Position::new(8, 8), [Digit::D1, Digit::D2])
            .assert_stuck(&NoOpTechnique)
            .assert_no_candidate(Position::new(4, 4), Digit::D5)
            .assert_no_candidate(Position::new(3, 0), Digit::D9)
            .assert_candidates(Position::new(8, 8), [Digit::D1, Digit::D2])
            .assert_no_change(Position::new(5, 5));
    }

    #[test]
    #[should_panic(expected = "Expected the mark")]
    fn test_assert_no_candidate_fails_when_mark_remains() {
        let _ = TechniqueTester::new().assert_no_candidate(Position::new(0, 0), Digit::D1);
    }
}
