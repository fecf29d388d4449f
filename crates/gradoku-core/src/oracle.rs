/// Interface to an exhaustive solver used for uniqueness checks and clue
/// minimization.
///
/// Implementations exchange puzzles in the 81-character text form that
/// [`Puzzle`](crate::Puzzle) parses and displays, keeping the seam free
/// of any particular solver representation. The human-technique engine
/// never consults an oracle; the puzzle generator does.
pub trait SolutionOracle {
    /// Counts the completions of `grid`, stopping as soon as `limit` is
    /// reached.
    ///
    /// Text that does not parse as a puzzle counts as zero.
    fn count_solutions(&self, grid: &str, limit: usize) -> usize;

    /// Removes clues from `grid` as long as a unique solution remains.
    ///
    /// Returns the minimized 81-character text. Text that does not parse
    /// as a puzzle is returned unchanged.
    fn minimize(&self, grid: &str) -> String;

    /// Returns `true` if `grid` has exactly one completion.
    fn has_unique_solution(&self, grid: &str) -> bool {
        self.count_solutions(grid, 2) == 1
    }
}
