use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr, Sub},
};

use crate::Position;

/// An ordered, duplicate-free set of board positions backed by an 81-bit
/// mask.
///
/// Figures are the currency of technique scans: rows, columns, boxes, and
/// every derived cell selection (neighbourhoods, candidate locations,
/// elimination targets) are figures, combined with the usual set algebra.
/// Iteration always yields positions in row-major order.
///
/// # Examples
///
/// ```
/// use gradoku_core::{Figure, Position};
///
/// let cross = Figure::ROWS[4] | Figure::COLUMNS[4];
/// assert_eq!(cross.len(), 17);
/// assert!(cross.contains(Position::new(4, 4)));
///
/// let corner = Figure::BOXES[0] & Figure::ROWS[0];
/// assert_eq!(corner.len(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Figure {
    bits: u128,
}

impl Figure {
    /// The empty figure.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The figure containing every cell of the board.
    pub const GRID: Self = Self {
        bits: (1_u128 << 81) - 1,
    };

    /// The nine rows, indexed by `y`.
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::EMPTY; 9];
        let mut y = 0;
        while y < 9 {
            rows[y] = Self {
                bits: 0x1ff_u128 << (y * 9),
            };
            y += 1;
        }
        rows
    };

    /// The nine columns, indexed by `x`.
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::EMPTY; 9];
        let mut x = 0;
        while x < 9 {
            let mut y = 0;
            while y < 9 {
                columns[x].bits |= 1_u128 << (y * 9 + x);
                y += 1;
            }
            x += 1;
        }
        columns
    };

    /// The nine 3x3 boxes, left to right, top to bottom.
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::EMPTY; 9];
        let mut index = 0;
        while index < 9 {
            let x0 = index % 3 * 3;
            let y0 = index / 3 * 3;
            let mut cell = 0;
            while cell < 9 {
                let x = x0 + cell % 3;
                let y = y0 + cell / 3;
                boxes[index].bits |= 1_u128 << (y * 9 + x);
                cell += 1;
            }
            index += 1;
        }
        boxes
    };

    /// Returns the 20 cells sharing a row, column, or box with `pos`,
    /// excluding `pos` itself.
    #[must_use]
    pub const fn neighbours(pos: Position) -> Self {
        let bits = Self::ROWS[pos.y() as usize].bits
            | Self::COLUMNS[pos.x() as usize].bits
            | Self::BOXES[pos.box_index() as usize].bits;
        Self {
            bits: bits & !(1_u128 << pos.index()),
        }
    }

    /// Creates an empty figure.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a figure containing only `pos`.
    #[must_use]
    #[inline]
    pub const fn only(pos: Position) -> Self {
        Self {
            bits: 1_u128 << pos.index(),
        }
    }

    /// Returns `true` if the figure contains `pos`.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        self.bits & (1_u128 << pos.index()) != 0
    }

    /// Inserts `pos`, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, pos: Position) -> bool {
        let inserted = !self.contains(pos);
        self.bits |= 1_u128 << pos.index();
        inserted
    }

    /// Removes `pos`, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, pos: Position) -> bool {
        let removed = self.contains(pos);
        self.bits &= !(1_u128 << pos.index());
        removed
    }

    /// Returns the number of cells in the figure.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the figure contains no cells.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the union of `self` and `other`.
    #[must_use]
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of `self` and `other`.
    #[must_use]
    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the cells of `self` that are not in `other`.
    #[must_use]
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns the only cell in the figure, or `None` unless the figure
    /// has exactly one element.
    #[must_use]
    pub fn as_single(self) -> Option<Position> {
        (self.len() == 1).then(|| Position::from_index(self.bits.trailing_zeros() as usize))
    }

    /// Returns the two cells of the figure in row-major order, or `None`
    /// unless the figure has exactly two elements.
    #[must_use]
    pub fn as_pair(self) -> Option<(Position, Position)> {
        if self.len() != 2 {
            return None;
        }
        let first = self.bits.trailing_zeros() as usize;
        let second = (127 - self.bits.leading_zeros()) as usize;
        Some((Position::from_index(first), Position::from_index(second)))
    }

    /// Returns the set of row indices touched by the figure.
    #[must_use]
    pub fn rows_occupied(self) -> LineSet {
        let mut lines = LineSet::EMPTY;
        for pos in self {
            lines.insert(pos.y());
        }
        lines
    }

    /// Returns the set of column indices touched by the figure.
    #[must_use]
    pub fn columns_occupied(self) -> LineSet {
        let mut lines = LineSet::EMPTY;
        for pos in self {
            lines.insert(pos.x());
        }
        lines
    }

    /// Returns an iterator over the cells in row-major order.
    #[must_use]
    #[inline]
    pub fn iter(self) -> FigureIter {
        FigureIter { bits: self.bits }
    }
}

impl fmt::Debug for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|pos| (pos.x(), pos.y())))
            .finish()
    }
}

impl BitOr for Figure {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for Figure {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl Sub for Figure {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl FromIterator<Position> for Figure {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut figure = Self::EMPTY;
        for pos in iter {
            figure.insert(pos);
        }
        figure
    }
}

impl IntoIterator for Figure {
    type Item = Position;
    type IntoIter = FigureIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`Figure`] in row-major order.
#[derive(Debug, Clone)]
pub struct FigureIter {
    bits: u128,
}

impl Iterator for FigureIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Position::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for FigureIter {}
impl ExactSizeIterator for FigureIter {}

/// A set of row or column indices (0-8) backed by a 9-bit mask.
///
/// Box-line techniques compare which lines a digit's cells occupy; two
/// figures interact when their occupied-line sets are equal pairs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSet {
    bits: u16,
}

impl LineSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns `true` if the set contains `line`.
    #[must_use]
    #[inline]
    pub const fn contains(self, line: u8) -> bool {
        self.bits & (1 << line) != 0
    }

    /// Inserts `line`, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, line: u8) -> bool {
        debug_assert!(line < 9);
        let inserted = !self.contains(line);
        self.bits |= 1 << line;
        inserted
    }

    /// Returns the number of lines in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no lines.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the two line indices in ascending order, or `None` unless
    /// the set has exactly two elements.
    #[must_use]
    pub fn as_pair(self) -> Option<(u8, u8)> {
        if self.len() != 2 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let pair = (
            self.bits.trailing_zeros() as u8,
            (15 - self.bits.leading_zeros()) as u8,
        );
        Some(pair)
    }
}

impl fmt::Debug for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries((0..9).filter(|&line| self.contains(line)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_figures() {
        for n in 0..9 {
            assert_eq!(Figure::ROWS[n].len(), 9);
            assert_eq!(Figure::COLUMNS[n].len(), 9);
            assert_eq!(Figure::BOXES[n].len(), 9);
        }
        assert_eq!(Figure::GRID.len(), 81);
        assert!(Figure::ROWS[2].contains(Position::new(7, 2)));
        assert!(Figure::COLUMNS[7].contains(Position::new(7, 2)));
        assert!(Figure::BOXES[1].contains(Position::new(4, 1)));
        assert!(Figure::BOXES[8].contains(Position::new(8, 8)));
    }

    #[test]
    fn test_box_layout() {
        // Box 5 covers columns 6-8 and rows 3-5.
        let expected: Figure = (6..9)
            .flat_map(|x| (3..6).map(move |y| Position::new(x, y)))
            .collect();
        assert_eq!(Figure::BOXES[5], expected);
    }

    #[test]
    fn test_neighbours() {
        let neighbours = Figure::neighbours(Position::new(4, 4));
        assert_eq!(neighbours.len(), 20);
        assert!(!neighbours.contains(Position::new(4, 4)));
        assert!(neighbours.contains(Position::new(0, 4)));
        assert!(neighbours.contains(Position::new(4, 0)));
        assert!(neighbours.contains(Position::new(3, 3)));
        assert!(!neighbours.contains(Position::new(0, 0)));

        let corner = Figure::neighbours(Position::new(0, 0));
        assert_eq!(corner.len(), 20);
    }

    #[test]
    fn test_algebra() {
        let row = Figure::ROWS[0];
        let column = Figure::COLUMNS[0];
        assert_eq!((row | column).len(), 17);
        assert_eq!((row & column).as_single(), Some(Position::new(0, 0)));
        assert_eq!((row - column).len(), 8);
        assert_eq!((Figure::BOXES[0] & Figure::ROWS[0]).len(), 3);
    }

    #[test]
    fn test_iteration_is_row_major() {
        let positions: Vec<_> = Figure::BOXES[0].iter().collect();
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[2], Position::new(2, 0));
        assert_eq!(positions[3], Position::new(0, 1));
        assert_eq!(positions[8], Position::new(2, 2));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_as_single_and_pair() {
        let mut figure = Figure::new();
        assert_eq!(figure.as_single(), None);
        assert!(figure.insert(Position::new(5, 2)));
        assert_eq!(figure.as_single(), Some(Position::new(5, 2)));
        assert!(figure.insert(Position::new(1, 7)));
        assert!(!figure.insert(Position::new(1, 7)));
        assert_eq!(figure.as_single(), None);
        assert_eq!(
            figure.as_pair(),
            Some((Position::new(5, 2), Position::new(1, 7)))
        );
        assert!(figure.insert(Position::new(0, 0)));
        assert_eq!(figure.as_pair(), None);

        assert!(figure.remove(Position::new(0, 0)));
        assert!(!figure.remove(Position::new(0, 0)));
        assert_eq!(
            figure.as_pair(),
            Some((Position::new(5, 2), Position::new(1, 7)))
        );
    }

    #[test]
    fn test_only() {
        let figure = Figure::only(Position::new(8, 8));
        assert_eq!(figure.len(), 1);
        assert_eq!(figure.as_single(), Some(Position::new(8, 8)));
        assert_eq!((Figure::GRID - figure).len(), 80);
        assert!(!(Figure::GRID - figure).contains(Position::new(8, 8)));
    }

    #[test]
    fn test_occupied_lines() {
        let mut figure = Figure::new();
        figure.insert(Position::new(1, 0));
        figure.insert(Position::new(2, 0));
        figure.insert(Position::new(1, 2));

        let rows = figure.rows_occupied();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.as_pair(), Some((0, 2)));

        let columns = figure.columns_occupied();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns.as_pair(), Some((1, 2)));
        assert!(columns.contains(1));
        assert!(!columns.contains(0));
    }

    #[test]
    fn test_line_set_pair_requires_two() {
        let mut lines = LineSet::new();
        assert!(lines.is_empty());
        assert_eq!(lines.as_pair(), None);
        lines.insert(4);
        assert_eq!(lines.as_pair(), None);
        lines.insert(4);
        assert_eq!(lines.len(), 1);
        lines.insert(8);
        assert_eq!(lines.as_pair(), Some((4, 8)));
    }
}
