use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr, Sub},
};

use crate::Digit;

/// A set of Sudoku digits backed by a 9-bit mask.
///
/// Candidate (pencilmark) bookkeeping stores one of these per cell, so the
/// type is `Copy` and every operation is a couple of bit instructions.
/// Iteration yields digits in ascending order.
///
/// # Examples
///
/// ```
/// use gradoku_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::EMPTY;
/// set.insert(Digit::D4);
/// set.insert(Digit::D7);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Digit::D4));
/// assert_eq!(set.as_single(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing every digit.
    pub const FULL: Self = Self { bits: 0x1ff };

    const fn mask(digit: Digit) -> u16 {
        1 << (digit as u16 - 1)
    }

    /// Creates an empty set.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    #[inline]
    pub const fn only(digit: Digit) -> Self {
        Self {
            bits: Self::mask(digit),
        }
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    #[inline]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::mask(digit) != 0
    }

    /// Inserts `digit`, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, digit: Digit) -> bool {
        let inserted = !self.contains(digit);
        self.bits |= Self::mask(digit);
        inserted
    }

    /// Removes `digit`, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, digit: Digit) -> bool {
        let removed = self.contains(digit);
        self.bits &= !Self::mask(digit);
        removed
    }

    /// Returns the number of digits in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the only digit in the set, or `None` unless the set has
    /// exactly one element.
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        (self.len() == 1).then(|| Digit::from_index(self.bits.trailing_zeros() as usize))
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

    /// Returns the digits of `self` that are not in `other`.
    #[must_use]
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    #[inline]
    pub fn iter(self) -> DigitSetIter {
        DigitSetIter { bits: self.bits }
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl Sub for DigitSet {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct DigitSetIter {
    bits: u16,
}

impl Iterator for DigitSetIter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Digit::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for DigitSetIter {}
impl ExactSizeIterator for DigitSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_insert_remove() {
        let mut set = DigitSet::new();
        assert!(set.insert(Digit::D3));
        assert!(!set.insert(Digit::D3));
        assert_eq!(set.len(), 1);
        assert!(set.remove(Digit::D3));
        assert!(!set.remove(Digit::D3));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_order() {
        let set: DigitSet = [Digit::D9, Digit::D1, Digit::D5].into_iter().collect();
        let digits: Vec<_> = set.iter().collect();
        assert_eq!(digits, [Digit::D1, Digit::D5, Digit::D9]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::only(Digit::D7).as_single(), Some(Digit::D7));
        assert_eq!(DigitSet::FULL.as_single(), None);
    }

    #[test]
    fn test_operations() {
        let low: DigitSet = [Digit::D1, Digit::D2, Digit::D3].into_iter().collect();
        let odd: DigitSet = [Digit::D1, Digit::D3, Digit::D5].into_iter().collect();

        let union = low | odd;
        assert_eq!(union.len(), 4);
        let both = low & odd;
        assert_eq!(
            both.iter().collect::<Vec<_>>(),
            [Digit::D1, Digit::D3]
        );
        let low_only = low - odd;
        assert_eq!(low_only.as_single(), Some(Digit::D2));
    }

    #[test]
    fn test_debug_lists_values() {
        let set: DigitSet = [Digit::D2, Digit::D8].into_iter().collect();
        assert_eq!(format!("{set:?}"), "{2, 8}");
    }
}
