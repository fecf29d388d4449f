use std::iter::FusedIterator;

use tinyvec::ArrayVec;

/// Iterator over all `len`-element index subsets of `0..pool` in
/// lexicographic order.
///
/// Subset techniques pick cells or digits by index out of a small pool.
/// Enumeration is iterative: each step finds the rightmost index that can
/// still move, increments it, and rewrites the indices to its right as
/// consecutive successors.
#[derive(Debug, Clone)]
pub(crate) struct SubsetIndices {
    indices: ArrayVec<[u8; 4]>,
    len: u8,
    pool: u8,
    started: bool,
    done: bool,
}

impl SubsetIndices {
    /// Creates the enumeration of `len`-element subsets of `0..pool`.
    ///
    /// `len` must be 1-4 and `pool` at most 9; no technique asks for
    /// more. An empty enumeration results when `pool < len`.
    pub(crate) fn new(len: usize, pool: usize) -> Self {
        assert!((1..=4).contains(&len) && pool <= 9);
        #[expect(clippy::cast_possible_truncation)]
        let (len, pool) = (len as u8, pool as u8);
        let mut indices = ArrayVec::new();
        for i in 0..len {
            indices.push(i);
        }
        Self {
            indices,
            len,
            pool,
            started: false,
            done: pool < len,
        }
    }
}

impl Iterator for SubsetIndices {
    type Item = ArrayVec<[u8; 4]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices);
        }

        // Rightmost index that can still move: index i may rise to
        // pool - len + i.
        let mut i = self.len;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[usize::from(i)] < self.pool - self.len + i {
                break;
            }
        }
        let mut value = self.indices[usize::from(i)] + 1;
        self.indices[usize::from(i)] = value;
        for j in i + 1..self.len {
            value += 1;
            self.indices[usize::from(j)] = value;
        }
        Some(self.indices)
    }
}

impl FusedIterator for SubsetIndices {}
