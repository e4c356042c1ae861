//! Set of board squares
//!
//! One bit per square index (`row * 8 + col`), so membership tests and set
//! operations are single bitwise operations.

use super::board::Square;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);
    pub const ALL: SquareSet = SquareSet(!0u64);

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        SquareSet(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(1u64 << sq.index())
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.index());
    }

    /// All squares of one row
    #[inline]
    pub const fn row_mask(row: u8) -> Self {
        SquareSet(0xFFu64 << (row * 8))
    }

    /// All squares of one column
    #[inline]
    pub const fn col_mask(col: u8) -> Self {
        SquareSet(0x0101_0101_0101_0101u64 << col)
    }

    /// Iterate squares in index order
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

/// Iterator over the members of a [`SquareSet`]
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Square::from_index(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl BitAnd for SquareSet {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for SquareSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        SquareSet(!self.0)
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..8 {
            write!(f, "  {} ", row + 1)?;
            for col in 0..8 {
                if self.contains(Square::new(row, col)) {
                    write!(f, "X ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "    a b c d e f g h")?;
        Ok(())
    }
}

impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(Square::to_algebraic).collect();
        write!(f, "{}", names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_set_empty() {
        let set = SquareSet::EMPTY;
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(SquareSet::ALL.len(), 64);
    }

    #[test]
    fn test_square_set_insert_remove() {
        let mut set = SquareSet::EMPTY;
        let e4 = Square::new(3, 4);
        set.insert(e4);
        assert!(set.contains(e4));
        assert!(!set.contains(Square::new(4, 3)));
        assert_eq!(set.len(), 1);
        set.remove(e4);
        assert!(set.is_empty());
    }

    #[test]
    fn test_square_set_iter_in_index_order() {
        let set: SquareSet = [Square::new(7, 7), Square::new(0, 0), Square::new(3, 2)]
            .into_iter()
            .collect();
        let squares: Vec<Square> = set.iter().collect();
        assert_eq!(squares, vec![Square::new(0, 0), Square::new(3, 2), Square::new(7, 7)]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn test_row_and_col_masks() {
        assert_eq!(SquareSet::row_mask(0).len(), 8);
        assert!(SquareSet::row_mask(7).contains(Square::new(7, 3)));
        assert!(SquareSet::col_mask(2).contains(Square::new(5, 2)));
        assert_eq!((SquareSet::row_mask(4) & SquareSet::col_mask(4)).len(), 1);
        assert_eq!((SquareSet::row_mask(4) | SquareSet::col_mask(4)).len(), 15);
    }

    #[test]
    fn test_square_set_display() {
        let set: SquareSet = [Square::new(1, 4), Square::new(3, 4)].into_iter().collect();
        assert_eq!(set.to_string(), "e2 e4");
        assert_eq!(SquareSet::EMPTY.to_string(), "");
    }
}
