//! A set of board cells, where each bit index of a 64-bit unsigned integer
//! represents one cell.
//!
//! Data Order:
//! * Row-major: index = row * width + col
//! * (0, 0) = least significant bit = 0
//! * (0, 1) = 0b10 = 1
//! * (1, 0) on a 7-wide board = 1 << 7
//!
//! The board width is not stored in the bitboard; callers convert coordinates
//! to indices.

use std::ops::{BitAnd, Not};

/// Alias for inner type of Bitboard.
pub type BitboardKind = u64;

/// Bitboard is a wrapper around a u64 integer, where each bit represents
/// some or none on its corresponding board cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(pub(crate) BitboardKind);

impl Bitboard {
    pub const EMPTY: Bitboard = Self(0x0);

    /// Returns a bitboard with the lowest `num_cells` bits set.
    pub const fn filled(num_cells: usize) -> Self {
        match num_cells {
            0 => Self::EMPTY,
            n if n >= 64 => Self(BitboardKind::MAX),
            n => Self((1 << n) - 1),
        }
    }

    /// Returns true if there are no cells in self, false otherwise.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns number of cells in bitboard.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if index is populated.
    #[inline(always)]
    pub const fn has_cell(&self, idx: usize) -> bool {
        self.0 & (1 << idx) != 0
    }

    /// Sets bit index to 1.
    #[inline(always)]
    pub fn set_cell(&mut self, idx: usize) {
        self.0 |= 1 << idx;
    }

    /// Sets bit index to 0.
    #[inline(always)]
    pub fn clear_cell(&mut self, idx: usize) {
        self.0 &= !(1 << idx);
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}
impl Not for Bitboard {
    type Output = Self;
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

/// Iterates cell indices from least to most significant bit.
impl Iterator for Bitboard {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            None
        } else {
            let idx = self.0.trailing_zeros() as usize;
            self.clear_cell(idx);
            Some(idx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_and_len() {
        assert_eq!(Bitboard::filled(0), Bitboard::EMPTY);
        assert_eq!(Bitboard::filled(49).len(), 49);
        assert_eq!(Bitboard::filled(64).len(), 64);
        assert!(!Bitboard::filled(3).has_cell(3));
    }

    #[test]
    fn set_clear_iterate() {
        let mut bb = Bitboard::EMPTY;
        bb.set_cell(5);
        bb.set_cell(0);
        bb.set_cell(63);
        assert!(bb.has_cell(63));
        assert_eq!(bb.collect::<Vec<_>>(), vec![0, 5, 63]);

        bb.clear_cell(5);
        assert_eq!(bb.len(), 2);
        assert_eq!((!bb & Bitboard::filled(8)).len(), 7);
    }
}
