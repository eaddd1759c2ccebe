//! 64-bit square sets. Bit `i` is the square with index `i`, so bit 0 is a8 and bit 63 is h1.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

use crate::square::Square;

/// A set of squares packed into a `u64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// No squares.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// All 64 squares.
    pub const FULL: Bitboard = Bitboard(!0);

    // Rank masks. Rank 8 sits in the low byte.
    pub const RANK_8: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_7: Bitboard = Bitboard(0x0000_0000_0000_FF00);
    pub const RANK_6: Bitboard = Bitboard(0x0000_0000_00FF_0000);
    pub const RANK_5: Bitboard = Bitboard(0x0000_0000_FF00_0000);
    pub const RANK_4: Bitboard = Bitboard(0x0000_00FF_0000_0000);
    pub const RANK_3: Bitboard = Bitboard(0x0000_FF00_0000_0000);
    pub const RANK_2: Bitboard = Bitboard(0x00FF_0000_0000_0000);
    pub const RANK_1: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    /// Wrap a raw `u64`.
    #[inline]
    pub const fn new(bits: u64) -> Bitboard {
        Bitboard(bits)
    }

    /// The raw `u64`.
    #[inline]
    pub const fn inner(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// Number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 >> sq.index()) & 1 == 1
    }

    /// Copy of the set with `sq` added.
    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | (1u64 << sq.index()))
    }

    /// Copy of the set with `sq` removed.
    #[inline]
    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !(1u64 << sq.index()))
    }

    /// Lowest-index square, or `None` when empty.
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index_unchecked(self.0.trailing_zeros() as u8))
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl Shl<u32> for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn shl(self, rhs: u32) -> Bitboard {
        Bitboard(self.0 << rhs)
    }
}

impl Shr<u32> for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn shr(self, rhs: u32) -> Bitboard {
        Bitboard(self.0 >> rhs)
    }
}

/// Iterates squares in ascending index order, consuming the set.
impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let sq = self.lsb()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bitboard {}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Bitboard {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::with)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..8u32 {
            write!(f, "  {} ", 8 - row)?;
            for col in 0..8u32 {
                let mark = if (self.0 >> (row * 8 + col)) & 1 == 1 { '1' } else { '.' };
                write!(f, "{mark} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Bitboard;
    use crate::square::Square;

    #[test]
    fn low_bit_is_a8() {
        let bb = Bitboard::new(1);
        assert_eq!(bb.lsb(), Some(Square::A8));
        assert!(Bitboard::RANK_8.contains(Square::H8));
        assert!(Bitboard::RANK_1.contains(Square::A1));
        assert!(Bitboard::FILE_A.contains(Square::A1));
        assert!(Bitboard::FILE_H.contains(Square::H8));
    }

    #[test]
    fn with_without_contains() {
        let bb = Bitboard::EMPTY.with(Square::E4).with(Square::D5);
        assert_eq!(bb.count(), 2);
        assert!(bb.contains(Square::E4));
        let bb = bb.without(Square::E4);
        assert!(!bb.contains(Square::E4));
        assert_eq!(bb.lsb(), Some(Square::D5));
    }

    #[test]
    fn shifting_one_rank() {
        // Moving toward rank 1 increases the index by eight.
        assert_eq!(Bitboard::RANK_7 << 8, Bitboard::RANK_6);
        assert_eq!(Bitboard::RANK_2 >> 8, Bitboard::RANK_3);
    }

    #[test]
    fn iterates_in_index_order() {
        let bb = Bitboard::EMPTY.with(Square::H1).with(Square::A8).with(Square::E4);
        assert_eq!(bb.len(), 3);
        let squares: Vec<Square> = bb.collect();
        assert_eq!(squares, vec![Square::A8, Square::E4, Square::H1]);
    }

    #[test]
    fn collect_from_squares() {
        let bb: Bitboard = [Square::A1, Square::B1, Square::A1].into_iter().collect();
        assert_eq!(bb.count(), 2);
    }

    #[test]
    fn every_rank_and_file_has_eight_squares() {
        for mask in [Bitboard::RANK_1, Bitboard::RANK_4, Bitboard::RANK_8, Bitboard::FILE_A, Bitboard::FILE_H] {
            assert_eq!(mask.count(), 8);
        }
        let ranks = Bitboard::RANK_1 | Bitboard::RANK_2 | Bitboard::RANK_3 | Bitboard::RANK_4
            | Bitboard::RANK_5 | Bitboard::RANK_6 | Bitboard::RANK_7 | Bitboard::RANK_8;
        assert_eq!(ranks, Bitboard::FULL);
    }

    #[test]
    fn debug_grid_puts_rank_8_first() {
        let text = format!("{:?}", Square::A8.bitboard());
        let first_row = text.lines().nth(1).unwrap_or_default();
        assert!(first_row.starts_with("  8 1"), "unexpected grid: {text}");
    }
}
