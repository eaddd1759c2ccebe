//! Side colors.

use std::fmt;
use std::ops::Not;

use crate::bitboard::Bitboard;

/// White or Black. White is the maximizing side for every score in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const COUNT: usize = 2;

    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// `+1` for White, `-1` for Black.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Index delta of a single pawn step. White moves toward rank 8, which has the lower indices.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -8,
            Color::Black => 8,
        }
    }

    /// Rank from which this side's pawns may advance two squares.
    #[inline]
    pub const fn pawn_home_rank(self) -> Bitboard {
        match self {
            Color::White => Bitboard::RANK_2,
            Color::Black => Bitboard::RANK_7,
        }
    }

    /// Rank on which this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> Bitboard {
        match self {
            Color::White => Bitboard::RANK_8,
            Color::Black => Bitboard::RANK_1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "w",
            Color::Black => "b",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use crate::square::Square;

    #[test]
    fn opposite() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
    }

    #[test]
    fn forward_step_matches_board_orientation() {
        assert_eq!(Square::E2.offset(Color::White.forward()), Some(Square::E3));
        assert_eq!(Square::E7.offset(Color::Black.forward()), Some(Square::E6));
    }

    #[test]
    fn home_and_promotion_ranks() {
        assert!(Color::White.pawn_home_rank().contains(Square::A2));
        assert!(Color::Black.pawn_home_rank().contains(Square::H7));
        assert!(Color::White.promotion_rank().contains(Square::D8));
        assert!(Color::Black.promotion_rank().contains(Square::D1));
    }

    #[test]
    fn sign_and_display() {
        assert_eq!(Color::White.sign() + Color::Black.sign(), 0);
        assert_eq!(Color::White.to_string(), "w");
        assert_eq!(Color::Black.to_string(), "b");
    }
}
