//! Attack sets for every piece kind.
//!
//! Knight and king attacks come from tables built at compile time. Bishop,
//! rook and queen attacks are walked ray by ray against the occupancy.

mod rays;
mod tables;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::square::Square;

use self::rays::{DIAGONAL, ORTHOGONAL, slide};
use self::tables::{KING_ATTACKS, KNIGHT_ATTACKS};

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Diagonal attacks from `sq`, blocked by `occupied`.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slide(sq, &DIAGONAL, occupied)
}

/// Orthogonal attacks from `sq`, blocked by `occupied`.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slide(sq, &ORTHOGONAL, occupied)
}

#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}

/// Squares attacked diagonally forward by a set of `color` pawns.
///
/// Shifts drop pawns on the edge file that would otherwise wrap to the far side.
#[inline]
pub fn pawn_attacks(color: Color, pawns: Bitboard) -> Bitboard {
    match color {
        Color::White => ((pawns >> 7) & !Bitboard::FILE_A) | ((pawns >> 9) & !Bitboard::FILE_H),
        Color::Black => ((pawns << 7) & !Bitboard::FILE_H) | ((pawns << 9) & !Bitboard::FILE_A),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(squares: &[Square]) -> Bitboard {
        squares.iter().copied().collect()
    }

    #[test]
    fn knight_in_corner_and_center() {
        assert_eq!(knight_attacks(Square::A1), set(&[Square::B3, Square::C2]));
        assert_eq!(knight_attacks(Square::H8), set(&[Square::G6, Square::F7]));
        assert_eq!(knight_attacks(Square::D4).count(), 8);
        assert_eq!(knight_attacks(Square::B1).count(), 3);
    }

    #[test]
    fn king_never_wraps() {
        assert_eq!(king_attacks(Square::A8), set(&[Square::B8, Square::A7, Square::B7]));
        assert_eq!(king_attacks(Square::H4).count(), 5);
        assert!(!king_attacks(Square::H4).contains(Square::A4));
        assert_eq!(king_attacks(Square::E4).count(), 8);
    }

    #[test]
    fn tables_are_symmetric() {
        for a in Square::all() {
            for b in knight_attacks(a) {
                assert!(knight_attacks(b).contains(a));
            }
            for b in king_attacks(a) {
                assert!(king_attacks(b).contains(a));
            }
        }
    }

    #[test]
    fn rook_rays_stop_at_first_blocker() {
        let blockers = set(&[Square::D6, Square::F4]);
        let attacks = rook_attacks(Square::D4, blockers);
        assert!(attacks.contains(Square::D6));
        assert!(!attacks.contains(Square::D7));
        assert!(attacks.contains(Square::F4));
        assert!(!attacks.contains(Square::G4));
        assert!(attacks.contains(Square::A4));
        assert!(attacks.contains(Square::D1));
        assert_eq!(attacks.count(), 2 + 3 + 3 + 2);
    }

    #[test]
    fn sliders_on_an_empty_board() {
        assert_eq!(rook_attacks(Square::A1, Bitboard::EMPTY).count(), 14);
        assert_eq!(bishop_attacks(Square::A1, Bitboard::EMPTY).count(), 7);
        assert_eq!(bishop_attacks(Square::D4, Bitboard::EMPTY).count(), 13);
        assert_eq!(queen_attacks(Square::D4, Bitboard::EMPTY).count(), 27);
    }

    #[test]
    fn bishop_rays_do_not_wrap() {
        let attacks = bishop_attacks(Square::H4, Bitboard::EMPTY);
        assert!(attacks.contains(Square::G5));
        assert!(attacks.contains(Square::E1));
        assert!(!attacks.contains(Square::A4));
        assert!(!attacks.contains(Square::A5));
        assert_eq!(attacks.count(), 7);
    }

    #[test]
    fn pawn_captures_are_edge_masked() {
        assert_eq!(pawn_attacks(Color::White, Square::E4.bitboard()), set(&[Square::D5, Square::F5]));
        assert_eq!(pawn_attacks(Color::White, Square::A2.bitboard()), set(&[Square::B3]));
        assert_eq!(pawn_attacks(Color::White, Square::H2.bitboard()), set(&[Square::G3]));
        assert_eq!(pawn_attacks(Color::Black, Square::E5.bitboard()), set(&[Square::D4, Square::F4]));
        assert_eq!(pawn_attacks(Color::Black, Square::A7.bitboard()), set(&[Square::B6]));
        assert_eq!(pawn_attacks(Color::Black, Square::H7.bitboard()), set(&[Square::G6]));
    }
}
