//! Attack and check queries over a position snapshot.

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Every square attacked by at least one piece of `color`.
///
/// Sliding pieces are blocked by the full occupancy. An attacked square may
/// hold a piece of either color.
pub fn attacked_by(board: &Board, color: Color) -> Bitboard {
    let occupied = board.occupied();
    let mut attacks = pawn_attacks(color, board.pieces_of(PieceKind::Pawn, color));
    for sq in board.pieces_of(PieceKind::Knight, color) {
        attacks |= knight_attacks(sq);
    }
    for sq in board.pieces_of(PieceKind::Bishop, color) {
        attacks |= bishop_attacks(sq, occupied);
    }
    for sq in board.pieces_of(PieceKind::Rook, color) {
        attacks |= rook_attacks(sq, occupied);
    }
    for sq in board.pieces_of(PieceKind::Queen, color) {
        attacks |= queen_attacks(sq, occupied);
    }
    for sq in board.pieces_of(PieceKind::King, color) {
        attacks |= king_attacks(sq);
    }
    attacks
}

/// Whether any piece of `by` attacks `sq`.
///
/// Gives the same answer as `attacked_by(board, by).contains(sq)` by looking
/// outward from the target instead of from every attacker.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    let occupied = board.occupied();
    let queens = board.pieces_of(PieceKind::Queen, by);

    // A pawn of `by` attacks `sq` exactly when a pawn of the other color on `sq` would attack it.
    (pawn_attacks(!by, sq.bitboard()) & board.pieces_of(PieceKind::Pawn, by)).is_nonempty()
        || (knight_attacks(sq) & board.pieces_of(PieceKind::Knight, by)).is_nonempty()
        || (king_attacks(sq) & board.pieces_of(PieceKind::King, by)).is_nonempty()
        || (bishop_attacks(sq, occupied) & (board.pieces_of(PieceKind::Bishop, by) | queens)).is_nonempty()
        || (rook_attacks(sq, occupied) & (board.pieces_of(PieceKind::Rook, by) | queens)).is_nonempty()
}

/// Whether the king of `color` is attacked. A side without a king is never in check.
pub fn in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, !color),
        None => false,
    }
}
