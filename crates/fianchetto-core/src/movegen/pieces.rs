//! Knight, bishop, rook and queen moves.

use crate::attacks::{bishop_attacks, knight_attacks, queen_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

const KINDS: [PieceKind; 4] = [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen];

pub(super) fn generate(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();
    let own = board.side(us);
    let occupied = board.occupied();

    for kind in KINDS {
        let piece = Piece::new(kind, us);
        for from in board.pieces(piece) {
            let targets = attacks(kind, from, occupied) & !own;
            for to in targets {
                match board.piece_at(to) {
                    Some(victim) => list.push(Move::capture(from, to, piece, victim)),
                    None => list.push(Move::quiet(from, to, piece)),
                }
            }
        }
    }
}

fn attacks(kind: PieceKind, from: Square, occupied: Bitboard) -> Bitboard {
    match kind {
        PieceKind::Knight => knight_attacks(from),
        PieceKind::Bishop => bishop_attacks(from, occupied),
        PieceKind::Rook => rook_attacks(from, occupied),
        _ => queen_attacks(from, occupied),
    }
}
