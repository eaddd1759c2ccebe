//! King steps and castling.

use crate::attacks::king_attacks;
use crate::board::Board;
use crate::castling::{CastleSide, castle_path};
use crate::chess_move::Move;
use crate::oracle::is_square_attacked;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

use super::MoveList;

pub(super) fn generate(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();
    let king = Piece::new(PieceKind::King, us);
    let own = board.side(us);

    for from in board.pieces(king) {
        for to in king_attacks(from) & !own {
            match board.piece_at(to) {
                Some(victim) => list.push(Move::capture(from, to, king, victim)),
                None => list.push(Move::quiet(from, to, king)),
            }
        }
    }

    let Some(from) = board.king_square(us) else {
        return;
    };
    let them = !us;
    let rook = Piece::new(PieceKind::Rook, us);
    for side in CastleSide::ALL {
        if !board.castling().has(us, side) {
            continue;
        }
        let path = castle_path(us, side);
        // Castling never starts from check and never crosses an attacked square.
        if from == path.king_from
            && board.pieces(rook).contains(path.rook_from)
            && (board.occupied() & path.between).is_empty()
            && !is_square_attacked(board, from, them)
            && path.king_walk.iter().all(|&sq| !is_square_attacked(board, sq, them))
        {
            list.push(Move::castle(path.king_from, path.king_to, king));
        }
    }
}
