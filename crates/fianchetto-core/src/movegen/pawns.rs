//! Pawn pushes, captures, promotions and en passant.

use crate::attacks::pawn_attacks;
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

pub(super) fn generate(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();
    let pawn = Piece::new(PieceKind::Pawn, us);
    let enemies = board.side(!us);
    let last_rank = us.promotion_rank();

    for from in board.pieces(pawn) {
        if let Some(one) = from.offset(us.forward()).filter(|&sq| !board.is_occupied(sq)) {
            if last_rank.contains(one) {
                push_promotions(list, from, one, pawn, None);
            } else {
                list.push(Move::quiet(from, one, pawn));
                if us.pawn_home_rank().contains(from) {
                    if let Some(two) = one.offset(us.forward()).filter(|&sq| !board.is_occupied(sq)) {
                        list.push(Move::quiet(from, two, pawn));
                    }
                }
            }
        }

        let attacks = pawn_attacks(us, from.bitboard());
        for to in attacks & enemies {
            let Some(victim) = board.piece_at(to) else {
                continue;
            };
            if last_rank.contains(to) {
                push_promotions(list, from, to, pawn, Some(victim));
            } else {
                list.push(Move::capture(from, to, pawn, victim));
            }
        }

        if let Some(target) = board.en_passant() {
            if attacks.contains(target) {
                list.push(Move::en_passant(from, target, pawn));
            }
        }
    }
}

fn push_promotions(list: &mut MoveList, from: Square, to: Square, pawn: Piece, victim: Option<Piece>) {
    for kind in PieceKind::PROMOTIONS {
        list.push(Move::promotion(from, to, pawn, kind, victim));
    }
}
