//! Move ordering: most valuable victim, least valuable attacker, plus promotions.

use fianchetto_core::{Move, PieceKind};

use crate::eval::material::piece_value;

/// Heuristic sort key. Higher is searched first.
///
/// Captures score `10 × victim − attacker`, with an en passant victim counted
/// as a pawn. Promotions add the value of the new piece.
pub fn order_score(mv: Move) -> i32 {
    let mut score = 0;
    if mv.is_capture() {
        let victim = mv.captured().map_or(PieceKind::Pawn, |piece| piece.kind());
        score += 10 * piece_value(victim) - piece_value(mv.piece().kind());
    }
    if let Some(kind) = mv.promotion_kind() {
        score += piece_value(kind);
    }
    score
}

/// Stable sort by descending [`order_score`]. Equal scores keep generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|&mv| std::cmp::Reverse(order_score(mv)));
}

/// Move the entry matching `principal` (same squares and promotion) to the front.
///
/// The moves ahead of it shift back by one; the rest keep their order.
pub fn promote_principal(moves: &mut [Move], principal: Move) {
    if let Some(index) = moves.iter().position(|mv| mv.same_route(principal)) {
        moves[..=index].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use fianchetto_core::{Board, Piece, Square, legal};

    use super::*;

    #[test]
    fn captures_rank_by_victim_then_attacker() {
        let pawn_takes_queen = Move::capture(Square::E4, Square::D5, Piece::WHITE_PAWN, Piece::BLACK_QUEEN);
        let queen_takes_queen = Move::capture(Square::D1, Square::D5, Piece::WHITE_QUEEN, Piece::BLACK_QUEEN);
        let queen_takes_pawn = Move::capture(Square::D1, Square::D7, Piece::WHITE_QUEEN, Piece::BLACK_PAWN);
        assert_eq!(order_score(pawn_takes_queen), 8_900);
        assert_eq!(order_score(queen_takes_queen), 8_100);
        assert_eq!(order_score(queen_takes_pawn), 100);
        assert_eq!(order_score(Move::quiet(Square::E2, Square::E4, Piece::WHITE_PAWN)), 0);
    }

    #[test]
    fn en_passant_counts_as_a_pawn_capture() {
        let mv = Move::en_passant(Square::E5, Square::D6, Piece::WHITE_PAWN);
        assert_eq!(order_score(mv), 900);
    }

    #[test]
    fn promotions_add_the_new_piece() {
        let push = Move::promotion(Square::A7, Square::A8, Piece::WHITE_PAWN, PieceKind::Queen, None);
        let take = Move::promotion(
            Square::A7,
            Square::B8,
            Piece::WHITE_PAWN,
            PieceKind::Knight,
            Some(Piece::BLACK_ROOK),
        );
        assert_eq!(order_score(push), 900);
        assert_eq!(order_score(take), 10 * 500 - 100 + 320);
    }

    #[test]
    fn sort_is_stable_and_descending() {
        let board: Board = "4k3/8/8/3q4/4P3/8/8/3QK3 w - - 0 1".parse().unwrap();
        let mut moves = legal(&board).as_slice().to_vec();
        let quiet_before: Vec<Move> = moves.iter().copied().filter(|&mv| order_score(mv) == 0).collect();
        order_moves(&mut moves);
        assert_eq!(moves[0].to_string(), "e4d5");
        assert_eq!(moves[1].to_string(), "d1d5");
        let quiet_after: Vec<Move> = moves.iter().copied().filter(|&mv| order_score(mv) == 0).collect();
        assert_eq!(quiet_before, quiet_after);
        assert!(moves.windows(2).all(|w| order_score(w[0]) >= order_score(w[1])));
    }

    #[test]
    fn principal_move_goes_first() {
        let mut moves = legal(&Board::starting_position()).as_slice().to_vec();
        let original = moves.clone();
        let principal = original[7];
        promote_principal(&mut moves, principal);
        assert_eq!(moves[0], principal);
        assert_eq!(&moves[1..8], &original[..7]);
        assert_eq!(&moves[8..], &original[8..]);
    }
}
