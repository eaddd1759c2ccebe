//! Terms that only count toward the endgame half of the blend.

use fianchetto_core::{Board, Color, PieceKind, Square};

/// Centipawns per step of closeness to the centre, from 0 at six steps away.
pub const KING_CENTER_WEIGHT: i32 = 15;

/// Centipawns per rank a pawn has advanced.
pub const PAWN_ADVANCE_WEIGHT: i32 = 6;

/// d5, e5, d4, e4 as (file, row) with row 0 = rank 8.
const CENTER: [(i32, i32); 4] = [(3, 3), (4, 3), (3, 4), (4, 4)];

/// Manhattan distance from `sq` to the nearest of the four centre squares.
pub fn center_distance(sq: Square) -> i32 {
    let (file, row) = (i32::from(sq.file()), i32::from(sq.row()));
    CENTER
        .iter()
        .map(|&(cf, cr)| (file - cf).abs() + (row - cr).abs())
        .min()
        .unwrap_or(0)
}

/// Reward for the king nearer the centre. Zero unless both kings are present.
pub fn king_activity(board: &Board) -> i32 {
    match (board.king_square(Color::White), board.king_square(Color::Black)) {
        (Some(white), Some(black)) => {
            let bonus = |sq| (6 - center_distance(sq)) * KING_CENTER_WEIGHT;
            bonus(white) - bonus(black)
        }
        _ => 0,
    }
}

/// Reward for pawns closer to promotion, White minus Black.
pub fn pawn_advancement(board: &Board) -> i32 {
    let white: i32 = board
        .pieces_of(PieceKind::Pawn, Color::White)
        .into_iter()
        .map(|sq| 7 - i32::from(sq.row()))
        .sum();
    let black: i32 = board
        .pieces_of(PieceKind::Pawn, Color::Black)
        .into_iter()
        .map(|sq| i32::from(sq.row()))
        .sum();
    (white - black) * PAWN_ADVANCE_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_to_the_centre() {
        assert_eq!(center_distance(Square::E4), 0);
        assert_eq!(center_distance(Square::D5), 0);
        assert_eq!(center_distance(Square::A1), 6);
        assert_eq!(center_distance(Square::H8), 6);
        assert_eq!(center_distance(Square::E1), 3);
        assert_eq!(center_distance(Square::E8), 3);
    }

    #[test]
    fn central_king_is_rewarded() {
        let board: Board = "7k/8/8/8/4K3/8/8/8 w - - 0 1".parse().unwrap();
        assert_eq!(king_activity(&board), 6 * KING_CENTER_WEIGHT);
        assert_eq!(king_activity(&Board::starting_position()), 0);
    }

    #[test]
    fn missing_king_scores_nothing() {
        let mut board = Board::empty();
        board.put(Square::E4, fianchetto_core::Piece::WHITE_KING);
        assert_eq!(king_activity(&board), 0);
    }

    #[test]
    fn advanced_pawns() {
        // a7 pawn is six ranks up for White; h2 pawn is six ranks down for Black.
        let board: Board = "4k3/P7/8/8/8/8/7p/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(pawn_advancement(&board), 0);
        let only_white: Board = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(pawn_advancement(&only_white), 6 * PAWN_ADVANCE_WEIGHT);
        assert_eq!(pawn_advancement(&Board::starting_position()), 0);
    }
}
