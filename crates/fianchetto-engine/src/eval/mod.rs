//! Static evaluation, in centipawns from White's point of view.
//!
//! Two scores are blended by [`game_phase`]:
//!
//! - opening: material + mobility
//! - endgame: material + king activity + pawn advancement
//!
//! The piece-square term is added on top of the blend, with its own king
//! tables blended by the same phase.

pub mod endgame;
pub mod material;
pub mod mobility;
pub mod phase;
pub mod pst;

use fianchetto_core::{Board, Color, Move, in_check, legal};

use self::endgame::{king_activity, pawn_advancement};
use self::material::material;
use self::mobility::mobility;
use self::phase::game_phase;
use self::pst::positional;

/// Score of a checkmate, before any depth adjustment.
pub const MATE: i32 = 1_000_000;

/// Evaluate `board`. Positive favours White.
///
/// A mated side to move scores `-MATE` for White or `MATE` for Black; a
/// stalemate scores zero.
pub fn evaluate(board: &Board) -> i32 {
    evaluate_with_moves(board, legal(board).as_slice())
}

/// [`evaluate`] with the legal moves of `board` already generated.
pub(crate) fn evaluate_with_moves(board: &Board, legal: &[Move]) -> i32 {
    if legal.is_empty() {
        let mover = board.side_to_move();
        if !in_check(board, mover) {
            return 0;
        }
        return match mover {
            Color::White => -MATE,
            Color::Black => MATE,
        };
    }

    let phase = game_phase(board);
    let material = material(board);
    let opening = material + mobility(board, legal.len());
    let endgame = material + king_activity(board) + pawn_advancement(board);

    let blended = phase * f64::from(opening) + (1.0 - phase) * f64::from(endgame);
    (blended + f64::from(positional(board, phase))).round() as i32
}

#[cfg(test)]
mod tests {
    use fianchetto_core::{Board, CastleSide, CastlingRights, Color, Square};

    use super::*;

    const POSITIONS: [&str; 5] = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 4 4",
        "8/5k2/8/3P4/8/8/2K5/8 w - - 0 1",
    ];

    /// Flip the board top to bottom, swap colours and hand the move to the other side.
    fn mirrored(board: &Board) -> Board {
        let mut out = Board::empty();
        for sq in Square::all() {
            if let Some(piece) = board.piece_at(sq) {
                out.put(sq.mirror(), piece.flipped());
            }
        }
        out.set_side_to_move(!board.side_to_move());
        let mut rights = CastlingRights::NONE;
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if board.castling().has(color, side) {
                    rights = rights.with(!color, side);
                }
            }
        }
        out.set_castling(rights);
        out.set_en_passant(board.en_passant().map(Square::mirror));
        out
    }

    #[test]
    fn starting_position_favours_nobody_but_the_mover() {
        // Only the mobility of the side to move breaks the symmetry.
        assert_eq!(evaluate(&Board::starting_position()), 40);
    }

    #[test]
    fn mirroring_negates_the_score() {
        for fen in POSITIONS {
            let board: Board = fen.parse().unwrap();
            assert_eq!(evaluate(&mirrored(&board)), -evaluate(&board), "{fen}");
        }
    }

    #[test]
    fn terminal_positions() {
        let white_mated: Board = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3".parse().unwrap();
        assert_eq!(evaluate(&white_mated), -MATE);
        let black_mated: Board = "k6R/8/1K6/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(evaluate(&black_mated), MATE);
        let stalemate: Board = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(evaluate(&stalemate), 0);
    }

    #[test]
    fn extra_material_dominates() {
        let board: Board = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1".parse().unwrap();
        assert!(evaluate(&board) > 800);
    }

    #[test]
    fn bare_endgame_uses_endgame_terms() {
        // Kings only: phase 0, material 0, the king tables and centralisation decide.
        let board: Board = "7k/8/8/8/4K3/8/8/8 w - - 0 1".parse().unwrap();
        // Activity: (6 - 0) * 15 - (6 - 6) * 15 = 90. Tables: 40 - (-50) = 90.
        assert_eq!(evaluate(&board), 180);
    }
}
