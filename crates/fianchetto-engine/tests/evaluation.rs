//! Colour symmetry of the static evaluation over positions from random play.

use fianchetto_core::{Board, CastleSide, CastlingRights, Color, Square, legal};
use fianchetto_engine::evaluate;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

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

fn random_position(seed: u64, plies: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::starting_position();
    for _ in 0..plies {
        let moves = legal(&board);
        if moves.is_empty() {
            break;
        }
        let _ = board.apply(moves[rng.gen_range(0..moves.len())]);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn mirrored_position_negates_the_score(seed in any::<u64>(), plies in 0usize..60) {
        let board = random_position(seed, plies);
        prop_assert_eq!(evaluate(&mirrored(&board)), -evaluate(&board), "{}", board);
    }

    #[test]
    fn mirroring_twice_is_the_identity(seed in any::<u64>(), plies in 0usize..60) {
        let board = random_position(seed, plies);
        let back = mirrored(&mirrored(&board));
        prop_assert_eq!(back.position_key(), board.position_key());
    }
}
