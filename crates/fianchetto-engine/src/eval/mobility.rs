//! Mobility: how many legal moves the side to move has.

use fianchetto_core::Board;

/// Centipawns per legal move.
pub const MOBILITY_BONUS: i32 = 2;

/// `legal_moves × MOBILITY_BONUS`, positive when White is to move.
#[inline]
pub fn mobility(board: &Board, legal_moves: usize) -> i32 {
    legal_moves as i32 * MOBILITY_BONUS * board.side_to_move().sign()
}
