//! Perft node counting for checking move generation against known totals.

use crate::board::Board;
use crate::chess_move::Move;
use crate::movegen::legal;
use tracing::trace;

/// Number of leaf positions reachable in exactly `depth` plies.
///
/// Depth 0 counts the position itself. The board is returned to its
/// starting state before this returns.
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal(board);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for &mv in &moves {
        let saved = board.apply(mv);
        nodes += perft(board, depth - 1);
        board.undo(saved);
    }
    nodes
}

/// Per-root-move breakdown of [`perft`], in generation order.
pub fn divide(board: &mut Board, depth: u32) -> Vec<(Move, u64)> {
    let moves = legal(board);
    let mut results = Vec::with_capacity(moves.len());
    for &mv in &moves {
        let saved = board.apply(mv);
        let count = perft(board, depth.saturating_sub(1));
        board.undo(saved);
        trace!(%mv, count, "divide");
        results.push((mv, count));
    }
    results
}
