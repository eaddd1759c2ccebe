//! Minimax alpha-beta with a capture-only quiescence extension.
//!
//! White maximises and Black minimises; scores stay in White's point of view
//! throughout instead of being negated between plies.

use fianchetto_core::{Board, Color, in_check, legal};

use crate::eval::{MATE, evaluate_with_moves};
use crate::search::control::{Cancelled, SearchControl};
use crate::search::ordering::order_moves;

/// Mate scores are pulled toward zero by `MATE_DEPTH_HORIZON - remaining depth`,
/// so a mate found with more depth left (a shorter mate) scores higher.
/// Depths beyond the horizon score as plain `MATE`, keeping every score
/// inside `[-MATE, MATE]`.
pub const MATE_DEPTH_HORIZON: i32 = 20;

/// Per-worker search state.
pub struct SearchContext<'a> {
    pub control: &'a SearchControl,
    pub nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub fn new(control: &'a SearchControl) -> Self {
        Self { control, nodes: 0 }
    }
}

/// Score of `board` searched `depth` plies deep within the `[alpha, beta]` window.
///
/// Checks the stop flag before doing anything else.
pub fn alphabeta(
    board: &mut Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext<'_>,
) -> Result<i32, Cancelled> {
    ctx.control.check()?;
    ctx.nodes += 1;

    if depth == 0 {
        return quiescence(board, alpha, beta, ctx);
    }

    let mut moves = legal(board);
    if moves.is_empty() {
        return Ok(terminal_score(board, depth));
    }
    order_moves(moves.as_mut_slice());

    if board.side_to_move() == Color::White {
        let mut best = i32::MIN;
        for &mv in &moves {
            let saved = board.apply(mv);
            let score = alphabeta(board, depth - 1, alpha, beta, ctx);
            board.undo(saved);
            best = best.max(score?);
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = i32::MAX;
        for &mv in &moves {
            let saved = board.apply(mv);
            let score = alphabeta(board, depth - 1, alpha, beta, ctx);
            board.undo(saved);
            best = best.min(score?);
            beta = beta.min(best);
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }
}

/// Search only captures and promotions until the position is quiet.
///
/// The static score stands in for every quiet continuation ("stand pat"), so a
/// side is never forced into a losing capture.
pub fn quiescence(
    board: &mut Board,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext<'_>,
) -> Result<i32, Cancelled> {
    ctx.control.check()?;
    ctx.nodes += 1;

    let mut moves = legal(board);
    let stand_pat = evaluate_with_moves(board, moves.as_slice());
    let maximizing = board.side_to_move() == Color::White;

    if maximizing {
        if stand_pat >= beta {
            return Ok(beta);
        }
        alpha = alpha.max(stand_pat);
    } else {
        if stand_pat <= alpha {
            return Ok(alpha);
        }
        beta = beta.min(stand_pat);
    }

    moves.retain(|mv| mv.is_tactical());
    if moves.is_empty() {
        return Ok(stand_pat);
    }
    order_moves(moves.as_mut_slice());

    let mut best = stand_pat;
    for &mv in &moves {
        let saved = board.apply(mv);
        let score = quiescence(board, alpha, beta, ctx);
        board.undo(saved);
        let score = score?;
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }
    Ok(best)
}

/// Mate or stalemate score for a side to move with no legal moves.
fn terminal_score(board: &Board, depth: u32) -> i32 {
    let mover = board.side_to_move();
    if !in_check(board, mover) {
        return 0;
    }
    let distance = MATE_DEPTH_HORIZON - depth.min(MATE_DEPTH_HORIZON as u32) as i32;
    match mover {
        Color::White => -MATE + distance,
        Color::Black => MATE - distance,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    use super::*;
    use crate::eval::evaluate;

    fn control(stopped: bool) -> SearchControl {
        SearchControl::new(Arc::new(AtomicBool::new(stopped)))
    }

    fn search(fen: &str, depth: u32) -> i32 {
        let mut board: Board = fen.parse().unwrap();
        let control = control(false);
        let mut ctx = SearchContext::new(&control);
        alphabeta(&mut board, depth, -MATE, MATE, &mut ctx).unwrap()
    }

    #[test]
    fn raised_flag_cancels_at_entry() {
        let mut board = Board::starting_position();
        let control = control(true);
        let mut ctx = SearchContext::new(&control);
        assert_eq!(alphabeta(&mut board, 3, -MATE, MATE, &mut ctx), Err(Cancelled));
        assert_eq!(quiescence(&mut board, -MATE, MATE, &mut ctx), Err(Cancelled));
        assert_eq!(ctx.nodes, 0);
    }

    #[test]
    fn search_leaves_the_board_untouched() {
        let mut board: Board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
            .parse()
            .unwrap();
        let before = board.clone();
        let control = control(false);
        let mut ctx = SearchContext::new(&control);
        alphabeta(&mut board, 2, -MATE, MATE, &mut ctx).unwrap();
        assert_eq!(board, before);
        assert!(ctx.nodes > 0);
    }

    #[test]
    fn mated_side_scores_by_remaining_depth() {
        // Fool's mate: White to move and mated.
        let fen = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
        assert_eq!(search(fen, 3), -MATE + (MATE_DEPTH_HORIZON - 3));
        assert_eq!(search("k6R/8/1K6/8/8/8/8/8 b - - 0 1", 2), MATE - (MATE_DEPTH_HORIZON - 2));
        assert_eq!(search("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1", 4), 0);
    }

    #[test]
    fn mate_scores_stay_inside_the_window_past_the_horizon() {
        let white_mated = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
        let black_mated = "k6R/8/1K6/8/8/8/8/8 b - - 0 1";
        for depth in [MATE_DEPTH_HORIZON as u32, 25, 30] {
            assert_eq!(search(white_mated, depth), -MATE, "depth {depth}");
            assert_eq!(search(black_mated, depth), MATE, "depth {depth}");
        }
    }

    #[test]
    fn finds_a_back_rank_mate() {
        // Rh1-h8 mates; found at depth 2 as a win for White.
        let score = search("k7/8/1K6/8/8/8/8/7R w - - 0 1", 2);
        assert!(score >= MATE - MATE_DEPTH_HORIZON, "score {score}");
    }

    #[test]
    fn quiet_position_returns_stand_pat() {
        let mut board: Board = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1".parse().unwrap();
        let control = control(false);
        let mut ctx = SearchContext::new(&control);
        let score = quiescence(&mut board, -MATE, MATE, &mut ctx).unwrap();
        assert_eq!(score, evaluate(&board));
    }

    #[test]
    fn quiescence_sees_a_hanging_queen() {
        // Black to move can take the undefended queen; the static score alone misses it.
        let mut board: Board = "4k3/8/4p3/3Q4/8/8/8/4K3 b - - 0 1".parse().unwrap();
        let control = control(false);
        let mut ctx = SearchContext::new(&control);
        let static_score = evaluate(&board);
        let resolved = quiescence(&mut board, -MATE, MATE, &mut ctx).unwrap();
        assert!(static_score > 700, "static {static_score}");
        assert!(resolved < 0, "resolved {resolved}");
    }
}
