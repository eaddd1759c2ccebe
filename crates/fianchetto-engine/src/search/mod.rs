//! Iterative-deepening search driver.
//!
//! Each depth scores every root move on the worker pool. A depth only
//! counts once all of its root moves finished before the stop flag went up;
//! otherwise the last completed depth's move stands.

pub mod alphabeta;
pub mod control;
pub mod hooks;
pub mod ordering;
mod pool;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use fianchetto_core::{Board, Color, Move, legal};
use tracing::{debug, info, warn};

use crate::book::{BOOK_PLY_LIMIT, OpeningBook};
use crate::config::SearchConfig;
use crate::eval::{MATE, evaluate};

use self::control::{SearchControl, Timer};
use self::hooks::{SearchHooks, SearchStats};
use self::ordering::{order_moves, promote_principal};
use self::pool::score_root_moves;

/// A score this close to [`MATE`] means a forced mate was found.
pub const MATE_MARGIN: i32 = 100;

/// The move chosen by one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// From White's point of view.
    pub score: i32,
    /// Deepest completed iteration. Zero for a book move, or when the first
    /// iteration did not finish and the best-ordered move was played instead.
    pub depth: u32,
    pub elapsed: Duration,
    pub nodes: u64,
    pub from_book: bool,
}

/// Choose a move for the side to move in `board`.
///
/// `ply` is the number of half-moves already played in the game; the book is
/// asked first while it is below [`BOOK_PLY_LIMIT`]. Returns `None` only when
/// the side to move has no legal move.
pub fn find_best_move(
    board: &Board,
    config: &SearchConfig,
    book: &dyn OpeningBook,
    ply: u32,
    hooks: &SearchHooks<'_>,
) -> Option<SearchResult> {
    find_best_move_until(board, config, book, ply, hooks, Arc::new(AtomicBool::new(false)))
}

/// [`find_best_move`] with a caller-owned stop flag.
///
/// Raising the flag from another thread ends the search as if the time
/// budget had run out.
pub fn find_best_move_until(
    board: &Board,
    config: &SearchConfig,
    book: &dyn OpeningBook,
    ply: u32,
    hooks: &SearchHooks<'_>,
    stopped: Arc<AtomicBool>,
) -> Option<SearchResult> {
    let control = SearchControl::new(stopped);
    let mut moves = legal(board).as_slice().to_vec();
    if moves.is_empty() {
        debug!(fen = %board, "no legal moves");
        return None;
    }

    let us = board.side_to_move();
    let maximizing = us == Color::White;

    if ply < BOOK_PLY_LIMIT
        && let Some(result) = book_move(board, &moves, book, ply, &control)
    {
        hooks.report_stats(&SearchStats {
            maximizing,
            elapsed_ms: result.elapsed.as_millis() as u64,
            depth: 0,
        });
        return Some(result);
    }

    info!(
        side = %us,
        budget_ms = config.time_budget.as_millis() as u64,
        max_depth = config.max_depth,
        threads = config.threads,
        "search started"
    );
    let _timer = Timer::start(config.time_budget, Arc::clone(control.stop_flag()));

    order_moves(&mut moves);
    let mut best = SearchResult {
        best_move: moves[0],
        score: evaluate(board),
        depth: 0,
        elapsed: Duration::ZERO,
        nodes: 0,
        from_book: false,
    };

    for depth in 1..=config.max_depth.max(1) {
        if control.is_stopped() {
            break;
        }
        promote_principal(&mut moves, best.best_move);

        let round = score_root_moves(board, &moves, depth, config.threads, &control, hooks.progress());
        best.nodes += round.nodes;
        if round.cancelled || control.is_stopped() {
            debug!(depth, "discarding cancelled depth");
            break;
        }

        let Some((mv, score)) = pick_best(&moves, &round.scores, maximizing) else {
            break;
        };
        best.best_move = mv;
        best.score = score;
        best.depth = depth;
        debug!(
            depth,
            best = %mv,
            score,
            elapsed_ms = control.elapsed().as_millis() as u64,
            "depth complete"
        );

        if score.abs() >= MATE - MATE_MARGIN {
            break;
        }
    }

    best.elapsed = control.elapsed();
    info!(
        best = %best.best_move,
        score = best.score,
        depth = best.depth,
        nodes = best.nodes,
        elapsed_ms = best.elapsed.as_millis() as u64,
        "search finished"
    );
    hooks.report_stats(&SearchStats {
        maximizing,
        elapsed_ms: best.elapsed.as_millis() as u64,
        depth: best.depth,
    });
    Some(best)
}

fn book_move(
    board: &Board,
    moves: &[Move],
    book: &dyn OpeningBook,
    ply: u32,
    control: &SearchControl,
) -> Option<SearchResult> {
    let suggestion = book.suggest(board, moves, ply)?;
    if !moves.contains(&suggestion) {
        warn!(suggestion = %suggestion, ply, "ignoring illegal book move");
        return None;
    }
    info!(book_move = %suggestion, ply, "book hit");
    Some(SearchResult {
        best_move: suggestion,
        score: 0,
        depth: 0,
        elapsed: control.elapsed(),
        nodes: 0,
        from_book: true,
    })
}

/// Highest score for White, lowest for Black. Ties keep the earlier move.
fn pick_best(moves: &[Move], scores: &[Option<i32>], maximizing: bool) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;
    for (&mv, &score) in moves.iter().zip(scores) {
        let score = score?;
        let better = match best {
            None => true,
            Some((_, current)) if maximizing => score > current,
            Some((_, current)) => score < current,
        };
        if better {
            best = Some((mv, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use fianchetto_core::{Piece, Square};

    use super::*;

    fn mv(from: Square, to: Square) -> Move {
        Move::quiet(from, to, Piece::WHITE_KNIGHT)
    }

    #[test]
    fn ties_keep_the_first_move() {
        let moves = [mv(Square::B1, Square::A3), mv(Square::B1, Square::C3), mv(Square::G1, Square::F3)];
        let scores = [Some(10), Some(30), Some(30)];
        assert_eq!(pick_best(&moves, &scores, true), Some((moves[1], 30)));
        assert_eq!(pick_best(&moves, &scores, false), Some((moves[0], 10)));
        let level = [Some(5), Some(5), Some(5)];
        assert_eq!(pick_best(&moves, &level, false), Some((moves[0], 5)));
    }

    #[test]
    fn missing_score_means_no_pick() {
        let moves = [mv(Square::B1, Square::A3), mv(Square::B1, Square::C3)];
        assert_eq!(pick_best(&moves, &[Some(1), None], true), None);
    }
}
