//! Root-move worker pool.
//!
//! Each depth of iterative deepening scores every root move independently.
//! Workers take the next unclaimed root move from a shared counter, search it
//! on their own copy of the position and report the score by index, so
//! collection order never depends on thread timing.

use std::sync::atomic::{AtomicUsize, Ordering};

use fianchetto_core::{Board, Move};

use crate::eval::MATE;
use crate::search::alphabeta::{SearchContext, alphabeta};
use crate::search::control::{Cancelled, SearchControl};
use crate::search::hooks::Progress;

/// Scores for one depth, indexed like the root moves.
#[derive(Debug)]
pub(crate) struct RootScores {
    pub scores: Vec<Option<i32>>,
    pub cancelled: bool,
    pub nodes: u64,
}

/// Score every move in `moves` to `depth` plies, the move itself counting as the first.
pub(crate) fn score_root_moves(
    root: &Board,
    moves: &[Move],
    depth: u32,
    threads: usize,
    control: &SearchControl,
    progress: Option<&(dyn Fn(&Progress) + Sync + '_)>,
) -> RootScores {
    let next = AtomicUsize::new(0);
    let workers = threads.clamp(1, moves.len().max(1));

    let per_worker: Vec<(Vec<(usize, Result<i32, Cancelled>)>, u64)> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let next = &next;
                s.spawn(move || worker(root, moves, depth, control, next, progress))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    let mut out = RootScores {
        scores: vec![None; moves.len()],
        cancelled: false,
        nodes: 0,
    };
    for (results, nodes) in per_worker {
        out.nodes += nodes;
        for (index, result) in results {
            match result {
                Ok(score) => out.scores[index] = Some(score),
                Err(Cancelled) => out.cancelled = true,
            }
        }
    }
    out
}

fn worker(
    root: &Board,
    moves: &[Move],
    depth: u32,
    control: &SearchControl,
    next: &AtomicUsize,
    progress: Option<&(dyn Fn(&Progress) + Sync + '_)>,
) -> (Vec<(usize, Result<i32, Cancelled>)>, u64) {
    let mut ctx = SearchContext::new(control);
    let mut results = Vec::new();
    loop {
        let index = next.fetch_add(1, Ordering::Relaxed);
        let Some(&mv) = moves.get(index) else {
            break;
        };

        let mut board = root.clone();
        let _ = board.apply(mv);
        let result = alphabeta(&mut board, depth.saturating_sub(1), -MATE, MATE, &mut ctx);
        if let (Ok(score), Some(report)) = (result, progress) {
            report(&Progress {
                depth,
                from: mv.from(),
                to: mv.to(),
                score,
            });
        }
        let stop = result.is_err();
        results.push((index, result));
        if stop {
            break;
        }
    }
    (results, ctx.nodes)
}
