//! The opening-book seam.
//!
//! Loading and looking up a book is left to the caller; the search only asks
//! for a suggestion during the opening plies and checks it against the legal
//! moves before trusting it.

use fianchetto_core::{Board, Move};

/// The book is consulted while the game's ply counter is below this.
pub const BOOK_PLY_LIMIT: u32 = 12;

/// A source of prepared opening moves.
pub trait OpeningBook: Sync {
    /// A move for `board`, chosen from `legal`, or `None` to let the search decide.
    fn suggest(&self, board: &Board, legal: &[Move], ply: u32) -> Option<Move>;
}

/// A book that never has an answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBook;

impl OpeningBook for NoBook {
    fn suggest(&self, _board: &Board, _legal: &[Move], _ply: u32) -> Option<Move> {
        None
    }
}

impl<F> OpeningBook for F
where
    F: Fn(&Board, &[Move], u32) -> Option<Move> + Sync,
{
    fn suggest(&self, board: &Board, legal: &[Move], ply: u32) -> Option<Move> {
        self(board, legal, ply)
    }
}
