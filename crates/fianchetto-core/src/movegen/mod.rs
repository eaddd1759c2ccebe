//! Pseudo-legal and legal move generation.
//!
//! [`pseudo_legal`] follows the movement rules of each piece but ignores
//! whether the mover's king is left in check. [`legal`] filters that list by
//! playing each move on a scratch copy, testing the mover's king, and taking
//! the move back.

mod king;
mod pawns;
mod pieces;

use crate::board::Board;
use crate::chess_move::Move;
use crate::oracle::in_check;
use crate::piece::Piece;
use crate::square::Square;

/// Fixed-capacity move buffer. 256 slots cover the largest known move count of 218.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; 256],
    len: usize,
}

const EMPTY_SLOT: Move = Move::quiet(Square::A8, Square::A8, Piece::WHITE_PAWN);

impl MoveList {
    /// An empty list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [EMPTY_SLOT; 256],
            len: 0,
        }
    }

    /// Append `mv`. The list must not be full.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.len < self.moves.len());
        self.moves[self.len] = mv;
        self.len += 1;
    }

    /// Number of moves held.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when no moves are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The held moves, in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// The held moves, mutably, for in-place reordering.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len]
    }

    /// Iterate over the held moves.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Whether `mv` is in the list.
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// Keep only the moves for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut kept = 0;
        for i in 0..self.len {
            let mv = self.moves[i];
            if keep(&mv) {
                self.moves[kept] = mv;
                kept += 1;
            }
        }
        self.len = kept;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter().map(|mv| mv.to_string())).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Every move that obeys piece movement for the side to move.
///
/// Pieces are generated in the order pawns, knights, bishops, rooks,
/// queens, king. Castles come last.
pub fn pseudo_legal(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    pawns::generate(board, &mut list);
    pieces::generate(board, &mut list);
    king::generate(board, &mut list);
    list
}

/// The pseudo-legal moves that do not leave the mover in check, in the same order.
pub fn legal(board: &Board) -> MoveList {
    let mut scratch = board.clone();
    let mover = board.side_to_move();
    let mut list = pseudo_legal(board);
    list.retain(|&mv| {
        let saved = scratch.apply(mv);
        let safe = !in_check(&scratch, mover);
        scratch.undo(saved);
        safe
    });
    list
}

/// No legal moves and the side to move is in check.
pub fn is_checkmate(board: &Board) -> bool {
    legal(board).is_empty() && in_check(board, board.side_to_move())
}

/// No legal moves and the side to move is not in check.
pub fn is_stalemate(board: &Board) -> bool {
    legal(board).is_empty() && !in_check(board, board.side_to_move())
}
