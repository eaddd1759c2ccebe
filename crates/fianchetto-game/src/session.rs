//! A game in progress: the position, the ply counter and the positions seen so far.

use std::fmt;

use fianchetto_core::{Board, Color, Move, MoveList, PositionKey, in_check, legal};
use fianchetto_engine::{OpeningBook, SearchConfig, SearchHooks, SearchResult, find_best_move};
use tracing::{debug, info};

use crate::error::GameError;
use crate::notation::parse_move;

/// How things stand after the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    /// The current position has occurred three times.
    ThreefoldRepetition,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::Ongoing
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ongoing => f.write_str("ongoing"),
            Status::Checkmate { winner: Color::White } => f.write_str("checkmate, white wins"),
            Status::Checkmate { winner: Color::Black } => f.write_str("checkmate, black wins"),
            Status::Stalemate => f.write_str("stalemate"),
            Status::ThreefoldRepetition => f.write_str("draw by threefold repetition"),
        }
    }
}

/// A game from some starting position.
///
/// The history holds the key of every position reached, the starting one
/// included, so that repetitions can be counted.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    ply: u32,
    history: Vec<PositionKey>,
}

impl Game {
    /// A game from the standard initial position.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position())
    }

    pub fn from_fen(fen: &str) -> Result<Game, GameError> {
        Ok(Game::from_board(fen.parse()?))
    }

    /// A game starting at `board`, counted as ply 0.
    pub fn from_board(board: Board) -> Game {
        let history = vec![board.position_key()];
        Game { board, ply: 0, history }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Half-moves played since the game started.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn legal_moves(&self) -> MoveList {
        legal(&self.board)
    }

    pub fn history(&self) -> &[PositionKey] {
        &self.history
    }

    /// Repetition comes first, then checkmate and stalemate.
    pub fn status(&self) -> Status {
        let current = self.board.position_key();
        if self.history.iter().filter(|&&key| key == current).count() >= 3 {
            return Status::ThreefoldRepetition;
        }
        if !legal(&self.board).is_empty() {
            return Status::Ongoing;
        }
        let mover = self.board.side_to_move();
        if in_check(&self.board, mover) {
            Status::Checkmate { winner: !mover }
        } else {
            Status::Stalemate
        }
    }

    /// Play `mv` and report the resulting status.
    ///
    /// Fails without touching the game when the game is already over or
    /// `mv` is not legal here.
    pub fn play(&mut self, mv: Move) -> Result<Status, GameError> {
        self.ensure_ongoing()?;
        if !legal(&self.board).contains(mv) {
            debug!(%mv, fen = %self.board, "rejected move");
            return Err(GameError::IllegalMove { mv });
        }

        let _ = self.board.apply(mv);
        self.ply += 1;
        self.history.push(self.board.position_key());

        let status = self.status();
        if status.is_over() {
            info!(ply = self.ply, %status, "game over");
        }
        Ok(status)
    }

    /// Parse `text` as coordinate notation and play it.
    pub fn play_notation(&mut self, text: &str) -> Result<Status, GameError> {
        self.ensure_ongoing()?;
        let mv = parse_move(&self.board, text)?;
        self.play(mv)
    }

    /// The engine's choice for the side to move, or `None` once the game is over.
    ///
    /// The current ply goes to the search so the book is asked only early on.
    pub fn engine_move(
        &self,
        config: impl Into<SearchConfig>,
        book: &dyn OpeningBook,
        hooks: &SearchHooks<'_>,
    ) -> Option<SearchResult> {
        if self.status().is_over() {
            return None;
        }
        find_best_move(&self.board, &config.into(), book, self.ply, hooks)
    }

    fn ensure_ongoing(&self) -> Result<(), GameError> {
        match self.status() {
            Status::Ongoing => Ok(()),
            status => Err(GameError::GameOver { status }),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
