//! Errors raised by the game session.

use fianchetto_core::{FenError, Move, SquareError};

use crate::session::Status;

/// Coordinate notation that does not describe a legal move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// Anything but four or five characters.
    #[error("expected 4 or 5 characters, found {found} in \"{text}\"")]
    BadLength { text: String, found: usize },

    #[error("bad square in \"{text}\": {source}")]
    BadSquare {
        text: String,
        #[source]
        source: SquareError,
    },

    #[error("invalid promotion letter '{letter}'")]
    BadPromotion { letter: char },

    /// The move reaches the last rank but no piece was named.
    #[error("{text} promotes and needs a piece letter")]
    MissingPromotion { text: String },

    #[error("{text} is not a promotion")]
    UnexpectedPromotion { text: String },

    #[error("{text} is not legal in this position")]
    NotLegal { text: String },
}

/// Errors from driving a [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error("invalid starting position: {0}")]
    Fen(#[from] FenError),

    #[error("illegal move {mv}")]
    IllegalMove { mv: Move },

    /// A move was offered after the game had already ended.
    #[error("the game is over ({status})")]
    GameOver { status: Status },
}
