//! Errors raised while reading positions and squares from text.

/// A two-character square name that does not name a square.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    #[error("invalid square: \"{found}\"")]
    Invalid {
        /// The rejected text.
        found: String,
    },
}

/// Errors from parsing a FEN position description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// Fewer than four or more than six whitespace-separated fields.
    #[error("expected 4 to 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },

    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },

    /// A rank describes more or fewer than eight squares.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength {
        /// One-based rank number.
        rank: u8,
        length: usize,
    },

    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },

    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },

    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar { character: char },

    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },

    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter { field: &'static str, found: String },

    #[error("invalid board: {source}")]
    InvalidBoard {
        #[from]
        source: BoardError,
    },
}

/// Structural problems in a parsed position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount { color: &'static str, count: u32 },

    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError};

    #[test]
    fn messages() {
        assert_eq!(
            FenError::WrongFieldCount { found: 2 }.to_string(),
            "expected 4 to 6 FEN fields, found 2"
        );
        assert_eq!(
            FenError::BadRankLength { rank: 7, length: 9 }.to_string(),
            "rank 7 describes 9 squares, expected 8"
        );
    }

    #[test]
    fn board_errors_nest_inside_fen_errors() {
        let err: FenError = BoardError::PawnsOnBackRank.into();
        assert_eq!(err.to_string(), "invalid board: pawns found on back rank");
        assert!(std::error::Error::source(&err).is_some());
    }
}
