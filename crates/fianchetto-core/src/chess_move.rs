//! Move values.

use std::fmt;

use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A fully described move.
///
/// Carries the moving piece and, for ordinary captures, the captured piece,
/// so applying and scoring a move never needs to look the board up again.
/// En passant captures keep `captured` empty; the victim square is implied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    capture: bool,
    promotion: Option<PieceKind>,
    castling: bool,
    en_passant: bool,
}

impl Move {
    /// A non-capturing step.
    pub const fn quiet(from: Square, to: Square, piece: Piece) -> Move {
        Move {
            from,
            to,
            piece,
            captured: None,
            capture: false,
            promotion: None,
            castling: false,
            en_passant: false,
        }
    }

    /// A capture of `victim` standing on `to`.
    pub const fn capture(from: Square, to: Square, piece: Piece, victim: Piece) -> Move {
        Move {
            captured: Some(victim),
            capture: true,
            ..Move::quiet(from, to, piece)
        }
    }

    /// A pawn reaching the last rank, capturing `victim` if present.
    pub const fn promotion(
        from: Square,
        to: Square,
        pawn: Piece,
        promoted: PieceKind,
        victim: Option<Piece>,
    ) -> Move {
        Move {
            captured: victim,
            capture: victim.is_some(),
            promotion: Some(promoted),
            ..Move::quiet(from, to, pawn)
        }
    }

    /// A pawn capturing en passant onto the target square `to`.
    pub const fn en_passant(from: Square, to: Square, pawn: Piece) -> Move {
        Move {
            capture: true,
            en_passant: true,
            ..Move::quiet(from, to, pawn)
        }
    }

    /// A castle, given as the king's two squares.
    pub const fn castle(from: Square, to: Square, king: Piece) -> Move {
        Move {
            castling: true,
            ..Move::quiet(from, to, king)
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece that moves, before any promotion.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// The piece removed from `to`, if known. Empty for en passant.
    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.capture
    }

    #[inline]
    pub const fn promotion_kind(self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        self.castling
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.en_passant
    }

    /// Captures and promotions, the moves quiescence search follows.
    #[inline]
    pub const fn is_tactical(self) -> bool {
        self.capture || self.promotion.is_some()
    }

    /// Same squares and same promotion piece.
    #[inline]
    pub fn same_route(self, other: Move) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({:?} {self}", self.piece)?;
        if let Some(victim) = self.captured {
            write!(f, " x{victim:?}")?;
        }
        if self.en_passant {
            write!(f, " ep")?;
        }
        if self.castling {
            write!(f, " castle")?;
        }
        write!(f, ")")
    }
}
