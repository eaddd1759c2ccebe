//! Coordinate notation (`e2e4`, `e7e8q`) read against a position.

use fianchetto_core::{Board, Move, PieceKind, Square, legal};

use crate::error::NotationError;

/// The legal move `text` names in `board`.
///
/// Source and destination squares come first, then an optional promotion
/// letter (`q`, `r`, `b` or `n`, either case). A move to the last rank needs
/// the letter; any other move must not carry one.
pub fn parse_move(board: &Board, text: &str) -> Result<Move, NotationError> {
    let lowered = text.to_ascii_lowercase();
    let length = lowered.chars().count();
    if !(4..=5).contains(&length) || !lowered.is_ascii() {
        return Err(NotationError::BadLength {
            text: text.to_string(),
            found: length,
        });
    }

    let square = |part: &str| {
        part.parse::<Square>().map_err(|source| NotationError::BadSquare {
            text: text.to_string(),
            source,
        })
    };
    let from = square(&lowered[0..2])?;
    let to = square(&lowered[2..4])?;
    let promotion = match lowered[4..].chars().next() {
        None => None,
        Some(letter) => match PieceKind::from_letter(letter) {
            Some(kind) if kind.is_promotion_target() => Some(kind),
            _ => return Err(NotationError::BadPromotion { letter }),
        },
    };

    let moves = legal(board);
    let mut candidates = moves.iter().filter(|mv| mv.from() == from && mv.to() == to).peekable();
    let Some(&&first) = candidates.peek() else {
        return Err(NotationError::NotLegal { text: text.to_string() });
    };

    match (first.is_promotion(), promotion) {
        (false, None) => Ok(first),
        (false, Some(_)) => Err(NotationError::UnexpectedPromotion { text: text.to_string() }),
        (true, None) => Err(NotationError::MissingPromotion { text: text.to_string() }),
        (true, Some(kind)) => candidates
            .find(|mv| mv.promotion_kind() == Some(kind))
            .copied()
            .ok_or_else(|| NotationError::NotLegal { text: text.to_string() }),
    }
}
