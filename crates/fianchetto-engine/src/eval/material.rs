//! Material balance.

use fianchetto_core::{Board, Color, PieceKind};

/// Centipawn values indexed by [`PieceKind::index`]. The king carries no material value.
pub const PIECE_VALUES: [i32; PieceKind::COUNT] = [100, 320, 330, 500, 900, 0];

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.index()]
}

/// White's material minus Black's.
pub fn material(board: &Board) -> i32 {
    PieceKind::ALL
        .iter()
        .map(|&kind| {
            let white = board.pieces_of(kind, Color::White).count() as i32;
            let black = board.pieces_of(kind, Color::Black).count() as i32;
            (white - black) * piece_value(kind)
        })
        .sum()
}
