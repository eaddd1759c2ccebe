//! Game phase from the non-pawn material still on the board.

use fianchetto_core::{Board, PieceKind};

/// Phase points of the full starting complement of pieces.
///
/// | Piece  | Weight |
/// |--------|--------|
/// | Knight | 1      |
/// | Bishop | 1      |
/// | Rook   | 2      |
/// | Queen  | 4      |
///
/// Starting totals: 4×1 + 4×1 + 4×2 + 2×4 = 24.
pub const MAX_PHASE: i32 = 24;

const PHASE_WEIGHTS: [(PieceKind, i32); 4] = [
    (PieceKind::Knight, 1),
    (PieceKind::Bishop, 1),
    (PieceKind::Rook, 2),
    (PieceKind::Queen, 4),
];

/// Weighted piece count in `0..=MAX_PHASE`. Promotions cannot push it past the maximum.
pub fn phase_points(board: &Board) -> i32 {
    let points: i32 = PHASE_WEIGHTS
        .iter()
        .map(|&(kind, weight)| board.kinds(kind).count() as i32 * weight)
        .sum();
    points.clamp(0, MAX_PHASE)
}

/// Phase as a fraction: 1.0 with all pieces on the board, 0.0 with only kings and pawns.
pub fn game_phase(board: &Board) -> f64 {
    f64::from(phase_points(board)) / f64::from(MAX_PHASE)
}
