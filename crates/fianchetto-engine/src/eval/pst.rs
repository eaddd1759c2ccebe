//! Piece-square tables.
//!
//! Tables are written from White's point of view with rank 8 first, so a
//! White piece on square `i` reads entry `i` and a Black piece reads the
//! vertically mirrored entry `i ^ 56`. Rooks and queens have no table.

use fianchetto_core::{Bitboard, Board, Color, PieceKind};

#[rustfmt::skip]
const PAWN: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

/// King with pieces still on the board: stay castled behind the pawns.
#[rustfmt::skip]
const KING_MIDDLEGAME: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

/// King in the ending: walk to the middle.
#[rustfmt::skip]
const KING_ENDGAME: [i32; 64] = [
    -50,-40,-30,-20,-20,-30,-40,-50,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-30,  0,  0,  0,  0,-30,-30,
    -50,-30,-30,-30,-30,-30,-30,-50,
];

fn table_sum(table: &[i32; 64], squares: Bitboard, color: Color) -> i32 {
    squares
        .into_iter()
        .map(|sq| match color {
            Color::White => table[sq.index()],
            Color::Black => table[sq.mirror().index()],
        })
        .sum()
}

fn side_score(board: &Board, color: Color, phase: f64) -> i32 {
    let pieces = table_sum(&PAWN, board.pieces_of(PieceKind::Pawn, color), color)
        + table_sum(&KNIGHT, board.pieces_of(PieceKind::Knight, color), color)
        + table_sum(&BISHOP, board.pieces_of(PieceKind::Bishop, color), color);

    let kings = board.pieces_of(PieceKind::King, color);
    let middlegame = f64::from(table_sum(&KING_MIDDLEGAME, kings, color));
    let endgame = f64::from(table_sum(&KING_ENDGAME, kings, color));
    // Truncated per side, toward zero.
    let king = (middlegame * phase + endgame * (1.0 - phase)) as i32;

    pieces + king
}

/// White's positional score minus Black's, with the king tables blended by `phase`.
pub fn positional(board: &Board, phase: f64) -> i32 {
    side_score(board, Color::White, phase) - side_score(board, Color::Black, phase)
}
