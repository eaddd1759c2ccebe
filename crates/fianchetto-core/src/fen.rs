//! FEN reading and writing for [`Board`].
//!
//! Parsing accepts the four mandatory fields (placement, side to move,
//! castling, en passant); the halfmove clock and fullmove number are
//! optional and default to `0` and `1`.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castling::CastlingRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use tracing::debug;

/// FEN of the standard initial position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        parse_fen(fen).inspect_err(|e| debug!(error = %e, fen, "rejected FEN"))
    }
}

fn parse_fen(fen: &str) -> Result<Board, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(4..=6).contains(&fields.len()) {
        return Err(FenError::WrongFieldCount { found: fields.len() });
    }

    let mut board = Board::empty();
    parse_placement(fields[0], &mut board)?;

    board.set_side_to_move(match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            });
        }
    });

    board.set_castling(CastlingRights::from_fen(fields[2])?);

    let en_passant = match fields[3] {
        "-" => None,
        field => {
            let invalid = || FenError::InvalidEnPassant {
                found: field.to_string(),
            };
            let sq = field.parse::<Square>().map_err(|_| invalid())?;
            if !en_passant_fits(&board, sq) {
                return Err(invalid());
            }
            Some(sq)
        }
    };
    board.set_en_passant(en_passant);

    let halfmove_clock = parse_counter(fields.get(4), "halfmove clock", 0)?;
    let fullmove_number = parse_counter(fields.get(5), "fullmove number", 1)?;
    board.set_move_counters(halfmove_clock, fullmove_number);

    board.validate()?;
    Ok(board)
}

/// The target must be the empty square a pawn of the side not to move just
/// skipped over, with that pawn standing right behind it.
fn en_passant_fits(board: &Board, sq: Square) -> bool {
    let us = board.side_to_move();
    let expected_rank = match us {
        Color::White => 6,
        Color::Black => 3,
    };
    if sq.rank() != expected_rank || board.is_occupied(sq) {
        return false;
    }
    sq.offset(-us.forward())
        .and_then(|pawn_sq| board.piece_at(pawn_sq))
        .is_some_and(|piece| piece == Piece::new(PieceKind::Pawn, !us))
}

fn parse_placement(placement: &str, board: &mut Board) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    // FEN lists rank 8 first, which is also the board's index order.
    for (row, text) in ranks.iter().enumerate() {
        let rank = 8 - row as u8;
        let mut file: usize = 0;
        for c in text.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = Square::from_coords(file as u8, rank).ok_or(FenError::BadRankLength {
                rank,
                length: file + 1,
            })?;
            board.put(sq, piece);
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankLength { rank, length: file });
        }
    }
    Ok(())
}

fn parse_counter(field: Option<&&str>, name: &'static str, default: u16) -> Result<u16, FenError> {
    match field {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| FenError::InvalidMoveCounter {
            field: name,
            found: text.to_string(),
        }),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut empty_run = 0;
        for sq in Square::all() {
            match self.piece_at(sq) {
                Some(piece) => {
                    if empty_run > 0 {
                        write!(f, "{empty_run}")?;
                        empty_run = 0;
                    }
                    write!(f, "{}", piece.fen_char())?;
                }
                None => empty_run += 1,
            }
            if sq.file() == 7 {
                if empty_run > 0 {
                    write!(f, "{empty_run}")?;
                    empty_run = 0;
                }
                if sq.rank() > 1 {
                    f.write_str("/")?;
                }
            }
        }

        write!(f, " {} {} ", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, "{sq}")?,
            None => f.write_str("-")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
