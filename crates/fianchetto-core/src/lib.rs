//! Chess rules: board representation, FEN, attack queries and move generation.
//!
//! Squares are numbered from a8 (`0`) to h1 (`63`), so index order matches
//! the order FEN lists the board in.

mod attacks;
mod bitboard;
mod board;
mod castling;
mod chess_move;
mod color;
mod error;
mod fen;
mod movegen;
mod oracle;
mod perft;
mod piece;
mod piece_kind;
mod square;

pub use attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks};
pub use bitboard::Bitboard;
pub use board::{Board, PositionKey, PrettyBoard, SavedState};
pub use castling::{CastlePath, CastleSide, CastlingRights, castle_path};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, FenError, SquareError};
pub use fen::STARTING_FEN;
pub use movegen::{MoveList, is_checkmate, is_stalemate, legal, pseudo_legal};
pub use oracle::{attacked_by, in_check, is_square_attacked};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
