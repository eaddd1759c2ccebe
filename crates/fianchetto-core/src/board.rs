//! The position: twelve piece sets, side to move, castling rights and en passant target.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::castling::{CastleSide, CastlingRights, castle_path};
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Mutable chess position.
///
/// One bitboard per [`Piece`]; the color unions and the occupancy are
/// caches rebuilt after every mutation. Positions are mutated in place by
/// [`Board::apply`] and restored with [`Board::undo`]; `clone` gives a
/// fully independent copy.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    pieces: [Bitboard; Piece::COUNT],
    white: Bitboard,
    black: Bitboard,
    occupied: Bitboard,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

/// Everything [`Board::apply`] may change, captured just before it does.
///
/// Consumed by [`Board::undo`]; it cannot be reused.
#[derive(Debug)]
#[must_use = "a saved state must be handed back to Board::undo"]
pub struct SavedState {
    pieces: [Bitboard; Piece::COUNT],
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

/// The part of a position that decides whether two positions repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pieces: [Bitboard; Piece::COUNT],
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
}

impl Board {
    /// A board with no pieces, White to move and no castling rights.
    pub fn empty() -> Board {
        Board {
            pieces: [Bitboard::EMPTY; Piece::COUNT],
            white: Bitboard::EMPTY,
            black: Bitboard::EMPTY,
            occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard initial position.
    pub fn starting_position() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as u8;
            for (color, back, pawns) in [(Color::White, 1, 2), (Color::Black, 8, 7)] {
                if let (Some(back_sq), Some(pawn_sq)) =
                    (Square::from_coords(file, back), Square::from_coords(file, pawns))
                {
                    board.put(back_sq, Piece::new(kind, color));
                    board.put(pawn_sq, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        board.castling = CastlingRights::ALL;
        board
    }

    /// Bitboard of one exact piece identity.
    #[inline]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    /// Bitboard of `kind` pieces belonging to `color`.
    #[inline]
    pub fn pieces_of(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.pieces[Piece::new(kind, color).index()]
    }

    /// Bitboard of `kind` pieces of both colors.
    #[inline]
    pub fn kinds(&self, kind: PieceKind) -> Bitboard {
        self.pieces_of(kind, Color::White) | self.pieces_of(kind, Color::Black)
    }

    /// All squares holding a piece of `color`.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Every occupied square.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// Whether any piece stands on `sq`.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupied.contains(sq)
    }

    /// The piece standing on `sq`.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !self.occupied.contains(sq) {
            return None;
        }
        Piece::ALL
            .into_iter()
            .find(|piece| self.pieces[piece.index()].contains(sq))
    }

    /// The king of `color`, or `None` on boards built without one.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(PieceKind::King, color).lsb()
    }

    /// The side whose turn it is.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Castling rights still held by either side.
    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// Square a pawn skipped over on the last move, if it was a double push.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Plies since the last capture or pawn move.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Starts at 1 and increments after each Black move.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Place `piece` on `sq`, replacing whatever stood there.
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.clear_square(sq);
        self.pieces[piece.index()] = self.pieces[piece.index()].with(sq);
        self.refresh_occupancy();
    }

    /// Empty `sq`, returning the piece that stood there.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq);
        self.clear_square(sq);
        self.refresh_occupancy();
        piece
    }

    /// Hand the move to `color`.
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Replace the castling rights. They are not checked against the board.
    pub fn set_castling(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    /// Set or clear the en passant target. It is not checked against the board.
    pub fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    pub(crate) fn set_move_counters(&mut self, halfmove_clock: u16, fullmove_number: u16) {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }

    /// Snapshot used by repetition detection.
    pub fn position_key(&self) -> PositionKey {
        PositionKey {
            pieces: self.pieces,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
        }
    }

    /// Play `mv` in place and return what is needed to take it back.
    ///
    /// The move must have been generated for this position.
    pub fn apply(&mut self, mv: Move) -> SavedState {
        let saved = SavedState {
            pieces: self.pieces,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        let us = self.side_to_move;
        let piece = mv.piece();
        let (from, to) = (mv.from(), mv.to());
        debug_assert!(
            self.pieces(piece).contains(from),
            "{mv:?} does not start from a {piece:?}"
        );

        // Captured piece first, so the mover never shares a square with it.
        if let Some(victim) = mv.captured() {
            self.toggle(victim, to);
        } else if mv.is_en_passant() {
            // The victim stands one rank behind the target, on the mover's side.
            let victim_sq = Square::from_index_unchecked((to.index() as i16 - us.forward() as i16) as u8);
            self.toggle(piece.flipped(), victim_sq);
        } else if mv.is_capture() {
            self.clear_square(to);
        }

        self.toggle(piece, from);
        match mv.promotion_kind() {
            Some(kind) => self.toggle(Piece::new(kind, us), to),
            None => self.toggle(piece, to),
        }

        if mv.is_castle() {
            let side = if to.file() > from.file() {
                CastleSide::KingSide
            } else {
                CastleSide::QueenSide
            };
            let path = castle_path(us, side);
            let rook = Piece::new(PieceKind::Rook, us);
            self.toggle(rook, path.rook_from);
            self.toggle(rook, path.rook_to);
        }

        let is_pawn = piece.kind() == PieceKind::Pawn;
        self.en_passant = if is_pawn && from.row().abs_diff(to.row()) == 2 {
            Square::from_index((from.index() as u8 + to.index() as u8) / 2)
        } else {
            None
        };

        let mut rights = self.castling;
        if piece.kind() == PieceKind::King {
            rights = rights.without_color(us);
        }
        self.castling = rights.touch(from).touch(to);

        self.halfmove_clock = if is_pawn || mv.is_capture() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if us == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = !us;
        self.refresh_occupancy();
        saved
    }

    /// Restore the position captured by `saved`.
    pub fn undo(&mut self, saved: SavedState) {
        self.pieces = saved.pieces;
        self.side_to_move = saved.side_to_move;
        self.castling = saved.castling;
        self.en_passant = saved.en_passant;
        self.halfmove_clock = saved.halfmove_clock;
        self.fullmove_number = saved.fullmove_number;
        self.refresh_occupancy();
    }

    /// Check the structural rules a FEN position must satisfy.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.pieces_of(PieceKind::King, color).count();
            if count != 1 {
                let color = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }
        if (self.kinds(PieceKind::Pawn) & (Bitboard::RANK_1 | Bitboard::RANK_8)).is_nonempty() {
            return Err(BoardError::PawnsOnBackRank);
        }
        Ok(())
    }

    /// Render as an 8x8 grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    #[inline]
    fn toggle(&mut self, piece: Piece, sq: Square) {
        self.pieces[piece.index()] ^= sq.bitboard();
    }

    #[inline]
    fn clear_square(&mut self, sq: Square) {
        let keep = !sq.bitboard();
        for bb in &mut self.pieces {
            *bb &= keep;
        }
    }

    fn refresh_occupancy(&mut self) {
        let (white, black) = self.pieces.split_at(PieceKind::COUNT);
        self.white = white.iter().fold(Bitboard::EMPTY, |acc, &bb| acc | bb);
        self.black = black.iter().fold(Bitboard::EMPTY, |acc, &bb| acc | bb);
        self.occupied = self.white | self.black;
        debug_assert!(
            (self.white & self.black).is_empty(),
            "a square holds pieces of both colors"
        );
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

/// Grid rendering of a [`Board`], rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::all() {
            if sq.file() == 0 {
                write!(f, "{}  ", sq.rank())?;
            }
            let c = self.0.piece_at(sq).map_or('.', Piece::glyph);
            if sq.file() == 7 {
                writeln!(f, "{c}")?;
            } else {
                write!(f, "{c} ")?;
            }
        }
        write!(f, "   a b c d e f g h")
    }
}
