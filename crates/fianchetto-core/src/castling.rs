//! Castling rights and the fixed king and rook squares each castle uses.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which wing to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];
}

/// The squares involved in one castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between: Bitboard,
    /// Squares the king crosses or lands on; none may be attacked.
    pub king_walk: [Square; 2],
}

const fn squares(list: &[Square]) -> Bitboard {
    let mut bits = 0u64;
    let mut i = 0;
    while i < list.len() {
        bits |= 1u64 << list[i].index();
        i += 1;
    }
    Bitboard::new(bits)
}

static PATHS: [[CastlePath; 2]; 2] = [
    [
        CastlePath {
            king_from: Square::E1,
            king_to: Square::G1,
            rook_from: Square::H1,
            rook_to: Square::F1,
            between: squares(&[Square::F1, Square::G1]),
            king_walk: [Square::F1, Square::G1],
        },
        CastlePath {
            king_from: Square::E1,
            king_to: Square::C1,
            rook_from: Square::A1,
            rook_to: Square::D1,
            between: squares(&[Square::B1, Square::C1, Square::D1]),
            king_walk: [Square::D1, Square::C1],
        },
    ],
    [
        CastlePath {
            king_from: Square::E8,
            king_to: Square::G8,
            rook_from: Square::H8,
            rook_to: Square::F8,
            between: squares(&[Square::F8, Square::G8]),
            king_walk: [Square::F8, Square::G8],
        },
        CastlePath {
            king_from: Square::E8,
            king_to: Square::C8,
            rook_from: Square::A8,
            rook_to: Square::D8,
            between: squares(&[Square::B8, Square::C8, Square::D8]),
            king_walk: [Square::D8, Square::C8],
        },
    ],
];

/// Geometry of the castle for `color` toward `side`.
#[inline]
pub fn castle_path(color: Color, side: CastleSide) -> &'static CastlePath {
    &PATHS[color.index()][side as usize]
}

/// Four independent flags: bit 0 White king-side, 1 White queen-side, 2 Black king-side, 3 Black queen-side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    #[inline]
    const fn bit(color: Color, side: CastleSide) -> u8 {
        1 << (color.index() * 2 + side as usize)
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Copy with one right granted.
    #[inline]
    pub const fn with(self, color: Color, side: CastleSide) -> CastlingRights {
        CastlingRights(self.0 | Self::bit(color, side))
    }

    /// Copy with one right revoked.
    #[inline]
    pub const fn without(self, color: Color, side: CastleSide) -> CastlingRights {
        CastlingRights(self.0 & !Self::bit(color, side))
    }

    /// Copy with both rights of `color` revoked.
    #[inline]
    pub const fn without_color(self, color: Color) -> CastlingRights {
        CastlingRights(self.0 & !(0b11 << (color.index() * 2)))
    }

    /// Copy with whatever right is tied to a rook standing on `sq` revoked.
    ///
    /// Used for both the source and the destination of every move, so a rook
    /// that leaves home or is captured at home loses its right.
    pub fn touch(self, sq: Square) -> CastlingRights {
        let mut rights = self;
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if castle_path(color, side).rook_from == sq {
                    rights = rights.without(color, side);
                }
            }
        }
        rights
    }

    /// Parse the FEN castling field, `-` meaning none.
    pub fn from_fen(field: &str) -> Result<CastlingRights, FenError> {
        if field == "-" {
            return Ok(CastlingRights::NONE);
        }
        let mut rights = CastlingRights::NONE;
        for c in field.chars() {
            rights = match c {
                'K' => rights.with(Color::White, CastleSide::KingSide),
                'Q' => rights.with(Color::White, CastleSide::QueenSide),
                'k' => rights.with(Color::Black, CastleSide::KingSide),
                'q' => rights.with(Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
        }
        Ok(rights)
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let letters = [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ];
        for (color, side, letter) in letters {
            if self.has(color, side) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastlingRights({self})")
    }
}
