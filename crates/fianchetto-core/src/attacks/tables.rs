//! Leaper attack tables, built at compile time.

use crate::bitboard::Bitboard;

const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// For every origin, the squares reached by `offsets` whose file lies within
/// `max_file_step` of the origin's file. The file check rejects steps that
/// would wrap around the board edge.
const fn leaper_table(offsets: [i8; 8], max_file_step: i8) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut origin = 0i8;
    while origin < 64 {
        let mut bits = 0u64;
        let mut i = 0;
        while i < offsets.len() {
            let target = origin + offsets[i];
            if target >= 0 && target < 64 {
                let file_step = (target % 8 - origin % 8).abs();
                if file_step <= max_file_step {
                    bits |= 1u64 << target as u32;
                }
            }
            i += 1;
        }
        table[origin as usize] = Bitboard::new(bits);
        origin += 1;
    }
    table
}

pub(super) static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(KNIGHT_OFFSETS, 2);
pub(super) static KING_ATTACKS: [Bitboard; 64] = leaper_table(KING_OFFSETS, 1);
