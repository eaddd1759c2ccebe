//! Sliding attacks computed by walking rays one square at a time.

use crate::bitboard::Bitboard;
use crate::square::Square;

/// Index deltas for north, south, west and east.
pub(super) const ORTHOGONAL: [i8; 4] = [-8, 8, -1, 1];
/// Index deltas for north-west, north-east, south-west and south-east.
pub(super) const DIAGONAL: [i8; 4] = [-9, -7, 7, 9];

/// Union of the rays from `origin` along `directions`.
///
/// Each ray stops at the edge of the board and includes the first occupied
/// square it meets.
pub(super) fn slide(origin: Square, directions: &[i8; 4], occupied: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &delta in directions {
        let mut current = origin;
        while let Some(next) = current.offset(delta) {
            // One step never changes the file by more than one; a larger jump is a wrap.
            if next.file().abs_diff(current.file()) > 1 {
                break;
            }
            attacks = attacks.with(next);
            if occupied.contains(next) {
                break;
            }
            current = next;
        }
    }
    attacks
}
