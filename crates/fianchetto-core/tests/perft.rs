//! Perft totals for the standard verification positions.
//!
//! Each count covers every rule the generator implements: castling through
//! and out of check, en passant with discovered checks, and all four
//! promotion choices.

use fianchetto_core::{Board, divide, perft};

struct Position {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u32, u64)],
}

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

const QUICK: &[Position] = &[
    Position {
        name: "start",
        fen: START,
        depths: &[(1, 20), (2, 400), (3, 8_902)],
    },
    Position {
        name: "kiwipete",
        fen: KIWIPETE,
        depths: &[(1, 48), (2, 2_039), (3, 97_862)],
    },
    Position {
        name: "position 3",
        fen: POSITION_3,
        depths: &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    },
    Position {
        name: "position 4",
        fen: POSITION_4,
        depths: &[(1, 6), (2, 264), (3, 9_467)],
    },
    Position {
        name: "position 5",
        fen: POSITION_5,
        depths: &[(1, 44), (2, 1_486), (3, 62_379)],
    },
    Position {
        name: "en passant",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21_637)],
    },
    Position {
        name: "promotion",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        depths: &[(1, 24), (2, 496), (3, 9_483)],
    },
    Position {
        name: "castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568), (3, 13_744)],
    },
];

fn check(fen: &str, depth: u32, expected: u64, name: &str) {
    let mut board: Board = fen.parse().unwrap();
    let before = board.clone();
    let nodes = perft(&mut board, depth);
    assert_eq!(nodes, expected, "perft({name}, {depth})");
    assert_eq!(board, before, "perft({name}, {depth}) left the board changed");
}

// ── Shallow suite ─────────────────────────────────────────────────────────────

#[test]
fn standard_positions() {
    for position in QUICK {
        for &(depth, expected) in position.depths {
            check(position.fen, depth, expected, position.name);
        }
    }
}

#[test]
fn divide_matches_perft_on_position_4() {
    let mut board: Board = POSITION_4.parse().unwrap();
    let split = divide(&mut board, 3);
    assert_eq!(split.len(), 6);
    assert_eq!(split.iter().map(|&(_, n)| n).sum::<u64>(), 9_467);
}

// ── Deep counts ───────────────────────────────────────────────────────────────

#[test]
#[ignore] // slow
fn start_depth_4() {
    check(START, 4, 197_281, "start");
}

#[test]
#[ignore] // slow
fn start_depth_5() {
    check(START, 5, 4_865_609, "start");
}

#[test]
#[ignore] // slow
fn kiwipete_depth_4() {
    check(KIWIPETE, 4, 4_085_603, "kiwipete");
}

#[test]
#[ignore] // slow
fn position_4_depth_4() {
    check(POSITION_4, 4, 422_333, "position 4");
}

#[test]
#[ignore] // slow
fn position_5_depth_4() {
    check(POSITION_5, 4, 2_103_487, "position 5");
}
