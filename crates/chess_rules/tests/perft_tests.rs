use rayon::prelude::*;

use chess_rules::{BoardState, perft};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

const KIWIPETE: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";

#[test]
fn perft_known_positions() {
    // (fen or "startpos", depth, expected nodes, deep)
    // Deep cases only run with FULL_PERFT=1; the executor clones per
    // node, so they are slow by design.
    let cases: Vec<(&str, u8, u64, bool)> = vec![
        ("startpos", 1, 20, false),
        ("startpos", 2, 400, false),
        ("startpos", 3, 8_902, false),
        ("startpos", 4, 197_281, true),
        (KIWIPETE, 1, 48, false),
        (KIWIPETE, 2, 2_039, false),
    ];

    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    cases.par_iter().for_each(|&(fen, depth, expected, deep)| {
        if deep && !full {
            eprintln!(
                "Skipping {fen} depth {depth}; set {FULL_PERFT_ENV}=1 to run it."
            );
            return;
        }
        let board = if fen == "startpos" {
            BoardState::startpos()
        } else {
            BoardState::from_fen(fen)
        };
        let got = perft(&board, depth);
        assert_eq!(got, expected, "perft mismatch for {fen} at depth {depth}");
    });
}
