use std::panic::{AssertUnwindSafe, catch_unwind};

use super::*;

#[test]
fn rejected_probes_leave_the_board_untouched() {
    // Bishop e2 is pinned to its king by the rook on e4.
    let mut pos = BoardState::from_fen("k7/8/8/8/4r3/8/4B3/4K3 w - - 0 1");
    let before = pos.clone();
    assert!(!pos.is_legal(sq(4, 1).unwrap(), sq(3, 2).unwrap()));
    assert_eq!(pos, before);
}

#[test]
fn accepted_probes_also_restore() {
    let mut pos = BoardState::startpos();
    let before = pos.clone();
    assert!(pos.is_legal(sq(4, 1).unwrap(), sq(4, 3).unwrap()));
    assert_eq!(pos, before);
}

#[test]
fn speculative_move_restores_after_a_panic() {
    let mut pos = BoardState::startpos();
    let before = pos.clone();
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        pos.with_piece_moved(sq(4, 1).unwrap(), sq(4, 3).unwrap(), |_| {
            panic!("inspection failed")
        })
    }));
    assert!(outcome.is_err());
    assert_eq!(pos, before);
}

#[test]
fn legality_probe_on_an_empty_square_is_false() {
    let mut pos = BoardState::startpos();
    assert!(!pos.is_legal(sq(4, 4).unwrap(), sq(4, 5).unwrap()));
}

#[test]
fn attack_detection_sees_every_piece_kind() {
    // Knight f3 covers e1.
    let pos = BoardState::from_fen("k7/8/8/8/8/5n2/8/4K3 w - - 0 1");
    assert!(pos.is_attacked(Color::White));
    assert!(!pos.is_attacked(Color::Black));

    // Queen a1 along the back rank.
    let pos = BoardState::from_fen("k7/8/8/8/8/8/8/q3K3 w - - 0 1");
    assert!(pos.is_attacked(Color::White));

    // Pawn d2 covers e1 diagonally.
    let pos = BoardState::from_fen("k7/8/8/8/8/8/3p4/4K3 w - - 0 1");
    assert!(pos.is_attacked(Color::White));
}

#[test]
fn blocked_sliders_do_not_attack_through_pieces() {
    // Black rook e8, white knight e4 in between.
    let pos = BoardState::from_fen("k3r3/8/8/8/4N3/8/8/4K3 w - - 0 1");
    assert!(!pos.is_attacked(Color::White));
}

#[test]
#[should_panic(expected = "no black king")]
fn missing_king_aborts() {
    let mut pos = BoardState::startpos();
    pos.set_piece(sq(4, 7).unwrap(), None);
    pos.is_attacked(Color::Black);
}
