use super::*;

#[test]
fn apply_toggles_side_and_counts_once() {
    let mut pos = BoardState::startpos();
    let mv = Move::new(sq(4, 1).unwrap(), sq(4, 3).unwrap());
    let changed = pos.apply(mv);
    assert_eq!(changed, vec![sq(4, 1).unwrap(), sq(4, 3).unwrap()]);
    assert_eq!(pos.side_to_move, Color::Black);
    assert_eq!(pos.ply_count, 1);
    assert_eq!(pos.move_history.len(), 1);
}

#[test]
fn illegal_moves_are_a_silent_no_op() {
    let mut pos = BoardState::startpos();
    let before = pos.clone();
    // Boxed-in rook.
    assert!(
        pos.apply(Move::new(sq(0, 0).unwrap(), sq(0, 3).unwrap()))
            .is_empty()
    );
    // Not black's turn.
    assert!(
        pos.apply(Move::new(sq(4, 6).unwrap(), sq(4, 4).unwrap()))
            .is_empty()
    );
    // Empty origin square.
    assert!(
        pos.apply(Move::new(sq(4, 3).unwrap(), sq(4, 4).unwrap()))
            .is_empty()
    );
    assert_eq!(pos, before);
}

#[test]
fn castling_moves_king_and_rook_in_one_call() {
    let e1 = sq(4, 0).unwrap();
    let f1 = sq(5, 0).unwrap();
    let g1 = sq(6, 0).unwrap();
    let h1 = sq(7, 0).unwrap();
    let mut pos = BoardState::from_fen("1k6/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let changed = pos.play_uci("e1g1").unwrap();
    assert_eq!(changed, vec![e1, g1, h1, f1]);
    assert_eq!(
        pos.piece_at(g1),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::King
        })
    );
    assert_eq!(
        pos.piece_at(f1),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Rook
        })
    );
    assert!(pos.piece_at(e1).is_none());
    assert!(pos.piece_at(h1).is_none());
    assert!(!pos.castling.white_short);
    assert!(!pos.castling.white_long);
}

#[test]
fn castling_rejected_when_the_path_is_attacked() {
    let mut pos = BoardState::from_fen("1k3r2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(pos.play_uci("e1g1").unwrap().is_empty());
    assert!(!pos.play_uci("e1c1").unwrap().is_empty());
}

#[test]
fn rights_never_come_back() {
    let mut pos = BoardState::from_fen("1k6/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    pos.play_uci("h1h2").unwrap();
    assert!(!pos.castling.white_short);
    assert!(pos.castling.white_long);

    // Shuffle the rook back home; the right stays dead.
    pos.play_uci("b8c8").unwrap();
    pos.play_uci("h2h1").unwrap();
    pos.play_uci("c8b8").unwrap();
    assert!(!pos.castling.white_short);
    let king = pos.moves_from(4, 0, true);
    assert!(!king.contains(&sq(6, 0).unwrap()));
    assert!(king.contains(&sq(2, 0).unwrap()));
}

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    let mut pos = BoardState::startpos();
    for mv in ["e2e4", "h7h6", "e4e5", "d7d5"] {
        pos.play_uci(mv).unwrap();
    }
    let changed = pos.play_uci("e5d6").unwrap();
    assert!(changed.contains(&sq(3, 4).unwrap()));
    assert!(pos.piece_at(sq(3, 4).unwrap()).is_none());
    assert_eq!(
        pos.piece_at(sq(3, 5).unwrap()),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Pawn
        })
    );
}

#[test]
fn promotion_requires_a_valid_selector() {
    let mut pos = BoardState::from_fen("k7/4P3/8/8/8/8/8/K7 w - - 0 1");
    assert_eq!(pos.play_uci("e7e8"), Err(NotationError::MissingPromotion));

    let mut bare = Move::new(sq(4, 6).unwrap(), sq(4, 7).unwrap());
    assert!(pos.apply(bare).is_empty());
    bare.promotion = Some(PieceKind::King);
    assert!(pos.apply(bare).is_empty());

    pos.play_uci("e7e8n").unwrap();
    assert_eq!(
        pos.piece_at(sq(4, 7).unwrap()),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Knight
        })
    );
}

#[test]
fn halfmove_clock_ticks_on_quiet_moves_and_resets_otherwise() {
    let mut pos = BoardState::startpos();
    pos.play_uci("g1f3").unwrap();
    assert_eq!(pos.halfmove_clock, 1);
    pos.play_uci("b8c6").unwrap();
    assert_eq!(pos.halfmove_clock, 2);
    pos.play_uci("e2e4").unwrap();
    assert_eq!(pos.halfmove_clock, 0);
}

#[test]
fn uci_history_is_the_outbound_state_string() {
    let mut pos = BoardState::startpos();
    assert_eq!(pos.uci_history(), "");
    pos.play_uci("e2e4").unwrap();
    pos.play_uci("e7e5").unwrap();
    assert_eq!(pos.uci_history(), "e2e4 e7e5");
}

#[test]
fn render_prints_rank_eight_first() {
    let pos = BoardState::startpos();
    let text = pos.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "♜♞♝♛♚♝♞♜");
    assert_eq!(lines[1], "♟♟♟♟♟♟♟♟");
    assert_eq!(lines[4], "        ");
    assert_eq!(lines[7], "♖♘♗♕♔♗♘♖");
}

#[test]
fn from_fen_maps_the_en_passant_field() {
    let pos = BoardState::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    assert!(pos.en_passant[Color::White.idx()][4]);
    assert!(pos.en_passant[Color::Black.idx()].iter().all(|f| !f));
}

#[test]
fn piece_values_follow_the_material_scale() {
    let pos = BoardState::startpos();
    let total: u32 = pos
        .grid
        .iter()
        .flatten()
        .flatten()
        .map(|pc| pc.value())
        .sum();
    // 8 pawns + 2 rooks + 2 knights + 2 bishops + queen, per side.
    assert_eq!(total, 2 * (8 + 10 + 6 + 6 + 9));
}
