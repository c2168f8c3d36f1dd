use crate::board::BoardState;

/// Pure perft node count: the number of leaf positions reachable in
/// exactly `depth` plies. The executor has no inverse, so each node
/// clones the board instead of the usual make/unmake walk, which is
/// fine for the depths the test suite runs.
pub fn perft(board: &BoardState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = board.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0u64;
    for mv in moves {
        let mut child = board.clone();
        child.apply(mv);
        nodes += perft(&child, depth - 1);
    }
    nodes
}
