use crate::board::BoardState;
use crate::types::*;

/// Movement descriptor: a set of directions, stepped once or slid along.
/// One rule per piece kind; pawns are the only color-asymmetric piece
/// and are handled separately.
struct MoveRule {
    deltas: &'static [(i8, i8)],
    sliding: bool,
}

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const EVERY_WAY: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

fn rule_for(kind: PieceKind) -> Option<MoveRule> {
    match kind {
        PieceKind::Knight => Some(MoveRule {
            deltas: &KNIGHT_JUMPS,
            sliding: false,
        }),
        PieceKind::King => Some(MoveRule {
            deltas: &EVERY_WAY,
            sliding: false,
        }),
        PieceKind::Bishop => Some(MoveRule {
            deltas: &DIAGONAL,
            sliding: true,
        }),
        PieceKind::Rook => Some(MoveRule {
            deltas: &ORTHOGONAL,
            sliding: true,
        }),
        PieceKind::Queen => Some(MoveRule {
            deltas: &EVERY_WAY,
            sliding: true,
        }),
        PieceKind::Pawn => None,
    }
}

impl BoardState {
    /// Destination squares reachable by the piece on `(x, y)`.
    ///
    /// With `enforce_legality` every candidate is filtered through the
    /// speculative king-safety check, and castling destinations are
    /// added for a king on its home square; without it the result is
    /// purely pseudo-legal and castling is never offered. An empty or
    /// out-of-range square yields an empty vec, never an error.
    pub fn moves_from(&mut self, x: i8, y: i8, enforce_legality: bool) -> Vec<Square> {
        let from = match sq(x, y) {
            Some(s) => s,
            None => return Vec::new(),
        };
        let pc = match self.piece_at(from) {
            Some(p) => p,
            None => return Vec::new(),
        };
        let mut dests = self.pseudo_destinations(from, pc);
        if enforce_legality {
            dests.retain(|&to| self.is_legal(from, to));
            if pc.kind == PieceKind::King {
                dests.extend(self.castle_destinations(from, pc.color));
            }
        }
        dests
    }

    /// All legal moves for the side to move, promotions expanded into
    /// the four concrete choices. This is the candidate set offered to
    /// the external evaluator.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut tmp = self.clone();
        let mover = tmp.side_to_move;
        let mut out = Vec::with_capacity(64);
        for y in 0..8i8 {
            for x in 0..8i8 {
                let from = Square { x, y };
                let pc = match tmp.piece_at(from) {
                    Some(p) => p,
                    None => continue,
                };
                if pc.color != mover {
                    continue;
                }
                for to in tmp.moves_from(x, y, true) {
                    if pc.kind == PieceKind::Pawn && to.y == mover.promotion_rank() {
                        for kind in [
                            PieceKind::Queen,
                            PieceKind::Rook,
                            PieceKind::Bishop,
                            PieceKind::Knight,
                        ] {
                            out.push(Move {
                                from,
                                to,
                                promotion: Some(kind),
                            });
                        }
                    } else {
                        out.push(Move::new(from, to));
                    }
                }
            }
        }
        out
    }

    /// Pseudo-legal destinations: movement rules and occupancy only, no
    /// king-safety filtering, no castling. Also the primitive the attack
    /// detector scans with.
    pub(crate) fn pseudo_destinations(&self, from: Square, pc: Piece) -> Vec<Square> {
        if pc.kind == PieceKind::Pawn {
            return self.pawn_destinations(from, pc.color);
        }
        let rule = match rule_for(pc.kind) {
            Some(r) => r,
            None => return Vec::new(),
        };
        let mut out = Vec::new();
        for &(dx, dy) in rule.deltas {
            let mut step = 1;
            loop {
                let to = match sq(from.x + dx * step, from.y + dy * step) {
                    Some(s) => s,
                    None => break,
                };
                match self.piece_at(to) {
                    None => out.push(to),
                    Some(other) => {
                        if other.color != pc.color {
                            out.push(to);
                        }
                        break;
                    }
                }
                if !rule.sliding {
                    break;
                }
                step += 1;
            }
        }
        out
    }

    fn pawn_destinations(&self, from: Square, c: Color) -> Vec<Square> {
        let mut out = Vec::new();
        let dir = c.pawn_dir();

        if let Some(one) = sq(from.x, from.y + dir)
            && self.piece_at(one).is_none()
        {
            out.push(one);
            if from.y == c.pawn_start_rank()
                && let Some(two) = sq(from.x, from.y + 2 * dir)
                && self.piece_at(two).is_none()
            {
                out.push(two);
            }
        }

        for dx in [-1, 1] {
            if let Some(diag) = sq(from.x + dx, from.y + dir) {
                match self.piece_at(diag) {
                    Some(other) if other.color != c => out.push(diag),
                    None => {
                        // En passant: the opponent's flag marks the file
                        // of its fresh double-step; the capturing pawn
                        // must stand on the rank that pawn landed on.
                        if from.y == c.en_passant_rank()
                            && self.en_passant[c.other().idx()][diag.x as usize]
                        {
                            out.push(diag);
                        }
                    }
                    Some(_) => {}
                }
            }
        }
        out
    }

    /// Castling destinations for a king on its home square. The rights
    /// flag must be live, the intervening squares empty, and the king's
    /// current square plus every square it crosses or lands on safe;
    /// the path squares are probed with the speculative legality check.
    /// Rook presence is guaranteed only by the rights bookkeeping.
    fn castle_destinations(&mut self, from: Square, c: Color) -> Vec<Square> {
        let home = c.home_rank();
        if from != (Square { x: 4, y: home }) {
            return Vec::new();
        }
        if self.is_attacked(c) {
            return Vec::new();
        }
        let (short_right, long_right) = match c {
            Color::White => (self.castling.white_short, self.castling.white_long),
            Color::Black => (self.castling.black_short, self.castling.black_long),
        };

        let mut out = Vec::new();
        // Short: f and g empty, both safe for the king to stand on.
        if short_right
            && self.piece_at(Square { x: 5, y: home }).is_none()
            && self.piece_at(Square { x: 6, y: home }).is_none()
            && self.is_legal(from, Square { x: 5, y: home })
            && self.is_legal(from, Square { x: 6, y: home })
        {
            out.push(Square { x: 6, y: home });
        }
        // Long: b, c and d empty; the king only crosses d and c.
        if long_right
            && self.piece_at(Square { x: 1, y: home }).is_none()
            && self.piece_at(Square { x: 2, y: home }).is_none()
            && self.piece_at(Square { x: 3, y: home }).is_none()
            && self.is_legal(from, Square { x: 3, y: home })
            && self.is_legal(from, Square { x: 2, y: home })
        {
            out.push(Square { x: 2, y: home });
        }
        out
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
