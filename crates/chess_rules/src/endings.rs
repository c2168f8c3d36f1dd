//! Game-termination classification: no-legal-move detection, the three
//! draw rules, and the reason the orchestration layer logs per game.

use std::fmt;

use serde::Serialize;

use crate::board::BoardState;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    InsufficientMaterial,
    FiftyMove,
    ThreefoldRepetition,
    /// Carries the winner: the side that delivered mate.
    Checkmate(Color),
    Stalemate,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::InsufficientMaterial => write!(f, "insufficient-material"),
            EndReason::FiftyMove => write!(f, "fifty-move"),
            EndReason::ThreefoldRepetition => write!(f, "threefold-repetition"),
            EndReason::Checkmate(winner) => write!(f, "checkmate({winner})"),
            EndReason::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl BoardState {
    /// True iff any piece of `color` has at least one legal destination.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        let mut tmp = self.clone();
        for y in 0..8i8 {
            for x in 0..8i8 {
                if let Some(pc) = tmp.piece_at(Square { x, y })
                    && pc.color == color
                    && !tmp.moves_from(x, y, true).is_empty()
                {
                    return true;
                }
            }
        }
        false
    }

    /// Neither side retains mating material. Any pawn, rook, or queen
    /// keeps the game alive. A side is individually helpless with no
    /// minors, a lone knight, or a lone bishop; two knights and nothing
    /// else are helpless only against a bare king. Both sides must be
    /// helpless for the game-wide verdict.
    pub fn insufficient_material(&self) -> bool {
        let mut knights = [0u32; 2];
        let mut bishops = [0u32; 2];
        for y in 0..8i8 {
            for x in 0..8i8 {
                let pc = match self.piece_at(Square { x, y }) {
                    Some(p) => p,
                    None => continue,
                };
                match pc.kind {
                    PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                    PieceKind::Knight => knights[pc.color.idx()] += 1,
                    PieceKind::Bishop => bishops[pc.color.idx()] += 1,
                    PieceKind::King => {}
                }
            }
        }
        let cannot_mate = |n: u32, b: u32, opp_n: u32, opp_b: u32| match (n, b) {
            (0, 0) | (1, 0) | (0, 1) => true,
            (2, 0) => opp_n == 0 && opp_b == 0,
            _ => false,
        };
        cannot_mate(knights[0], bishops[0], knights[1], bishops[1])
            && cannot_mate(knights[1], bishops[1], knights[0], bishops[0])
    }

    pub fn ended(&self) -> bool {
        self.fifty_move_rule_reached
            || self.threefold_repetition
            || self.insufficient_material()
            || !self.has_any_legal_move(self.side_to_move)
    }

    /// Why the game is over, in fixed priority order; `None` while it
    /// is still running. The no-legal-move case splits on whether the
    /// side to move is currently in check.
    pub fn end_reason(&self) -> Option<EndReason> {
        if self.insufficient_material() {
            return Some(EndReason::InsufficientMaterial);
        }
        if self.fifty_move_rule_reached {
            return Some(EndReason::FiftyMove);
        }
        if self.threefold_repetition {
            return Some(EndReason::ThreefoldRepetition);
        }
        if !self.has_any_legal_move(self.side_to_move) {
            return Some(if self.is_attacked(self.side_to_move) {
                EndReason::Checkmate(self.side_to_move.other())
            } else {
                EndReason::Stalemate
            });
        }
        None
    }
}

#[cfg(test)]
#[path = "endings_tests.rs"]
mod endings_tests;
