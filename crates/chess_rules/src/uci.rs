//! The text boundary with the external evaluator: UCI move formatting
//! and parsing. Malformed notation is a distinct error so the caller
//! can tell "the engine proposed garbage" apart from "the move was
//! illegal" (which `apply` reports as an empty change set).

use std::error::Error;
use std::fmt;

use crate::board::BoardState;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotationError {
    BadLength(usize),
    BadSquare(String),
    BadPromotion(char),
    /// A pawn move onto its promotion rank with no valid selector.
    MissingPromotion,
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::BadLength(n) => write!(f, "expected 4 or 5 characters, got {n}"),
            NotationError::BadSquare(s) => write!(f, "bad square {s:?}"),
            NotationError::BadPromotion(c) => write!(f, "bad promotion letter {c:?}"),
            NotationError::MissingPromotion => {
                write!(f, "promoting pawn move needs a promotion letter")
            }
        }
    }
}

impl Error for NotationError {}

/// 4- or 5-character UCI form: two squares plus an optional lowercase
/// promotion letter.
pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::new();
    s.push_str(&mv.from.coord());
    s.push_str(&mv.to.coord());
    if let Some(kind) = mv.promotion {
        s.push(kind.promo_letter());
    }
    s
}

/// Parse an inbound UCI move. The board is consulted for one thing
/// only: a pawn move onto its promotion rank must carry a promotion
/// letter, otherwise the move is malformed, never a silent no-op with
/// an under-specified board behind it.
pub fn parse_move(board: &BoardState, text: &str) -> Result<Move, NotationError> {
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(NotationError::BadLength(text.len()));
    }
    let from = coord_to_square(&text[0..2])
        .ok_or_else(|| NotationError::BadSquare(text[0..2].to_string()))?;
    let to = coord_to_square(&text[2..4])
        .ok_or_else(|| NotationError::BadSquare(text[2..4].to_string()))?;
    let promotion = if text.len() == 5 {
        let letter = text.as_bytes()[4] as char;
        Some(PieceKind::from_promo_letter(letter).ok_or(NotationError::BadPromotion(letter))?)
    } else {
        None
    };

    if promotion.is_none()
        && let Some(pc) = board.piece_at(from)
        && pc.kind == PieceKind::Pawn
        && to.y == pc.color.promotion_rank()
    {
        return Err(NotationError::MissingPromotion);
    }

    Ok(Move {
        from,
        to,
        promotion,
    })
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
