use crate::board::BoardState;
use crate::types::*;

impl BoardState {
    /// Relocate the piece on `from` to `to`, run `inspect` on the
    /// resulting position, then restore the grid exactly. The restore
    /// runs from a drop guard, so it happens on every exit path,
    /// including a panic inside `inspect`, so the board is never left
    /// holding the speculative state.
    pub(crate) fn with_piece_moved<R>(
        &mut self,
        from: Square,
        to: Square,
        inspect: impl FnOnce(&BoardState) -> R,
    ) -> R {
        struct Restore<'a> {
            board: &'a mut BoardState,
            from: Square,
            to: Square,
            moved: Option<Piece>,
            captured: Option<Piece>,
        }
        impl Drop for Restore<'_> {
            fn drop(&mut self) {
                self.board.set_piece(self.from, self.moved);
                self.board.set_piece(self.to, self.captured);
            }
        }

        let moved = self.piece_at(from);
        let captured = self.piece_at(to);
        self.set_piece(from, None);
        self.set_piece(to, moved);
        let guard = Restore {
            board: self,
            from,
            to,
            moved,
            captured,
        };
        inspect(&*guard.board)
    }

    /// Would relocating `from` to `to` leave the mover's own king
    /// attacked? Only the single piece is simulated; the compound
    /// effects of castling and en passant are covered by the generator
    /// probing the king's path squares individually.
    pub fn is_legal(&mut self, from: Square, to: Square) -> bool {
        let mover = match self.piece_at(from) {
            Some(pc) => pc.color,
            None => return false,
        };
        self.with_piece_moved(from, to, |board| !board.is_attacked(mover))
    }

    /// Is `color`'s king attacked? Scans every square and generates
    /// pseudo-legal destinations for each enemy piece, looking for
    /// overlap with the king square. O(64 × per-piece generation),
    /// which is fine: games are move-count-bounded, not
    /// attack-query-bounded.
    pub fn is_attacked(&self, color: Color) -> bool {
        let king = self.king_sq(color);
        for y in 0..8i8 {
            for x in 0..8i8 {
                let from = Square { x, y };
                if let Some(pc) = self.piece_at(from)
                    && pc.color != color
                    && self.pseudo_destinations(from, pc).contains(&king)
                {
                    return true;
                }
            }
        }
        false
    }

    pub fn in_check(&self, color: Color) -> bool {
        self.is_attacked(color)
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
