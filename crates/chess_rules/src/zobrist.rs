//! Zobrist hashing, used as the canonical position fingerprint for
//! threefold-repetition bookkeeping.
//!
//! The fingerprint is the XOR of random values for:
//! - Each piece on each square (12 pieces × 64 squares = 768 values)
//! - Side to move (1 value)
//! - Castling rights (4 values)
//! - En-passant double-step flags, per color and file (16 values)
//!
//! Clocks and move history are deliberately excluded: two positions with
//! the same placement, rights, flags, and mover are the same position.

use crate::types::Piece;

/// Pre-computed random values for Zobrist hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Random values for each piece on each square.
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    /// Random value for black to move (XOR when black's turn)
    pub side_to_move: u64,
    /// Random values for castling rights [white-short, white-long,
    /// black-short, black-long]
    pub castling: [u64; 4],
    /// Random values for en-passant flags, indexed by [color][file]
    pub en_passant: [[u64; 8]; 2],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate Zobrist keys using a simple PRNG with fixed seed.
    /// Uses xorshift64 for fast, reproducible random numbers.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E3779B97F4A7C15u64; // Fixed seed

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut piece = 0;
            while piece < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = xorshift64(state);
                    pieces[color][piece][sq] = state;
                    sq += 1;
                }
                piece += 1;
            }
            color += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = xorshift64(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [[0u64; 8]; 2];
        let mut color = 0;
        while color < 2 {
            let mut file = 0;
            while file < 8 {
                state = xorshift64(state);
                en_passant[color][file] = state;
                file += 1;
            }
            color += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    }

    /// Get the Zobrist key for a piece on a flat square index.
    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, index: usize) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][index]
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
