use std::collections::HashMap;

use crate::types::*;
use crate::uci::{self, NotationError};
use crate::zobrist::ZOBRIST;

#[derive(Clone, Debug, PartialEq)]
pub struct CastlingRights {
    pub white_short: bool,
    pub white_long: bool,
    pub black_short: bool,
    pub black_long: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        CastlingRights {
            white_short: true,
            white_long: true,
            black_short: true,
            black_long: true,
        }
    }

    pub fn none() -> Self {
        CastlingRights {
            white_short: false,
            white_long: false,
            black_short: false,
            black_long: false,
        }
    }
}

/// The single mutable aggregate for one game.
///
/// Mutated in place by `apply` for the lifetime of the game; every other
/// operation either reads it or restores it exactly (see `is_legal`).
#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
    /// 8×8 grid of optional pieces, indexed `[y][x]`; `y = 0` is rank 1.
    pub grid: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    /// Half-moves played; equals `move_history.len()` at all times.
    pub ply_count: u32,
    /// Monotone: rights transition true→false and never back.
    pub castling: CastlingRights,
    /// Per-color per-file double-step flags, indexed `[color][file]`.
    /// The mover's own array is wiped at the start of its every ply, so
    /// only the immediately preceding double-step stays eligible.
    pub en_passant: [[bool; 8]; 2],
    pub move_history: Vec<Move>,
    /// Plies since the last capture or pawn move.
    pub halfmove_clock: u32,
    /// Sticky: set when `halfmove_clock` reaches 100, never reset.
    pub fifty_move_rule_reached: bool,
    /// Sticky: set when a fingerprint count reaches 3, never reset.
    pub threefold_repetition: bool,
    /// Fingerprint → occurrence count. Kept as state rather than
    /// recomputed; a full-history recount per query would be quadratic
    /// in game length.
    pub position_history: HashMap<u64, u32>,
}

impl BoardState {
    pub fn startpos() -> Self {
        let mut b = BoardState {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            ply_count: 0,
            castling: CastlingRights::all(),
            en_passant: [[false; 8]; 2],
            move_history: Vec::new(),
            halfmove_clock: 0,
            fifty_move_rule_reached: false,
            threefold_repetition: false,
            position_history: HashMap::new(),
        };

        for x in 0..8 {
            b.grid[1][x] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
            b.grid[6][x] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (x, &kind) in back.iter().enumerate() {
            b.grid[0][x] = Some(Piece {
                color: Color::White,
                kind,
            });
            b.grid[7][x] = Some(Piece {
                color: Color::Black,
                kind,
            });
        }

        let fp = b.fingerprint();
        b.position_history.insert(fp, 1);
        b
    }

    /// Forsyth-Edwards Notation parser, used by tests to reach mid- and
    /// endgame positions directly. Panics on malformed input; FEN only
    /// enters through test setup, never from the engine boundary.
    ///
    /// The move counters of a FEN board start empty: `ply_count` and
    /// `move_history` describe moves applied to *this* state, and none
    /// have been.
    pub fn from_fen(fen: &str) -> Self {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        assert!(parts.len() >= 4, "Invalid FEN: expected at least 4 fields");

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");

        let mut grid = [[None; 8]; 8];
        let ranks: Vec<&str> = board_part.split('/').collect();
        assert!(ranks.len() == 8, "Invalid FEN board section");

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => panic!("Invalid piece char in FEN: {}", ch),
                    };
                    let s = sq(file, rank).expect("Square out of bounds while parsing FEN");
                    grid[s.y as usize][s.x as usize] = Some(Piece { color, kind });
                    file += 1;
                }
                assert!(file <= 8, "Too many files in FEN rank");
            }
            assert!(file == 8, "Not enough files in FEN rank");
        }

        let side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => panic!("Invalid side to move in FEN: {}", stm_part),
        };

        let mut castling = CastlingRights::none();
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling.white_short = true,
                    'Q' => castling.white_long = true,
                    'k' => castling.black_short = true,
                    'q' => castling.black_long = true,
                    _ => panic!("Invalid castling char in FEN: {}", c),
                }
            }
        }

        let mut en_passant = [[false; 8]; 2];
        if ep_part != "-" {
            let ep = coord_to_square(ep_part)
                .unwrap_or_else(|| panic!("Invalid en-passant square in FEN: {}", ep_part));
            // The FEN square is the one passed over; the color that just
            // double-stepped owns the flag.
            match ep.y {
                2 => en_passant[Color::White.idx()][ep.x as usize] = true,
                5 => en_passant[Color::Black.idx()][ep.x as usize] = true,
                _ => panic!("Invalid en-passant rank in FEN: {}", ep_part),
            }
        }

        let halfmove_clock: u32 = halfmove_part.parse().expect("Invalid halfmove clock in FEN");

        let mut b = BoardState {
            grid,
            side_to_move,
            ply_count: 0,
            castling,
            en_passant,
            move_history: Vec::new(),
            halfmove_clock,
            fifty_move_rule_reached: halfmove_clock >= 100,
            threefold_repetition: false,
            position_history: HashMap::new(),
        };
        let fp = b.fingerprint();
        b.position_history.insert(fp, 1);
        b
    }

    pub fn piece_at(&self, s: Square) -> Option<Piece> {
        self.grid[s.y as usize][s.x as usize]
    }

    pub fn set_piece(&mut self, s: Square, pc: Option<Piece>) {
        self.grid[s.y as usize][s.x as usize] = pc;
    }

    pub fn piece_count(&self) -> u32 {
        self.grid
            .iter()
            .flatten()
            .filter(|slot| slot.is_some())
            .count() as u32
    }

    /// Locate `c`'s king. Exactly one king of each color is on the board
    /// at all times; a miss means the state was corrupted by a caller
    /// bypassing the executor, and that aborts rather than guesses.
    pub fn king_sq(&self, c: Color) -> Square {
        for y in 0..8i8 {
            for x in 0..8i8 {
                let s = Square { x, y };
                if let Some(pc) = self.piece_at(s)
                    && pc.color == c
                    && pc.kind == PieceKind::King
                {
                    return s;
                }
            }
        }
        panic!("no {c} king on the board; state was mutated outside the executor");
    }

    /// Canonical position fingerprint: placement, side to move, castling
    /// rights, and en-passant flags. Clocks and histories do not enter.
    pub fn fingerprint(&self) -> u64 {
        let mut h = 0u64;
        for y in 0..8i8 {
            for x in 0..8i8 {
                let s = Square { x, y };
                if let Some(pc) = self.piece_at(s) {
                    h ^= ZOBRIST.piece_key(pc, s.index());
                }
            }
        }
        if self.side_to_move == Color::Black {
            h ^= ZOBRIST.side_to_move;
        }
        let rights = [
            self.castling.white_short,
            self.castling.white_long,
            self.castling.black_short,
            self.castling.black_long,
        ];
        for (i, &on) in rights.iter().enumerate() {
            if on {
                h ^= ZOBRIST.castling[i];
            }
        }
        for color in 0..2 {
            for file in 0..8 {
                if self.en_passant[color][file] {
                    h ^= ZOBRIST.en_passant[color][file];
                }
            }
        }
        h
    }

    /// The outbound state representation: every applied move's UCI form,
    /// space-separated, in play order. Empty for the starting position.
    pub fn uci_history(&self) -> String {
        self.move_history
            .iter()
            .map(|m| uci::move_to_uci(*m))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parse an inbound UCI move and apply it. `Err` is malformed
    /// notation; `Ok` with an empty vec is a well-formed but illegal
    /// move, a normal outcome the caller checks for.
    pub fn play_uci(&mut self, text: &str) -> Result<Vec<Square>, NotationError> {
        let mv = uci::parse_move(self, text)?;
        Ok(self.apply(mv))
    }

    /// Plain-text render of the 8 ranks, rank 8 first, one glyph or
    /// blank per file. For logs and humans only; nothing re-parses it.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for y in (0..8i8).rev() {
            for x in 0..8i8 {
                match self.piece_at(Square { x, y }) {
                    Some(pc) => out.push(pc.glyph()),
                    None => out.push(' '),
                }
            }
            out.push('\n');
        }
        out
    }

    /// Commit a move, returning the changed squares in order, or an
    /// empty vec (and no mutation at all) if the move is rejected.
    ///
    /// The rejection test is "the destination is one the generator
    /// offers for `from` with legality enforced"; that covers plain
    /// king safety, the castling path, and en-passant preconditions
    /// alike, so `apply` is safe to drive with arbitrary input even
    /// though the evaluator only ever replays generated moves.
    pub fn apply(&mut self, mv: Move) -> Vec<Square> {
        let from = mv.from;
        let to = mv.to;
        let moved = match self.piece_at(from) {
            Some(pc) if pc.color == self.side_to_move => pc,
            _ => return Vec::new(),
        };
        if !self.moves_from(from.x, from.y, true).contains(&to) {
            return Vec::new();
        }
        let promoting = moved.kind == PieceKind::Pawn && to.y == moved.color.promotion_rank();
        let promo_kind = match mv.promotion {
            Some(
                k @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight),
            ) => Some(k),
            _ => None,
        };
        // A promoting pawn with no valid selector would leave a pawn
        // shape on the back rank; reject instead.
        if promoting && promo_kind.is_none() {
            return Vec::new();
        }

        let pieces_before = self.piece_count();
        let captured = self.piece_at(to);
        let mut changed = vec![from, to];

        self.set_piece(from, None);
        self.set_piece(to, Some(moved));

        // A king sliding two files is castling: the rook comes along.
        if moved.kind == PieceKind::King && (to.x - from.x).abs() == 2 {
            let (rook_from_x, rook_to_x) = if to.x > from.x { (7, 5) } else { (0, 3) };
            let rook_from = Square {
                x: rook_from_x,
                y: from.y,
            };
            let rook_to = Square {
                x: rook_to_x,
                y: from.y,
            };
            if let Some(rook) = self.piece_at(rook_from) {
                self.set_piece(rook_from, None);
                self.set_piece(rook_to, Some(rook));
                changed.push(rook_from);
                changed.push(rook_to);
            }
        }

        // Rights: a king move forfeits both of the mover's rights; a
        // home corner that no longer holds an unmoved rook forfeits that
        // corner's right. Only ever cleared, never re-granted.
        if moved.kind == PieceKind::King {
            self.clear_rights(moved.color, true, true);
        }
        let home = moved.color.home_rank();
        let own_rook = Some(Piece {
            color: moved.color,
            kind: PieceKind::Rook,
        });
        if self.piece_at(Square { x: 0, y: home }) != own_rook {
            self.clear_rights(moved.color, false, true);
        }
        if self.piece_at(Square { x: 7, y: home }) != own_rook {
            self.clear_rights(moved.color, true, false);
        }

        // The mover's en-passant array holds at most its own fresh
        // double-step; the opponent's stale flags were wiped on their
        // own previous ply.
        self.en_passant[moved.color.idx()] = [false; 8];
        if moved.kind == PieceKind::Pawn && (to.y - from.y).abs() == 2 {
            self.en_passant[moved.color.idx()][from.x as usize] = true;
        }

        // En passant: a pawn capturing diagonally onto an empty square;
        // the victim sits behind the landing square.
        if moved.kind == PieceKind::Pawn && from.x != to.x && captured.is_none() {
            let victim = Square {
                x: to.x,
                y: from.y,
            };
            self.set_piece(victim, None);
            changed.push(victim);
        }

        if promoting {
            if let Some(kind) = promo_kind {
                self.set_piece(
                    to,
                    Some(Piece {
                        color: moved.color,
                        kind,
                    }),
                );
            }
        }

        self.side_to_move = self.side_to_move.other();
        self.ply_count += 1;
        self.move_history.push(mv);

        // Fifty-move bookkeeping: an unchanged census with no pawn left
        // on a touched square ticks the clock, anything else resets it.
        let quiet = self.piece_count() == pieces_before
            && !changed
                .iter()
                .any(|&s| matches!(self.piece_at(s), Some(pc) if pc.kind == PieceKind::Pawn));
        if quiet {
            self.halfmove_clock += 1;
            if self.halfmove_clock >= 100 {
                self.fifty_move_rule_reached = true;
            }
        } else {
            self.halfmove_clock = 0;
        }

        let fp = self.fingerprint();
        let count = self.position_history.entry(fp).or_insert(0);
        *count += 1;
        if *count >= 3 {
            self.threefold_repetition = true;
        }

        changed
    }

    fn clear_rights(&mut self, color: Color, short: bool, long: bool) {
        match color {
            Color::White => {
                if short {
                    self.castling.white_short = false;
                }
                if long {
                    self.castling.white_long = false;
                }
            }
            Color::Black => {
                if short {
                    self.castling.black_short = false;
                }
                if long {
                    self.castling.black_long = false;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
