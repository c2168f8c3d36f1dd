pub mod attacks;
pub mod board;
pub mod endings;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod uci;
pub mod zobrist;

// Re-export the game-rules surface; attacks and movegen only add
// inherent methods to BoardState.
pub use board::*;
pub use endings::*;
pub use perft::perft;
pub use types::*;
pub use uci::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Evaluator trait: the external move-evaluation engine boundary
// =============================================================================

/// Trait for the external engine that scores candidate moves.
///
/// The core only speaks plain text across this boundary: the moves
/// played so far in UCI form (for the engine to replay), and the
/// candidate set the core generated. Keeping the boundary abstract lets
/// the real engine binding be swapped out or mocked in tests.
pub trait Evaluator {
    /// Pick one of `candidates` given the game so far.
    ///
    /// `moves_played` is the space-separated UCI history (empty at the
    /// starting position); every entry of `candidates` is a legal move
    /// in the current position. The returned string must be one of the
    /// candidates; the core does not re-validate engine output beyond
    /// the normal apply path.
    fn choose_move(&mut self, moves_played: &str, candidates: &[String]) -> String;

    /// Name used in per-game log records.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
