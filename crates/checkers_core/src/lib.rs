pub mod board;
pub mod config;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod state;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use config::*;
pub use error::CheckersError;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use state::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move-search engine
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Material score of the committed move from the mover's perspective
    pub score: i32,
    /// Deepest iterative-deepening depth that was fully evaluated
    pub depth: u16,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

impl SearchResult {
    /// The committed move, or `NoLegalMoves` when the side to move is blocked.
    pub fn best_move(&self) -> Result<&Move, CheckersError> {
        self.best_move.as_ref().ok_or(CheckersError::NoLegalMoves)
    }
}

/// Trait that all checkers engines implement.
pub trait Engine: Send {
    /// Search the state with the given limits.
    ///
    /// # Arguments
    /// * `state` - The position and side to move
    /// * `limits` - Search limits (depth ceiling, time budget)
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, state: &State, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for logging
    fn name(&self) -> &str;
}
