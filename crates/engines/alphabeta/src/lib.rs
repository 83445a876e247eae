//! Alpha-Beta Checkers Engine
//!
//! Iterative-deepening negamax with alpha-beta pruning over a material
//! evaluation that plays out forced captures before counting.

mod search;

use checkers_core::{Engine, Rules, SearchLimits, SearchResult, State};

/// Checkers engine using negamax with alpha-beta pruning.
///
/// This engine uses:
/// - Iterative deepening, previous best move searched first
/// - Children ordered by their static score
/// - Material evaluation after forced captures are resolved
/// - A wall-clock budget polled at every node
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaEngine {
    rules: Rules,
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new(rules: Rules) -> Self {
        Self { rules, nodes: 0 }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, state: &State, mut limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.time_control.ensure_started();

        let outcome = search::find_best_move(
            state,
            &self.rules,
            limits.depth,
            &mut self.nodes,
            &limits.time_control,
        );

        SearchResult {
            score: outcome.best_move.as_ref().map(|(_, s)| *s).unwrap_or(0),
            best_move: outcome.best_move.map(|(mv, _)| mv),
            depth: outcome.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }
}

// Re-export for direct use if needed
pub use search::{alpha_beta, find_best_move, NodeValue, SearchOutcome, INF};
