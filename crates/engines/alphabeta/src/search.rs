//! Iterative-deepening negamax search with alpha-beta pruning

use checkers_core::{move_to_string, Move, Rules, State, TimeControl};

/// Bound wider than any material score.
pub const INF: i32 = 1_000_000_000;

/// Value of a searched node. A node that hit the time limit has no score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeValue {
    Evaluated(i32),
    Cancelled,
}

/// Result from find_best_move.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Committed move and its score (None if no legal moves exist)
    pub best_move: Option<(Move, i32)>,
    /// Deepest fully evaluated depth
    pub depth: u16,
    /// True if deepening was cut short by the clock
    pub stopped: bool,
}

/// Recursive negamax with alpha-beta pruning.
///
/// Children are visited in ascending order of their static score, which is
/// taken from the opponent's side: the replies that look worst for the
/// opponent come first.
pub fn alpha_beta(
    state: &State,
    depth: u16,
    mut alpha: i32,
    beta: i32,
    rules: &Rules,
    nodes: &mut u64,
    tc: &TimeControl,
) -> NodeValue {
    *nodes += 1;
    if tc.check_time() {
        return NodeValue::Cancelled;
    }
    if depth == 0 {
        return NodeValue::Evaluated(state.evaluate(rules));
    }

    let moves = rules.legal_moves_for(&state.board, state.side);
    if moves.is_empty() {
        return NodeValue::Evaluated(state.evaluate(rules));
    }

    let mut children: Vec<(i32, State)> = moves
        .iter()
        .map(|mv| {
            let child = state.apply_move(mv);
            (child.evaluate(rules), child)
        })
        .collect();
    children.sort_by_key(|(score, _)| *score);

    let mut best = -INF;
    for (_, child) in &children {
        let score = match alpha_beta(child, depth - 1, -beta, -alpha, rules, nodes, tc) {
            NodeValue::Evaluated(s) => -s,
            NodeValue::Cancelled => return NodeValue::Cancelled,
        };

        if score > best {
            best = score;
        }
        if score >= beta {
            return NodeValue::Evaluated(score); // Beta cutoff
        }
        if score > alpha {
            alpha = score;
        }
    }

    NodeValue::Evaluated(best)
}

/// Searches the root with iterative deepening until the clock runs out or
/// `max_depth` is reached.
///
/// Depth 0 is answered from the pre-scored root list without touching the
/// clock and is always committed. A deeper iteration is committed only if
/// every node in it was evaluated and time still remains afterwards;
/// otherwise the previous commitment is returned.
pub fn find_best_move(
    state: &State,
    rules: &Rules,
    max_depth: u16,
    nodes: &mut u64,
    tc: &TimeControl,
) -> SearchOutcome {
    let moves = rules.legal_moves_for(&state.board, state.side);
    if moves.is_empty() {
        tracing::warn!(side = ?state.side, "no legal moves at the root");
        return SearchOutcome {
            best_move: None,
            depth: 0,
            stopped: false,
        };
    }

    let mut scored: Vec<(i32, Move)> = moves
        .into_iter()
        .map(|mv| (state.apply_move(&mv).evaluate(rules), mv))
        .collect();
    scored.sort_by_key(|(score, _)| *score);

    let mut committed: Option<(Move, i32)> = None;
    let mut completed = 0;
    let mut stopped = false;

    for depth in 0..max_depth.max(1) {
        let iteration = if depth == 0 {
            best_of_static(&scored)
        } else {
            let previous = committed.as_ref().map(|(mv, _)| mv);
            search_root(state, &scored, previous, depth, rules, nodes, tc)
        };

        match iteration {
            Some((mv, score)) if depth == 0 || !tc.check_time() => {
                tracing::debug!(
                    depth,
                    score,
                    nodes = *nodes,
                    best = %move_to_string(&mv),
                    "depth complete"
                );
                committed = Some((mv, score));
                completed = depth;
            }
            _ => {
                tracing::debug!(depth, nodes = *nodes, "time is up, discarding depth");
                stopped = true;
                break;
            }
        }
    }

    SearchOutcome {
        best_move: committed,
        depth: completed,
        stopped,
    }
}

/// Depth 0: each move is worth the negated static score of its child.
fn best_of_static(scored: &[(i32, Move)]) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;
    for (child_score, mv) in scored {
        let score = -child_score;
        if best.as_ref().is_none_or(|(_, b)| score > *b) {
            best = Some((mv.clone(), score));
        }
    }
    best
}

/// One iterative-deepening round. The previous best move is searched first
/// with a full window to set the bar; the remaining moves only need to beat it.
/// Returns None if the clock cancelled any node.
fn search_root(
    state: &State,
    scored: &[(i32, Move)],
    previous: Option<&Move>,
    depth: u16,
    rules: &Rules,
    nodes: &mut u64,
    tc: &TimeControl,
) -> Option<(Move, i32)> {
    let mut best_score = -INF - 1;
    let mut best_move = previous.cloned();

    if let Some(prev) = previous {
        let child = state.apply_move(prev);
        match alpha_beta(&child, depth, -INF, INF, rules, nodes, tc) {
            NodeValue::Evaluated(s) => best_score = best_score.max(-s),
            NodeValue::Cancelled => return None,
        }
    }

    for (_, mv) in scored {
        if previous.is_some_and(|prev| mv.shares_opening(prev)) {
            continue;
        }
        let child = state.apply_move(mv);
        let score = match alpha_beta(&child, depth, -INF, -best_score, rules, nodes, tc) {
            NodeValue::Evaluated(s) => -s,
            NodeValue::Cancelled => return None,
        };
        if score > best_score {
            best_score = score;
            best_move = Some(mv.clone());
        }
    }

    best_move.map(|mv| (mv, best_score))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
