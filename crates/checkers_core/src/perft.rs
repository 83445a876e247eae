use crate::{movegen::Rules, state::State};

/// Pure perft node count.
/// Counts all move paths from the current state down to `depth`.
pub fn perft(state: &State, rules: &Rules, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = rules.legal_moves_for(&state.board, state.side);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&state.apply_move(mv), rules, depth - 1))
        .sum()
}
