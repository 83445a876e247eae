use rayon::prelude::*;

use checkers_core::{Board, Cell, Rules, Side, Square, State, perft};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

fn state_with(pieces: &[(i8, i8, Side)], side: Side) -> State {
    let mut board = Board::empty();
    for &(x, y, s) in pieces {
        board.set(Square::new(x, y), Cell::Piece(s));
    }
    State::new(board, side)
}

fn check_table(name: &str, state: &State, expected: &[u64]) {
    let rules = Rules::standard();
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    let limit = if full { expected.len() } else { expected.len().min(5) };

    let results: Vec<(usize, u64)> = (1..=limit)
        .into_par_iter()
        .map(|depth| (depth, perft(state, &rules, depth as u8)))
        .collect();

    for (depth, nodes) in results {
        assert_eq!(
            nodes,
            expected[depth - 1],
            "{name}: perft({depth}) mismatch"
        );
    }
}

#[test]
fn perft_initial_position() {
    check_table(
        "initial",
        &State::initial(),
        &[7, 49, 379, 2872, 23582, 189143],
    );
}

#[test]
fn perft_capture_position() {
    let state = state_with(
        &[
            (4, 7, Side::One),
            (6, 7, Side::One),
            (3, 6, Side::Two),
            (1, 4, Side::Two),
            (3, 4, Side::Two),
            (1, 0, Side::Two),
        ],
        Side::One,
    );
    check_table("captures", &state, &[5, 30, 94, 482, 1649]);
}

#[test]
fn perft_runs_out_of_moves() {
    // After One takes, Two has nothing left to move.
    let state = state_with(&[(4, 7, Side::One), (3, 6, Side::Two)], Side::One);
    check_table("lone capture", &state, &[2, 2, 4, 0]);
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&State::initial(), &Rules::standard(), 0), 1);
}
