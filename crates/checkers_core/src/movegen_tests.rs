use super::*;
use crate::state::State;

fn board_with(pieces: &[(i8, i8, Side)]) -> Board {
    let mut board = Board::empty();
    for &(x, y, side) in pieces {
        board.set(Square::new(x, y), Cell::Piece(side));
    }
    board
}

fn chain(start: (i8, i8), landings: &[(i8, i8)]) -> Move {
    Move::new(
        Square::new(start.0, start.1),
        landings.iter().map(|&(x, y)| Square::new(x, y)).collect(),
    )
}

#[test]
fn test_single_jump_is_generated() {
    let board = board_with(&[(4, 7, Side::One), (3, 6, Side::Two)]);
    let moves = Rules::standard().legal_moves_for(&board, Side::One);

    let jump = chain((4, 7), &[(2, 5)]);
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&jump));
    assert!(moves.contains(&chain((4, 7), &[(5, 6)])));
    assert_eq!(captures(&jump), vec![Square::new(3, 6)]);
}

#[test]
fn test_branching_chains_are_all_maximal() {
    let board = board_with(&[
        (4, 7, Side::One),
        (3, 6, Side::Two),
        (1, 4, Side::Two),
        (3, 4, Side::Two),
    ]);
    let moves = Rules::standard().legal_moves_from(&board, Square::new(4, 7));

    assert_eq!(
        moves,
        vec![
            chain((4, 7), &[(5, 6)]),
            chain((4, 7), &[(2, 5), (4, 3)]),
            chain((4, 7), &[(2, 5), (0, 3)]),
        ]
    );
    assert_eq!(
        captures(&moves[1]),
        vec![Square::new(3, 6), Square::new(3, 4)]
    );
    assert_eq!(
        captures(&moves[2]),
        vec![Square::new(3, 6), Square::new(1, 4)]
    );
}

#[test]
fn test_jump_needs_empty_landing() {
    let board = board_with(&[(4, 7, Side::One), (3, 6, Side::Two), (2, 5, Side::Two)]);
    let moves = Rules::standard().legal_moves_from(&board, Square::new(4, 7));
    assert_eq!(moves, vec![chain((4, 7), &[(5, 6)])]);
}

#[test]
fn test_no_moves_from_empty_square() {
    let board = board_with(&[(4, 7, Side::One)]);
    let rules = Rules::standard();
    assert!(rules.legal_moves_from(&board, Square::new(0, 0)).is_empty());
    assert!(rules.legal_moves_from(&board, Square::new(9, 9)).is_empty());
}

#[test]
fn test_blocked_by_own_piece_and_edge() {
    let rules = Rules::standard();

    // Side One on the far row has nowhere to go
    let board = board_with(&[(3, 0, Side::One)]);
    assert!(rules.legal_moves_for(&board, Side::One).is_empty());

    let board = board_with(&[(0, 7, Side::One), (1, 6, Side::One)]);
    let moves = rules.legal_moves_from(&board, Square::new(0, 7));
    assert!(moves.is_empty());
}

#[test]
fn test_side_two_moves_down_the_board() {
    let board = board_with(&[(3, 0, Side::Two)]);
    let moves = Rules::standard().legal_moves_for(&board, Side::Two);
    assert_eq!(
        moves,
        vec![chain((3, 0), &[(4, 1)]), chain((3, 0), &[(2, 1)])]
    );
}

#[test]
fn test_initial_position_moves() {
    let state = State::initial();
    let rules = Rules::standard();
    assert_eq!(rules.legal_moves_for(&state.board, Side::One).len(), 7);
    assert_eq!(rules.legal_moves_for(&state.board, Side::Two).len(), 7);
}

#[test]
fn test_generated_moves_start_on_own_piece() {
    let state = State::initial();
    let rules = Rules::standard();
    for mv in rules.legal_moves_for(&state.board, Side::One) {
        assert_eq!(state.board.get(mv.start), Some(Cell::Piece(Side::One)));
        assert!(!mv.is_capture());
        for sq in &mv.landings {
            assert_eq!(state.board.get(*sq), Some(Cell::Empty));
        }
    }
}

#[test]
fn test_captures_ignores_simple_steps() {
    assert!(captures(&chain((4, 7), &[(5, 6)])).is_empty());
}

#[test]
fn test_shares_opening() {
    let a = chain((4, 7), &[(2, 5), (4, 3)]);
    let b = chain((4, 7), &[(2, 5), (0, 3)]);
    let c = chain((4, 7), &[(5, 6)]);
    assert!(a.shares_opening(&b));
    assert_ne!(a, b);
    assert!(!a.shares_opening(&c));
    assert!(a.is_capture());
    assert!(!c.is_capture());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "at least one landing")]
fn test_move_new_requires_a_landing() {
    let _ = Move::new(Square::new(4, 7), Vec::new());
}
