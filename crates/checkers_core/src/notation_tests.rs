use super::*;

const SCENARIO: &str = "\
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
0 0 0 2 0 0 0 0
0 0 0 0 1 0 0 0
1
";

#[test]
fn test_parse_state() {
    let state = parse_state(SCENARIO).unwrap();
    assert_eq!(state.side, Side::One);
    assert_eq!(state.board.get(Square::new(4, 7)), Some(Cell::Piece(Side::One)));
    assert_eq!(state.board.get(Square::new(3, 6)), Some(Cell::Piece(Side::Two)));
    assert_eq!(state.board.count(Side::One), 1);
    assert_eq!(state.board.count(Side::Two), 1);
}

#[test]
fn test_parse_accepts_unspaced_rows() {
    let compact: String = SCENARIO.chars().filter(|c| *c != ' ').collect();
    assert_eq!(parse_state(&compact).unwrap(), parse_state(SCENARIO).unwrap());
}

#[test]
fn test_parse_roundtrips_display() {
    let state = State::initial();
    assert_eq!(parse_state(&state.to_string()).unwrap(), state);
}

#[test]
fn test_parse_rejects_bad_cell() {
    let bad = SCENARIO.replacen('2', "3", 1);
    let err = parse_state(&bad).unwrap_err();
    assert!(matches!(err, CheckersError::InvalidInput { .. }));
}

#[test]
fn test_parse_rejects_bad_side() {
    let bad = format!("{}0", SCENARIO.trim_end().trim_end_matches('1'));
    let err = parse_state(&bad).unwrap_err();
    assert!(matches!(err, CheckersError::InvalidInput { .. }));
}

#[test]
fn test_parse_rejects_short_and_long_input() {
    assert!(matches!(
        parse_state("0 0 0").unwrap_err(),
        CheckersError::InvalidInput { .. }
    ));
    let without_side = SCENARIO.trim_end().trim_end_matches('1');
    assert!(matches!(
        parse_state(without_side).unwrap_err(),
        CheckersError::InvalidInput { .. }
    ));
    let long = format!("{SCENARIO} 2");
    assert!(matches!(
        parse_state(&long).unwrap_err(),
        CheckersError::InvalidInput { .. }
    ));
}

#[test]
fn test_write_move_prints_row_then_column() {
    let mv = Move::new(
        Square::new(4, 7),
        vec![Square::new(2, 5), Square::new(4, 3)],
    );
    let mut out = Vec::new();
    write_move(&mut out, &mv).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "7 4\n2\n5 2\n3 4\n");
}

#[test]
fn test_write_no_move() {
    let mut out = Vec::new();
    write_no_move(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0 0\n0\n");
}

#[test]
fn test_move_to_string() {
    let mv = Move::step(Square::new(4, 7), Square::new(5, 6));
    assert_eq!(move_to_string(&mv), "(7 4) -> (6 5)");
}
