use std::io::{self, Write};

use crate::{board::Board, error::CheckersError, state::State, types::*};

/// Parse a position: 64 cell characters row by row from the top row
/// (`0` empty, `1`/`2` a piece), then the side to move (`1` or `2`).
///
/// Whitespace between characters is optional.
pub fn parse_state(text: &str) -> Result<State, CheckersError> {
    let mut tokens = text.chars().filter(|c| !c.is_whitespace());
    let mut board = Board::empty();

    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let ch = tokens.next().ok_or_else(|| {
                CheckersError::invalid_input(format!(
                    "board ended early at row {y}, column {x}"
                ))
            })?;
            let cell = Cell::from_char(ch).ok_or_else(|| {
                CheckersError::invalid_input(format!(
                    "unknown cell '{ch}' at row {y}, column {x}"
                ))
            })?;
            board.set(Square::new(x, y), cell);
        }
    }

    let ch = tokens
        .next()
        .ok_or_else(|| CheckersError::invalid_input("missing side to move"))?;
    let side = Side::from_char(ch)
        .ok_or_else(|| CheckersError::invalid_input(format!("unknown side to move '{ch}'")))?;

    if let Some(extra) = tokens.next() {
        return Err(CheckersError::invalid_input(format!(
            "unexpected trailing input '{extra}'"
        )));
    }

    Ok(State::new(board, side))
}

/// Start square, landing count, then one landing per line; squares are
/// written row first.
pub fn write_move<W: Write>(out: &mut W, mv: &Move) -> io::Result<()> {
    writeln!(out, "{}", mv.start)?;
    writeln!(out, "{}", mv.landings.len())?;
    for sq in &mv.landings {
        writeln!(out, "{sq}")?;
    }
    Ok(())
}

/// Placeholder answer when the side to move is blocked: start `0 0` with
/// no landings.
pub fn write_no_move<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", Square::new(0, 0))?;
    writeln!(out, "0")
}

pub fn move_to_string(mv: &Move) -> String {
    let landings: Vec<String> = mv.landings.iter().map(|sq| format!("({sq})")).collect();
    format!("({}) -> {}", mv.start, landings.join(" -> "))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
