use std::fmt;

use crate::{
    board::Board,
    movegen::{Rules, captures},
    types::*,
};

/// A board plus the side to move.
///
/// States are values: `apply_move` builds a fresh state and never touches
/// the receiver, so search can backtrack simply by dropping children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
    pub board: Board,
    pub side: Side,
}

impl State {
    pub fn new(board: Board, side: Side) -> Self {
        Self { board, side }
    }

    /// Standard opening: twelve men per side on the dark squares,
    /// Side Two on rows 0-2, Side One on rows 5-7, Side One to move.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for sq in Board::squares() {
            if (sq.x + sq.y) % 2 == 0 {
                continue;
            }
            match sq.y {
                0..=2 => board.set(sq, Cell::Piece(Side::Two)),
                5..=7 => board.set(sq, Cell::Piece(Side::One)),
                _ => {}
            }
        }
        Self::new(board, Side::One)
    }

    /// Play `mv` for the side to move and hand the turn over.
    pub fn apply_move(&self, mv: &Move) -> State {
        debug_assert!(!mv.landings.is_empty(), "a move needs at least one landing");
        let mut next = self.clone();
        next.board.set(mv.start, Cell::Empty);
        if let Some(dest) = mv.destination() {
            next.board.set(dest, Cell::Piece(self.side));
        }
        for sq in captures(mv) {
            next.board.set(sq, Cell::Empty);
        }
        next.side = self.side.other();
        next
    }

    /// First capturing move available to the side to move, in generation order.
    pub fn has_capture(&self, rules: &Rules) -> Option<Move> {
        rules
            .legal_moves_for(&self.board, self.side)
            .into_iter()
            .find(|mv| !captures(mv).is_empty())
    }

    /// Static score from the side to move's point of view.
    ///
    /// Captures are compulsory, so pending captures are played out for
    /// whichever side is on move until none remain, then material is counted.
    pub fn evaluate(&self, rules: &Rules) -> i32 {
        let mut settled = self.clone();
        while let Some(mv) = settled.has_capture(rules) {
            settled = settled.apply_move(&mv);
        }
        if settled.side == self.side {
            settled.material_difference()
        } else {
            -settled.material_difference()
        }
    }

    /// Own piece count minus opponent piece count.
    pub fn material_difference(&self) -> i32 {
        self.board.count(self.side) - self.board.count(self.side.other())
    }
}

impl fmt::Display for State {
    /// Same layout as the engine's input: eight rows of cells, then the side.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        writeln!(f, "{}", self.side.to_char())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
