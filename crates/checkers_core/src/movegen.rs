use std::collections::VecDeque;

use crate::{board::Board, types::*};

/// Movement directions for each side. Men only move forward, so each side
/// gets two of the four diagonals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    forward: [[Direction; 2]; 2],
}

impl Rules {
    /// Side One advances toward row 0, Side Two toward row 7.
    pub const fn standard() -> Self {
        Self {
            forward: [
                [Direction::new(1, -1), Direction::new(-1, -1)],
                [Direction::new(1, 1), Direction::new(-1, 1)],
            ],
        }
    }

    pub fn directions(&self, side: Side) -> &[Direction; 2] {
        &self.forward[side.idx()]
    }

    /// Generate every move for the piece standing on `from`.
    /// An empty or off-board square yields no moves.
    pub fn legal_moves_from(&self, board: &Board, from: Square) -> Vec<Move> {
        let mut out = Vec::new();
        self.legal_moves_from_into(board, from, &mut out);
        out
    }

    /// Generate all moves for `side`, scanning the board column by column.
    pub fn legal_moves_for(&self, board: &Board, side: Side) -> Vec<Move> {
        let mut out = Vec::with_capacity(16);
        for sq in Board::squares() {
            if board.get(sq) == Some(Cell::Piece(side)) {
                self.legal_moves_from_into(board, sq, &mut out);
            }
        }
        out
    }

    fn legal_moves_from_into(&self, board: &Board, from: Square, out: &mut Vec<Move>) {
        let side = match board.get(from).and_then(Cell::side) {
            Some(s) => s,
            None => return,
        };

        for &dir in self.directions(side) {
            let next = from.step(dir);
            match board.get(next) {
                Some(Cell::Empty) => out.push(Move::step(from, next)),
                Some(Cell::Piece(p)) if p != side => {
                    let landing = next.step(dir);
                    if board.get(landing) != Some(Cell::Empty) {
                        continue;
                    }
                    let jump = Move::new(from, vec![landing]);
                    out.extend(self.extend_jump(board, jump, side));
                }
                // own piece or off the board
                _ => {}
            }
        }
    }

    /// Breadth-first expansion of a single validated jump into every maximal
    /// capture chain that starts with it.
    ///
    /// Pieces jumped earlier in the chain stay on the board while extending.
    /// Men only move forward, so a chain can never come back across them.
    fn extend_jump(&self, board: &Board, jump: Move, side: Side) -> Vec<Move> {
        let mut finished = Vec::new();
        let mut queue = VecDeque::from([jump]);

        while let Some(chain) = queue.pop_front() {
            let mut extended = false;
            for &dir in self.directions(side) {
                if let Some(longer) = try_extend_jump(board, &chain, side, dir) {
                    queue.push_back(longer);
                    extended = true;
                }
            }
            if !extended {
                finished.push(chain);
            }
        }
        finished
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}

fn try_extend_jump(board: &Board, chain: &Move, side: Side, dir: Direction) -> Option<Move> {
    let last = chain.destination()?;
    let over = last.step(dir);
    if board.get(over) != Some(Cell::Piece(side.other())) {
        return None;
    }
    let landing = over.step(dir);
    if board.get(landing) != Some(Cell::Empty) {
        return None;
    }
    let mut longer = chain.clone();
    longer.landings.push(landing);
    Some(longer)
}

/// Squares of the pieces removed by `mv`, in the order they are jumped.
///
/// Only geometry matters: every hop spanning two diagonal cells captures
/// its midpoint.
pub fn captures(mv: &Move) -> Vec<Square> {
    let mut out = Vec::new();
    let mut cur = mv.start;
    for &next in &mv.landings {
        if cur.distance(next) == 4 {
            out.push(cur.midpoint(next));
        }
        cur = next;
    }
    out
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
