use crate::types::*;

/// Fixed 8x8 grid of cells, stored row-major (`cells[y][x]`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cell at `sq`. Off-board squares read as `None`.
    pub fn get(&self, sq: Square) -> Option<Cell> {
        if !sq.is_on_board() {
            return None;
        }
        Some(self.cells[sq.y as usize][sq.x as usize])
    }

    /// Write the cell at `sq`.
    ///
    /// # Panics
    ///
    /// Panics if `sq` is off the board.
    pub fn set(&mut self, sq: Square, cell: Cell) {
        assert!(sq.is_on_board(), "square {sq:?} is off the board");
        self.cells[sq.y as usize][sq.x as usize] = cell;
    }

    /// Squares in column-major order: x outer, y inner.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| Square::new(x, y)))
    }

    pub fn count(&self, side: Side) -> i32 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Piece(side))
            .count() as i32
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE as usize]> {
        self.cells.iter()
    }
}
