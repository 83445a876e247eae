use std::fmt;

/// Board edge length.
pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    One,
    Two,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
    pub fn from_char(c: char) -> Option<Side> {
        match c {
            '1' => Some(Side::One),
            '2' => Some(Side::Two),
            _ => None,
        }
    }
    pub fn to_char(self) -> char {
        match self {
            Side::One => '1',
            Side::Two => '2',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Side),
}
impl Cell {
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '0' => Some(Cell::Empty),
            _ => Side::from_char(c).map(Cell::Piece),
        }
    }
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Piece(side) => side.to_char(),
        }
    }
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Piece(side) => Some(side),
        }
    }
}

/// A unit diagonal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }
}

/// A board coordinate: `x` is the column, `y` the row (row 0 is the top row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub x: i8,
    pub y: i8,
}

impl Square {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    /// Manhattan distance. A diagonal step is 2, a diagonal jump is 4.
    pub fn distance(self, other: Square) -> u8 {
        ((self.x - other.x).unsigned_abs()) + ((self.y - other.y).unsigned_abs())
    }

    pub fn step(self, dir: Direction) -> Square {
        Square::new(self.x + dir.dx, self.y + dir.dy)
    }

    /// The cell halfway between two squares two diagonal cells apart.
    pub fn midpoint(self, other: Square) -> Square {
        Square::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }
}

impl fmt::Display for Square {
    /// Row first, then column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.y, self.x)
    }
}

/// A start square and the ordered squares the piece lands on.
///
/// A simple step has exactly one landing one diagonal cell away; a capture
/// chain lands two diagonal cells away on every hop.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub landings: Vec<Square>,
}

impl Move {
    pub fn new(start: Square, landings: Vec<Square>) -> Self {
        debug_assert!(!landings.is_empty(), "a move needs at least one landing");
        Self { start, landings }
    }

    pub fn step(start: Square, to: Square) -> Self {
        Self::new(start, vec![to])
    }

    pub fn destination(&self) -> Option<Square> {
        self.landings.last().copied()
    }

    pub fn is_capture(&self) -> bool {
        self.landings
            .first()
            .is_some_and(|&first| self.start.distance(first) == 4)
    }

    /// Loose identity used by the root search to skip re-scoring the
    /// previous best move: same start and same first landing. Two different
    /// chains that branch after the first jump compare equal here.
    pub fn shares_opening(&self, other: &Move) -> bool {
        self.start == other.start
            && matches!(
                (self.landings.first(), other.landings.first()),
                (Some(a), Some(b)) if a == b
            )
    }
}
