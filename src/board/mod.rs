//! Board representation for Gomoku

pub mod bitboard;
pub mod board;
pub mod scoped;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use scoped::Speculation;

/// Standard board size (19x19)
pub const BOARD_SIZE: usize = 19;
/// Smallest board that still fits a five-cell window
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest supported board; keeps whole-board scores inside `i32`
pub const MAX_BOARD_SIZE: usize = 25;

/// The four line directions as (dx, dy): horizontal, vertical, both diagonals
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Human,
    Computer,
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Side::Human => Stone::Human,
            Side::Computer => Stone::Computer,
        }
    }
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        side.stone()
    }
}

impl Stone {
    /// The player owning this stone, `None` for an empty cell
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Stone::Empty => None,
            Stone::Human => Some(Side::Human),
            Stone::Computer => Some(Side::Computer),
        }
    }
}

/// Position on the board, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Row-major cell index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.y as usize * size + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            x: (idx % size) as u8,
            y: (idx / size) as u8,
        }
    }

    /// Step `n` cells along `(dx, dy)`, `None` when leaving a board of `size`
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, n: i32, size: usize) -> Option<Pos> {
        let x = self.x as i32 + dx * n;
        let y = self.y as i32 + dy * n;
        if x >= 0 && y >= 0 && (x as usize) < size && (y as usize) < size {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}
