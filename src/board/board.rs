//! Board structure with occupancy tracking

use super::bitboard::Bitboard;
use super::scoped::Speculation;
use super::{Pos, Side, Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GameError, Result};

/// Square game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cell contents
    cells: Vec<Stone>,
    /// Occupied cells, for iterating stones without a full scan
    occupied: Bitboard,
}

impl Board {
    /// Standard 19x19 board
    pub fn new() -> Self {
        Self::empty(BOARD_SIZE)
    }

    /// Board with a custom side length in `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`
    pub fn with_size(size: usize) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            occupied: Bitboard::with_cells(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether signed coordinates are on the board
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Validate signed coordinates into a position
    pub fn pos(&self, x: i32, y: i32) -> Result<Pos> {
        if self.contains(x, y) {
            Ok(Pos::new(x as u8, y as u8))
        } else {
            Err(GameError::OutOfRange {
                x,
                y,
                size: self.size,
            })
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index(self.size)]
    }

    /// Get stone at column `x`, row `y` (both must be on the board)
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Stone {
        self.cells[y * self.size + x]
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone after checking range and occupancy.
    ///
    /// The board is left untouched when an error is returned.
    pub fn place(&mut self, pos: Pos, side: Side) -> Result<()> {
        if !self.contains(pos.x as i32, pos.y as i32) {
            return Err(GameError::OutOfRange {
                x: pos.x as i32,
                y: pos.y as i32,
                size: self.size,
            });
        }
        if !self.is_empty(pos) {
            return Err(GameError::Occupied { x: pos.x, y: pos.y });
        }
        self.put(pos, side);
        Ok(())
    }

    /// Unchecked placement for positions already known to be empty
    #[inline]
    pub(crate) fn put(&mut self, pos: Pos, side: Side) {
        let idx = pos.to_index(self.size);
        debug_assert_eq!(self.cells[idx], Stone::Empty);
        self.cells[idx] = side.stone();
        self.occupied.set(idx);
    }

    /// Reset a cell to empty, for search rollback and move undo
    #[inline]
    pub fn unplace(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        self.cells[idx] = Stone::Empty;
        self.occupied.clear(idx);
    }

    /// Place a stone for the lifetime of the returned guard
    #[inline]
    pub fn speculate(&mut self, pos: Pos, side: Side) -> Speculation<'_> {
        Speculation::new(self, pos, side)
    }

    /// Clear every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = Stone::Empty);
        self.occupied.reset();
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.cells.len()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.occupied.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Occupied positions in row-major order
    pub fn stones(&self) -> impl Iterator<Item = Pos> + '_ {
        self.occupied
            .iter_ones()
            .map(move |idx| Pos::from_index(idx, self.size))
    }

    /// Center cell, the opening move on an empty board
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let c = match self.cell(x, y) {
                    Stone::Empty => '.',
                    Stone::Human => 'X',
                    Stone::Computer => 'O',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
