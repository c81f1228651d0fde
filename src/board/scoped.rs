//! Scoped speculative placement used by the search

use std::ops::{Deref, DerefMut};

use super::{Board, Pos, Side};

/// A stone placed for lookahead; removed again when the guard drops.
///
/// Every exit path of the code holding the guard (normal return, early
/// `break` on a cutoff, `?`) rolls the board back to its prior state.
pub struct Speculation<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> Speculation<'a> {
    pub(super) fn new(board: &'a mut Board, pos: Pos, side: Side) -> Self {
        board.put(pos, side);
        Self { board, pos }
    }

    /// The speculatively occupied position
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.unplace(self.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_guard_rolls_back() {
        let mut board = Board::new();
        let pos = Pos::new(4, 7);
        {
            let guard = board.speculate(pos, Side::Computer);
            assert_eq!(guard.get(pos), Stone::Computer);
            assert_eq!(guard.stone_count(), 1);
        }
        assert_eq!(board.get(pos), Stone::Empty);
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_nested_guards() {
        let mut board = Board::new();
        let before = board.clone();
        {
            let mut outer = board.speculate(Pos::new(9, 9), Side::Computer);
            {
                let inner = outer.speculate(Pos::new(9, 10), Side::Human);
                assert_eq!(inner.stone_count(), 2);
            }
            assert_eq!(outer.stone_count(), 1);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_guard_rolls_back_on_early_exit() {
        fn first_hit(board: &mut Board, cells: &[Pos]) -> Option<Pos> {
            for &pos in cells {
                let guard = board.speculate(pos, Side::Human);
                if guard.stone_count() == 1 {
                    return Some(guard.pos());
                }
            }
            None
        }

        let mut board = Board::new();
        let hit = first_hit(&mut board, &[Pos::new(1, 1), Pos::new(2, 2)]);
        assert_eq!(hit, Some(Pos::new(1, 1)));
        assert!(board.is_board_empty());
    }
}
