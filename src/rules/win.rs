//! Win and draw detection
//!
//! Win detection is local to the last placed stone: only the four lines
//! through it are scanned. Five or more in a row wins.

use crate::board::{Board, Pos, Side, DIRECTIONS};

/// Game outcome, derived after every placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    HumanWin,
    ComputerWin,
    Draw,
}

impl Outcome {
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::Human => Outcome::HumanWin,
            Side::Computer => Outcome::ComputerWin,
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::HumanWin => Some(Side::Human),
            Outcome::ComputerWin => Some(Side::Computer),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

/// Count `side` stones starting one step from `pos` along `(dx, dy)`
#[inline]
fn count_direction(board: &Board, pos: Pos, side: Side, dx: i32, dy: i32) -> i32 {
    let stone = side.stone();
    let mut count = 0;
    let mut n = 1;
    while let Some(next) = pos.offset(dx, dy, n, board.size()) {
        if board.get(next) != stone {
            break;
        }
        count += 1;
        n += 1;
    }
    count
}

/// Length of the `side` run through `pos` along one direction pair,
/// counting `pos` itself
#[inline]
pub fn run_length(board: &Board, pos: Pos, side: Side, dx: i32, dy: i32) -> i32 {
    1 + count_direction(board, pos, side, dx, dy) + count_direction(board, pos, side, -dx, -dy)
}

/// True if the stone at `pos` completes five or more in a row for `side`.
///
/// Call right after placing at `pos`; no allocation, four directions only.
#[inline]
pub fn check_win(board: &Board, pos: Pos, side: Side) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dx, dy)| run_length(board, pos, side, dx, dy) >= 5)
}

/// The first five stones of the winning run through `pos`, for highlighting
pub fn find_five_line(board: &Board, pos: Pos, side: Side) -> Option<[Pos; 5]> {
    for &(dx, dy) in &DIRECTIONS {
        let back = count_direction(board, pos, side, -dx, -dy);
        let forward = count_direction(board, pos, side, dx, dy);
        if 1 + back + forward < 5 {
            continue;
        }
        let start = pos.offset(-dx, -dy, back, board.size())?;
        let mut line = [start; 5];
        for (i, cell) in line.iter_mut().enumerate() {
            *cell = start.offset(dx, dy, i as i32, board.size())?;
        }
        return Some(line);
    }
    None
}

/// Full-board scan for any five of `side`. Slow; not for the search.
pub fn has_five_anywhere(board: &Board, side: Side) -> bool {
    board
        .stones()
        .filter(|&pos| board.get(pos) == side.stone())
        .any(|pos| check_win(board, pos, side))
}

/// Outcome after `side` has just played `pos`
pub fn outcome_after(board: &Board, pos: Pos, side: Side) -> Outcome {
    if check_win(board, pos, side) {
        Outcome::win_for(side)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn place_line(board: &mut Board, start: Pos, (dx, dy): (i32, i32), len: i32, side: Side) {
        for n in 0..len {
            let pos = start.offset(dx, dy, n, board.size()).unwrap();
            board.place(pos, side).unwrap();
        }
    }

    #[test]
    fn test_five_horizontal() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(0, 9), (1, 0), 5, Side::Human);
        assert!(check_win(&board, Pos::new(2, 9), Side::Human));
        assert!(!check_win(&board, Pos::new(2, 9), Side::Computer));
    }

    #[test]
    fn test_five_vertical() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(9, 0), (0, 1), 5, Side::Computer);
        assert!(check_win(&board, Pos::new(9, 4), Side::Computer));
    }

    #[test]
    fn test_five_diagonals() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(0, 0), (1, 1), 5, Side::Human);
        assert!(check_win(&board, Pos::new(0, 0), Side::Human));

        let mut board = Board::new();
        place_line(&mut board, Pos::new(4, 8), (1, -1), 5, Side::Computer);
        assert!(check_win(&board, Pos::new(6, 6), Side::Computer));
    }

    #[test]
    fn test_four_not_win() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(3, 3), (1, 0), 4, Side::Human);
        for x in 3..7 {
            assert!(!check_win(&board, Pos::new(x, 3), Side::Human));
        }
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut board = Board::new();
        for x in [2, 3, 5, 6, 7] {
            board.place(Pos::new(x, 10), Side::Human).unwrap();
        }
        assert!(!check_win(&board, Pos::new(5, 10), Side::Human));
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(0, 0), (0, 1), 3, Side::Human);
        board.place(Pos::new(0, 3), Side::Computer).unwrap();
        place_line(&mut board, Pos::new(0, 4), (0, 1), 2, Side::Human);
        assert!(!check_win(&board, Pos::new(0, 2), Side::Human));
    }

    #[test]
    fn test_overline_wins() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(5, 5), (1, 0), 6, Side::Computer);
        assert!(check_win(&board, Pos::new(7, 5), Side::Computer));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(14, 14), (1, 1), 5, Side::Human);
        assert!(check_win(&board, Pos::new(18, 18), Side::Human));
        assert!(has_five_anywhere(&board, Side::Human));
        assert!(!has_five_anywhere(&board, Side::Computer));
    }

    #[test]
    fn test_find_five_line() {
        let mut board = Board::new();
        place_line(&mut board, Pos::new(6, 4), (1, -1), 5, Side::Human);
        let line = find_five_line(&board, Pos::new(10, 0), Side::Human).unwrap();
        assert_eq!(line[0], Pos::new(6, 4));
        assert_eq!(line[4], Pos::new(10, 0));
        assert!(line.contains(&Pos::new(8, 2)));

        board.unplace(Pos::new(9, 1));
        assert!(find_five_line(&board, Pos::new(10, 0), Side::Human).is_none());
    }

    #[test]
    fn test_outcome_after() {
        let mut board = Board::with_size(5).unwrap();
        place_line(&mut board, Pos::new(0, 0), (1, 0), 4, Side::Human);
        assert_eq!(outcome_after(&board, Pos::new(3, 0), Side::Human), Outcome::InProgress);
        board.place(Pos::new(4, 0), Side::Human).unwrap();
        assert_eq!(outcome_after(&board, Pos::new(4, 0), Side::Human), Outcome::HumanWin);
        assert_eq!(Outcome::HumanWin.winner(), Some(Side::Human));
        assert!(Outcome::Draw.is_over());
        assert!(!Outcome::InProgress.is_over());
    }

    proptest! {
        /// A placed stone wins iff some direction holds a run of five through it.
        #[test]
        fn prop_check_win_matches_run_length(
            dir in 0usize..4,
            len in 1i32..8,
            offset in 0i32..8,
            ox in 4u8..11,
            oy in 4u8..11,
        ) {
            let (dx, dy) = DIRECTIONS[dir];
            let mut board = Board::new();
            let start = Pos::new(ox, oy);
            let mut placed = Vec::new();
            for n in 0..len {
                if let Some(pos) = start.offset(dx, dy, n, board.size()) {
                    board.place(pos, Side::Human).unwrap();
                    placed.push(pos);
                }
            }
            let probe = placed[(offset as usize) % placed.len()];
            prop_assert_eq!(check_win(&board, probe, Side::Human), placed.len() >= 5);
            prop_assert!(!check_win(&board, probe, Side::Computer));
        }
    }
}
