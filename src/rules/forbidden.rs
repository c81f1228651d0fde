//! Renju restrictions on the human (first) player
//!
//! Under `RuleSet::Renju` the human may not play:
//! - an overline (six or more in a row),
//! - a double four (fours in two or more directions at once),
//! - a double three (open threes in two or more directions at once).
//!
//! A move that makes exactly five is always allowed; the win takes
//! precedence. The computer is never restricted.

use std::fmt;

use crate::board::{Board, Pos, Side, Stone, DIRECTIONS};
use crate::error::{GameError, Result};

/// Which rule set governs legal placements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleSet {
    /// Any empty cell is legal, overlines win
    #[default]
    Freestyle,
    /// Human moves are checked for overline, double four and double three
    Renju,
}

/// Why a Renju placement was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForbiddenKind {
    Overline,
    DoubleFour,
    DoubleThree,
}

impl fmt::Display for ForbiddenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ForbiddenKind::Overline => "overline",
            ForbiddenKind::DoubleFour => "double four",
            ForbiddenKind::DoubleThree => "double three",
        };
        f.write_str(name)
    }
}

/// Cells examined on each side of the move
const REACH: i32 = 5;
const LINE_LEN: usize = (2 * REACH + 1) as usize;
const CENTER: usize = REACH as usize;

/// Cell seen from the moving side; edges and opponent stones both block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Own,
    Empty,
    Blocked,
}

type Line = [Cell; LINE_LEN];

/// The line through `pos` with the move already on it
fn line_through(board: &Board, pos: Pos, side: Side, dx: i32, dy: i32) -> Line {
    let mut line = [Cell::Blocked; LINE_LEN];
    for n in -REACH..=REACH {
        line[(n + REACH) as usize] = if n == 0 {
            Cell::Own
        } else {
            match pos.offset(dx, dy, n, board.size()).map(|p| board.get(p)) {
                Some(Stone::Empty) => Cell::Empty,
                Some(stone) if stone == side.stone() => Cell::Own,
                _ => Cell::Blocked,
            }
        };
    }
    line
}

/// Inclusive bounds of the run of own stones through the center
fn run_bounds(line: &Line) -> (usize, usize) {
    let mut start = CENTER;
    while start > 0 && line[start - 1] == Cell::Own {
        start -= 1;
    }
    let mut end = CENTER;
    while end + 1 < LINE_LEN && line[end + 1] == Cell::Own {
        end += 1;
    }
    (start, end)
}

fn run_len(line: &Line) -> usize {
    let (start, end) = run_bounds(line);
    end - start + 1
}

/// Lines obtainable by one more own stone on an empty cell
fn extensions(line: &Line) -> impl Iterator<Item = Line> + '_ {
    (0..LINE_LEN)
        .filter(|&i| line[i] == Cell::Empty)
        .map(|i| {
            let mut next = *line;
            next[i] = Cell::Own;
            next
        })
}

/// One more stone makes exactly five through the move
fn is_four(line: &Line) -> bool {
    extensions(line).any(|next| run_len(&next) == 5)
}

/// Four in a row through the move with both ends empty
fn is_straight_four(line: &Line) -> bool {
    let (start, end) = run_bounds(line);
    end - start + 1 == 4
        && start > 0
        && end + 1 < LINE_LEN
        && line[start - 1] == Cell::Empty
        && line[end + 1] == Cell::Empty
}

/// One more stone makes a straight four, and the line is not already a four
fn is_open_three(line: &Line) -> bool {
    !is_four(line) && extensions(line).any(|next| is_straight_four(&next))
}

/// Classify a prospective move on an empty cell, `None` when allowed
pub fn forbidden_kind(board: &Board, pos: Pos, side: Side) -> Option<ForbiddenKind> {
    let lines: Vec<Line> = DIRECTIONS
        .iter()
        .map(|&(dx, dy)| line_through(board, pos, side, dx, dy))
        .collect();

    if lines.iter().any(|line| run_len(line) == 5) {
        return None;
    }
    if lines.iter().any(|line| run_len(line) > 5) {
        return Some(ForbiddenKind::Overline);
    }
    if lines.iter().filter(|line| is_four(line)).count() >= 2 {
        return Some(ForbiddenKind::DoubleFour);
    }
    if lines.iter().filter(|line| is_open_three(line)).count() >= 2 {
        return Some(ForbiddenKind::DoubleThree);
    }
    None
}

/// True if `side` may play at the empty cell `pos` under `rules`
#[inline]
pub fn is_allowed(board: &Board, pos: Pos, side: Side, rules: RuleSet) -> bool {
    match (rules, side) {
        (RuleSet::Renju, Side::Human) => forbidden_kind(board, pos, side).is_none(),
        _ => true,
    }
}

/// Full placement check: range, occupancy, then the rule set.
pub fn validate_move(board: &Board, pos: Pos, side: Side, rules: RuleSet) -> Result<()> {
    let pos = board.pos(pos.x as i32, pos.y as i32)?;
    if !board.is_empty(pos) {
        return Err(GameError::Occupied { x: pos.x, y: pos.y });
    }
    if rules == RuleSet::Renju && side == Side::Human {
        if let Some(kind) = forbidden_kind(board, pos, side) {
            return Err(GameError::Forbidden {
                x: pos.x,
                y: pos.y,
                kind,
            });
        }
    }
    Ok(())
}
