//! Whole-board heuristic evaluation
//!
//! Every five-cell window in all four directions is scored with
//! [`score_window`] and the scores are summed. The result is from the
//! computer's perspective.

use crate::board::{Board, Stone};

use super::patterns::score_window;

/// Evaluate the board for the computer.
///
/// Returns a score where:
/// - Positive values favor the computer, negative values the human
/// - A magnitude of at least `PatternScore::FIVE` means a five is on the board
///
/// The function is pure and deterministic: the same board always yields
/// the same score.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let n = board.size();
    let mut total = 0;
    let mut window = [Stone::Empty; 5];

    for y in 0..n {
        for x in 0..n {
            // Horizontal
            if x + 5 <= n {
                for (i, cell) in window.iter_mut().enumerate() {
                    *cell = board.cell(x + i, y);
                }
                total += score_window(&window);
            }
            // Vertical
            if y + 5 <= n {
                for (i, cell) in window.iter_mut().enumerate() {
                    *cell = board.cell(x, y + i);
                }
                total += score_window(&window);
            }
            // Diagonal down-right
            if x + 5 <= n && y + 5 <= n {
                for (i, cell) in window.iter_mut().enumerate() {
                    *cell = board.cell(x + i, y + i);
                }
                total += score_window(&window);
            }
            // Diagonal up-right
            if x + 5 <= n && y >= 4 {
                for (i, cell) in window.iter_mut().enumerate() {
                    *cell = board.cell(x + i, y - i);
                }
                total += score_window(&window);
            }
        }
    }

    total
}

/// Number of windows [`evaluate`] scores on a board of side `n`
pub fn window_count(n: usize) -> usize {
    let span = n.saturating_sub(4);
    2 * n * span + 2 * span * span
}
