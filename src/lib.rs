//! Gomoku engine with a depth-limited minimax computer opponent
//!
//! A human plays against the computer on a square board (19x19 by
//! default). The first side to line up five or more stones wins; a full
//! board without a five is a draw.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and scoped speculative placement
//! - [`rules`]: Win and draw detection, optional Renju restrictions
//! - [`eval`]: Five-cell window scoring and whole-board evaluation
//! - [`search`]: Candidate generation and minimax with alpha-beta pruning
//! - [`engine`]: Main AI engine choosing the computer's move
//! - [`game`]: Turn-based controller owning the board
//! - [`ui`]: Desktop front-end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{check_win, choose_move, create_board, place, Side};
//!
//! let mut board = create_board(19).unwrap();
//! place(&mut board, 9, 9, Side::Human).unwrap();
//!
//! // The computer answers next to the human stone
//! let reply = choose_move(&mut board).unwrap();
//! place(&mut board, reply.x.into(), reply.y.into(), Side::Computer).unwrap();
//! assert!(!check_win(&board, reply.x.into(), reply.y.into(), Side::Computer));
//! ```
//!
//! # Search
//!
//! The computer's move comes from a two-stage search:
//! 1. Every candidate is scored by one computer stone and the static
//!    evaluation; the best 10 are kept
//! 2. Each survivor gets a depth-2 minimax search with alpha-beta pruning

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Side, Stone, BOARD_SIZE};
pub use config::{GameConfig, SearchConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{GameError, Result};
pub use game::Game;
pub use rules::{Outcome, RuleSet};

/// Create an empty board of side `size`.
///
/// # Errors
///
/// `InvalidBoardSize` when `size` is outside 5..=25.
pub fn create_board(size: usize) -> Result<Board> {
    Board::with_size(size)
}

/// Place a stone for `side` at column `x`, row `y`.
///
/// # Errors
///
/// `OutOfRange` or `Occupied`; the board is unchanged on error.
pub fn place(board: &mut Board, x: i32, y: i32, side: Side) -> Result<()> {
    let pos = board.pos(x, y)?;
    board.place(pos, side)
}

/// True if the `side` stone at `(x, y)` is part of five or more in a row.
///
/// Coordinates off the board, or a cell not holding a `side` stone, give
/// `false`.
pub fn check_win(board: &Board, x: i32, y: i32, side: Side) -> bool {
    match board.pos(x, y) {
        Ok(pos) if board.get(pos) == side.stone() => rules::check_win(board, pos, side),
        _ => false,
    }
}

/// True when no empty cell remains
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Choose the computer's move with the default search settings.
///
/// Returns `None` when the board is full. The board is unchanged on return.
pub fn choose_move(board: &mut Board) -> Option<Pos> {
    AIEngine::new().choose_move(board)
}
