//! Game rules for Gomoku
//!
//! This module implements:
//! - Win conditions (five or more in a row, draw on a full board)
//! - Optional Renju restrictions on the human player

pub mod forbidden;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{forbidden_kind, is_allowed, validate_move, ForbiddenKind, RuleSet};
pub use win::{
    check_win, find_five_line, has_five_anywhere, outcome_after, run_length, Outcome,
};
