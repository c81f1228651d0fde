//! Evaluation module for Gomoku positions
//!
//! This module provides window scoring and the whole-board heuristic used
//! by the search. All scores are from the computer's perspective.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, window_count};
pub use patterns::{score_window, PatternScore, WindowCounts};
