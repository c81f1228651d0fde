//! Search module for the Gomoku AI
//!
//! Contains:
//! - Candidate generation around existing stones
//! - Minimax with alpha-beta pruning and root pre-ordering

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use movegen::{generate_candidates, generate_legal_candidates, NEIGHBOR_RADIUS};
