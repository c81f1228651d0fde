//! AI engine choosing the computer's move
//!
//! The engine wraps the candidate generator and the minimax [`Searcher`]
//! behind one entry point. Moves are picked in this order:
//!
//! 1. **No candidates**: the board is full, nothing to play
//! 2. **Single candidate**: returned directly without searching (this also
//!    covers the empty-board opening, which always yields the center)
//! 3. **Minimax**: root pre-ordering, then depth-limited alpha-beta
//! 4. **Fallback**: the first candidate, if the search produced no move
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, SearchType, Side};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place(Pos::new(9, 9), Side::Human).unwrap();
//!
//! let result = engine.choose_move_with_stats(&mut board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! assert_eq!(result.search_type, SearchType::Minimax);
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Side};
use crate::config::SearchConfig;
use crate::rules::RuleSet;
use crate::search::{generate_legal_candidates, SearchResult, Searcher};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board: the center is the only candidate
    Opening,
    /// Exactly one legal candidate, returned without searching
    SingleCandidate,
    /// Regular minimax result
    Minimax,
    /// Search produced no move; first candidate returned, or nothing when
    /// the board has no candidates at all
    Fallback,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` only when no candidate exists
    pub best_move: Option<Pos>,
    /// Minimax score of the chosen move (0 for short-circuits)
    pub score: i32,
    /// Which path produced this move
    pub search_type: SearchType,
    /// Candidates generated at the root, before pre-ordering
    pub candidates: usize,
    /// Minimax nodes visited
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn short_circuit(best_move: Option<Pos>, search_type: SearchType, candidates: usize) -> Self {
        Self {
            best_move,
            score: 0,
            search_type,
            candidates,
            nodes: 0,
            time_ms: 0,
        }
    }

    #[inline]
    fn from_search(result: &SearchResult, candidates: usize, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::Minimax,
            candidates,
            nodes: result.stats.nodes,
            time_ms,
        }
    }
}

/// Main AI engine for Gomoku.
///
/// The engine always plays the computer side. It holds no board state
/// between calls; every call receives the board explicitly and leaves it
/// exactly as it found it.
///
/// # Configuration
///
/// - Search depth below each root candidate (default 2)
/// - Root breadth kept after pre-ordering (default 10)
/// - Rule set, which restricts the human replies considered under Renju
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, RuleSet, SearchConfig};
///
/// let config = SearchConfig { depth: 1, root_breadth: 5 };
/// let mut engine = AIEngine::with_config(config, RuleSet::Freestyle);
///
/// let mut board = Board::new();
/// assert_eq!(engine.choose_move(&mut board), Some(board.center()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    searcher: Searcher,
    rules: RuleSet,
}

impl AIEngine {
    /// Create an engine with default settings: depth 2, breadth 10,
    /// freestyle rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom search limits and rule set.
    ///
    /// # Arguments
    ///
    /// * `config` - Depth and root breadth
    /// * `rules` - Rule set the human replies are filtered by
    #[must_use]
    pub fn with_config(config: SearchConfig, rules: RuleSet) -> Self {
        Self {
            searcher: Searcher::new(config, rules),
            rules,
        }
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.searcher.config()
    }

    #[must_use]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Choose the computer's next move.
    ///
    /// This is a convenience method that returns only the move.
    /// Use [`choose_move_with_stats`](Self::choose_move_with_stats) for
    /// search statistics.
    ///
    /// # Returns
    ///
    /// The chosen empty cell, or `None` if the board has no candidates
    /// (it is full).
    pub fn choose_move(&mut self, board: &mut Board) -> Option<Pos> {
        self.choose_move_with_stats(board).best_move
    }

    /// Choose the computer's next move and report how it was found.
    ///
    /// The board is borrowed mutably for speculative placement; on return
    /// it is identical to its state on entry.
    pub fn choose_move_with_stats(&mut self, board: &mut Board) -> MoveResult {
        let start = Instant::now();

        let candidates = generate_legal_candidates(board, Side::Computer, self.rules);
        let count = candidates.len();

        match candidates.as_slice() {
            [] => {
                log::debug!("no candidates on a full board");
                return MoveResult::short_circuit(None, SearchType::Fallback, 0);
            }
            [only] => {
                let search_type = if board.is_board_empty() {
                    SearchType::Opening
                } else {
                    SearchType::SingleCandidate
                };
                log::debug!("{search_type:?}: playing {only} without search");
                return MoveResult::short_circuit(Some(*only), search_type, 1);
            }
            _ => {}
        }

        let result = self.searcher.search(board, &candidates);
        let time_ms = start.elapsed().as_millis() as u64;

        log::debug!(
            "searched {} of {} candidates: best {:?} score {} nodes {} cutoffs {} in {}ms",
            result.stats.searched_roots,
            count,
            result.best_move,
            result.score,
            result.stats.nodes,
            result.stats.cutoffs,
            time_ms,
        );

        if result.best_move.is_some() {
            return MoveResult::from_search(&result, count, time_ms);
        }

        // Only reachable with a zero root breadth
        log::warn!("search returned no move, falling back to first candidate");
        MoveResult {
            best_move: candidates.first().copied(),
            score: 0,
            search_type: SearchType::Fallback,
            candidates: count,
            nodes: result.stats.nodes,
            time_ms,
        }
    }
}
