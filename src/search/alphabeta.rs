//! Minimax search with alpha-beta pruning
//!
//! The root works in two stages:
//!
//! 1. **Pre-ordering**: every candidate is tried with one computer stone and
//!    scored by the static evaluation. Candidates are sorted best-first and
//!    only the top `root_breadth` survive.
//! 2. **Minimax**: each survivor is searched `depth` plies deep (human reply
//!    first) and the highest-scoring one wins. Ties keep the earlier,
//!    better pre-ordered candidate.
//!
//! Below the root every generated candidate is searched; alpha-beta is the
//! only pruning. All lookahead goes through [`Board::speculate`], so the
//! board is restored on every exit path.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Side};
//! use gomoku::search::{generate_candidates, Searcher};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(9, 9), Side::Human).unwrap();
//! let candidates = generate_candidates(&board);
//!
//! let mut searcher = Searcher::default();
//! let result = searcher.search(&mut board, &candidates);
//! assert!(result.best_move.is_some());
//! assert_eq!(board.stone_count(), 1);
//! ```

use crate::board::{Board, Pos, Side};
use crate::config::SearchConfig;
use crate::eval::{evaluate, PatternScore};
use crate::rules::RuleSet;

use super::movegen::generate_legal_candidates;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Minimax nodes visited (root children included)
    pub nodes: u64,
    /// Sibling loops cut short by `beta <= alpha`
    pub cutoffs: u64,
    /// Root candidates that received a minimax search
    pub searched_roots: usize,
}

/// Result of a root search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any candidate was searched
    pub best_move: Option<Pos>,
    /// Minimax score of the best move
    pub score: i32,
    /// Candidates after pre-ordering, best first, with their static scores
    pub ordered: Vec<(Pos, i32)>,
    pub stats: SearchStats,
}

/// Depth-limited minimax searcher for the computer side
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
    rules: RuleSet,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(config: SearchConfig, rules: RuleSet) -> Self {
        Self {
            config,
            rules,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Pick the computer's move among `candidates`.
    ///
    /// The board is borrowed mutably for lookahead but is identical to its
    /// input state when this returns.
    pub fn search(&mut self, board: &mut Board, candidates: &[Pos]) -> SearchResult {
        self.stats = SearchStats::default();

        let mut ordered = self.pre_order(board, candidates);
        ordered.truncate(self.config.root_breadth);

        let mut best: Option<(Pos, i32)> = None;
        for &(mov, _) in &ordered {
            // Moves that cannot beat the current best are cut early; their
            // returned bound is never above it, so the choice is unchanged.
            let alpha = best.map_or(i32::MIN, |(_, score)| score);
            let score = {
                let mut child = board.speculate(mov, Side::Computer);
                self.minimax(&mut child, self.config.depth, alpha, i32::MAX, false)
            };
            self.stats.searched_roots += 1;

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mov, score));
            }
        }

        SearchResult {
            best_move: best.map(|(mov, _)| mov),
            score: best.map_or(0, |(_, score)| score),
            ordered,
            stats: self.stats,
        }
    }

    /// Score each candidate by one computer stone and static evaluation,
    /// best first. The sort is stable, so equal scores keep generator order.
    fn pre_order(&self, board: &mut Board, candidates: &[Pos]) -> Vec<(Pos, i32)> {
        let mut scored: Vec<(Pos, i32)> = candidates
            .iter()
            .map(|&mov| {
                let child = board.speculate(mov, Side::Computer);
                (mov, evaluate(&child))
            })
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored
    }

    /// Minimax with alpha-beta. The computer maximizes, the human minimizes.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        let score = evaluate(board);
        if depth == 0 || score.abs() >= PatternScore::FIVE {
            return score;
        }

        let side = if maximizing { Side::Computer } else { Side::Human };
        let moves = generate_legal_candidates(board, side, self.rules);
        if moves.is_empty() {
            return 0;
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for mov in moves {
                let eval = {
                    let mut child = board.speculate(mov, side);
                    self.minimax(&mut child, depth - 1, alpha, beta, false)
                };
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for mov in moves {
                let eval = {
                    let mut child = board.speculate(mov, side);
                    self.minimax(&mut child, depth - 1, alpha, beta, true)
                };
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            min_eval
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::generate_candidates;

    fn board_with(human: &[(u8, u8)], computer: &[(u8, u8)]) -> Board {
        let mut board = Board::new();
        for &(x, y) in human {
            board.place(Pos::new(x, y), Side::Human).unwrap();
        }
        for &(x, y) in computer {
            board.place(Pos::new(x, y), Side::Computer).unwrap();
        }
        board
    }

    fn run(board: &mut Board) -> SearchResult {
        let candidates = generate_candidates(board);
        Searcher::default().search(board, &candidates)
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut board = board_with(&[], &[(5, 5), (5, 6), (5, 7), (5, 8)]);
        let result = run(&mut board);
        let best = result.best_move.unwrap();
        assert!(best == Pos::new(5, 4) || best == Pos::new(5, 9), "got {best}");
        assert!(result.score >= PatternScore::FIVE);
    }

    #[test]
    fn test_search_blocks_open_four() {
        let mut board = board_with(&[(3, 3), (3, 4), (3, 5), (3, 6)], &[]);
        let result = run(&mut board);
        let best = result.best_move.unwrap();
        assert!(best == Pos::new(3, 2) || best == Pos::new(3, 7), "got {best}");
    }

    #[test]
    fn test_search_blocks_closed_four() {
        // One end already capped: the single remaining cell must be taken
        let mut board = board_with(&[(3, 10), (4, 10), (5, 10), (6, 10)], &[(2, 10)]);
        let result = run(&mut board);
        assert_eq!(result.best_move, Some(Pos::new(7, 10)));
    }

    #[test]
    fn test_search_leaves_board_unchanged() {
        let mut board = board_with(&[(9, 9), (10, 10), (8, 11)], &[(9, 10), (10, 9)]);
        let before = board.clone();
        let _ = run(&mut board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_pre_order_sorted_and_truncated() {
        let mut board = board_with(&[(9, 9), (9, 10)], &[(10, 9)]);
        let result = run(&mut board);
        assert_eq!(result.ordered.len(), 10);
        assert!(result.ordered.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(result.stats.searched_roots, 10);
        assert!(result.stats.nodes > 10);
    }

    #[test]
    fn test_best_move_among_top_candidates() {
        let mut board = board_with(&[(9, 9), (8, 8)], &[(10, 10)]);
        let result = run(&mut board);
        let best = result.best_move.unwrap();
        assert!(result.ordered.iter().any(|&(p, _)| p == best));
    }

    #[test]
    fn test_zero_breadth_yields_no_move() {
        let mut board = board_with(&[(9, 9)], &[]);
        let candidates = generate_candidates(&board);
        let mut searcher = Searcher::new(
            SearchConfig {
                depth: 2,
                root_breadth: 0,
            },
            RuleSet::Freestyle,
        );
        let result = searcher.search(&mut board, &candidates);
        assert!(result.best_move.is_none());
        assert_eq!(result.stats.nodes, 0);
    }

    #[test]
    fn test_depth_zero_uses_static_order() {
        // With no lookahead the minimax score equals the pre-order score
        let mut board = board_with(&[(9, 9), (10, 9)], &[(8, 9)]);
        let candidates = generate_candidates(&board);
        let mut searcher = Searcher::new(
            SearchConfig {
                depth: 0,
                root_breadth: 10,
            },
            RuleSet::Freestyle,
        );
        let result = searcher.search(&mut board, &candidates);
        assert_eq!(result.best_move, Some(result.ordered[0].0));
        assert_eq!(result.score, result.ordered[0].1);
    }

    #[test]
    fn test_alpha_beta_prunes() {
        let mut board = board_with(&[(9, 9), (9, 10), (11, 9)], &[(10, 9), (10, 10)]);
        let result = run(&mut board);
        assert!(result.stats.cutoffs > 0);
    }
}
