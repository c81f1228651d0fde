//! Engine and game configuration

use std::time::Duration;

use crate::board::BOARD_SIZE;
use crate::rules::RuleSet;

/// Search depth below each root candidate (one human and one computer reply)
pub const DEFAULT_SEARCH_DEPTH: u8 = 2;
/// Root candidates kept after heuristic pre-ordering
pub const DEFAULT_ROOT_BREADTH: usize = 10;
/// Pause before the computer answers, so the reply does not look instant
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(100);

/// Search limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below each root candidate
    pub depth: u8,
    /// Root candidates that get a full minimax search
    pub root_breadth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            root_breadth: DEFAULT_ROOT_BREADTH,
        }
    }
}

/// Everything needed to start a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub rules: RuleSet,
    pub search: SearchConfig,
    /// UI-only delay before the computer's search starts
    pub think_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            rules: RuleSet::default(),
            search: SearchConfig::default(),
            think_delay: DEFAULT_THINK_DELAY,
        }
    }
}
