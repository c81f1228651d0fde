//! Pattern scores for Gomoku evaluation
//!
//! Scores are from the computer's point of view. Blocking the human is
//! weighted above attacking at the four and open-three tiers; keep the
//! asymmetry when tuning.

use crate::board::Stone;

/// Window scores, positive favors the computer
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - decided game
    pub const FIVE: i32 = 1_000_000;

    /// Human four with the fifth cell open (must block)
    pub const BLOCK_FOUR: i32 = 100_000;
    /// Computer four with the fifth cell open
    pub const FOUR: i32 = 50_000;

    /// Human three with both window ends open
    pub const BLOCK_OPEN_THREE: i32 = 10_000;
    /// Computer three with both window ends open
    pub const OPEN_THREE: i32 = 5_000;

    /// Three in a window whose ends are not both open
    pub const THREE: i32 = 100;
    /// Two stones and three empties
    pub const TWO: i32 = 10;
}

/// Stones counted in one five-cell window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCounts {
    pub computer: u8,
    pub human: u8,
    pub empty: u8,
}

impl WindowCounts {
    pub fn of(window: &[Stone; 5]) -> Self {
        let mut counts = Self::default();
        for stone in window {
            match stone {
                Stone::Computer => counts.computer += 1,
                Stone::Human => counts.human += 1,
                Stone::Empty => counts.empty += 1,
            }
        }
        counts
    }
}

/// Score a single window. Rules are checked in order; the first match wins.
#[must_use]
pub fn score_window(window: &[Stone; 5]) -> i32 {
    let WindowCounts {
        computer: ai,
        human: player,
        empty,
    } = WindowCounts::of(window);
    let ends_open = window[0] == Stone::Empty && window[4] == Stone::Empty;

    if ai > 0 && player > 0 {
        return 0;
    }

    match (ai, player, empty) {
        (5, _, _) => PatternScore::FIVE,
        (_, 5, _) => -PatternScore::FIVE,
        (_, 4, 1) => -PatternScore::BLOCK_FOUR,
        (4, _, 1) => PatternScore::FOUR,
        (_, 3, 2) if ends_open => -PatternScore::BLOCK_OPEN_THREE,
        (3, _, 2) if ends_open => PatternScore::OPEN_THREE,
        (_, 3, 2) => -PatternScore::THREE,
        (3, _, 2) => PatternScore::THREE,
        (_, 2, 3) => -PatternScore::TWO,
        (2, _, 3) => PatternScore::TWO,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Stone::{Computer as C, Empty as E, Human as H};

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::BLOCK_FOUR);
        assert!(PatternScore::BLOCK_FOUR > PatternScore::FOUR);
        assert!(PatternScore::FOUR > PatternScore::BLOCK_OPEN_THREE);
        assert!(PatternScore::BLOCK_OPEN_THREE > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::THREE);
        assert!(PatternScore::THREE > PatternScore::TWO);
    }

    #[test]
    fn test_counts() {
        let counts = WindowCounts::of(&[C, E, H, C, E]);
        assert_eq!(
            counts,
            WindowCounts {
                computer: 2,
                human: 1,
                empty: 2
            }
        );
    }

    #[test]
    fn test_mixed_windows_score_zero() {
        assert_eq!(score_window(&[C, C, C, C, H]), 0);
        assert_eq!(score_window(&[H, H, H, H, C]), 0);
        assert_eq!(score_window(&[C, H, E, E, E]), 0);
        assert_eq!(score_window(&[H, C, H, C, H]), 0);
    }

    #[test]
    fn test_fives() {
        assert_eq!(score_window(&[C; 5]), 1_000_000);
        assert_eq!(score_window(&[H; 5]), -1_000_000);
    }

    #[test]
    fn test_fours() {
        assert_eq!(score_window(&[H, H, E, H, H]), -100_000);
        assert_eq!(score_window(&[C, C, C, C, E]), 50_000);
    }

    #[test]
    fn test_open_and_closed_threes() {
        assert_eq!(score_window(&[E, H, H, H, E]), -10_000);
        assert_eq!(score_window(&[E, C, C, C, E]), 5_000);
        // One window end occupied: closed three
        assert_eq!(score_window(&[H, H, H, E, E]), -100);
        assert_eq!(score_window(&[E, C, E, C, C]), 100);
    }

    #[test]
    fn test_twos_and_singles() {
        assert_eq!(score_window(&[H, E, E, H, E]), -10);
        assert_eq!(score_window(&[E, E, C, C, E]), 10);
        assert_eq!(score_window(&[E, E, C, E, E]), 0);
        assert_eq!(score_window(&[E; 5]), 0);
    }

    #[test]
    fn test_magnitude_ordering_both_sides() {
        let four_h = score_window(&[H, H, H, H, E]).abs();
        let three_h = score_window(&[H, H, H, E, E]).abs();
        let two_h = score_window(&[H, H, E, E, E]).abs();
        assert!(four_h > three_h && three_h > two_h);

        let four_c = score_window(&[C, C, C, C, E]).abs();
        let three_c = score_window(&[C, C, C, E, E]).abs();
        let two_c = score_window(&[C, C, E, E, E]).abs();
        assert!(four_c > three_c && three_c > two_c);

        // Open threes keep the ordering too
        assert!(four_h > score_window(&[E, H, H, H, E]).abs());
        assert!(four_c > score_window(&[E, C, C, C, E]).abs());
    }
}
