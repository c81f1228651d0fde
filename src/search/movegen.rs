//! Candidate move generation
//!
//! Only empty cells within two steps (Chebyshev distance) of an existing
//! stone are considered. This bounds the branching factor of the search.

use crate::board::{Board, Pos, Side};
use crate::rules::{is_allowed, RuleSet};

/// Neighborhood radius around each stone
pub const NEIGHBOR_RADIUS: i32 = 2;

/// Generate candidate moves near existing stones.
///
/// Stones are visited in row-major order and each neighborhood row by row,
/// so the output order is deterministic for a given board. Duplicates keep
/// their first position. An empty board yields only the center; a full
/// board yields nothing.
#[must_use]
pub fn generate_candidates(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let size = board.size();
    let mut moves = Vec::with_capacity(64);
    let mut seen = vec![false; size * size];

    for stone in board.stones() {
        for dy in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
            for dx in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
                let x = i32::from(stone.x) + dx;
                let y = i32::from(stone.y) + dy;
                if !board.contains(x, y) {
                    continue;
                }

                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                let pos = Pos::new(x as u8, y as u8);
                let idx = pos.to_index(size);
                if seen[idx] {
                    continue;
                }
                seen[idx] = true;

                if board.is_empty(pos) {
                    moves.push(pos);
                }
            }
        }
    }

    moves
}

/// Candidates for `side`, dropping moves the rule set forbids
#[must_use]
pub fn generate_legal_candidates(board: &Board, side: Side, rules: RuleSet) -> Vec<Pos> {
    let mut moves = generate_candidates(board);
    if rules == RuleSet::Renju && side == Side::Human {
        moves.retain(|&pos| is_allowed(board, pos, side, rules));
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_center() {
        assert_eq!(generate_candidates(&Board::new()), vec![Pos::new(9, 9)]);
        let small = Board::with_size(7).unwrap();
        assert_eq!(generate_candidates(&small), vec![Pos::new(3, 3)]);
    }

    #[test]
    fn test_single_stone_neighborhood() {
        let mut board = Board::new();
        board.place(Pos::new(9, 9), Side::Human).unwrap();
        let moves = generate_candidates(&board);
        assert_eq!(moves.len(), 24);
        assert!(!moves.contains(&Pos::new(9, 9)));
        assert!(moves.iter().all(|p| (p.x as i32 - 9).abs() <= 2 && (p.y as i32 - 9).abs() <= 2));
        // Row-major within the neighborhood
        assert_eq!(moves[0], Pos::new(7, 7));
        assert_eq!(moves[23], Pos::new(11, 11));
    }

    #[test]
    fn test_corner_clipped() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), Side::Computer).unwrap();
        let moves = generate_candidates(&board);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_overlapping_neighborhoods_deduplicated() {
        let mut board = Board::new();
        board.place(Pos::new(9, 9), Side::Human).unwrap();
        board.place(Pos::new(10, 9), Side::Computer).unwrap();
        let moves = generate_candidates(&board);
        // 6x5 block minus the two stones
        assert_eq!(moves.len(), 28);

        let mut sorted = moves.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), moves.len());
    }

    #[test]
    fn test_deterministic_order() {
        let mut board = Board::new();
        for (x, y) in [(3, 3), (12, 4), (5, 16)] {
            board.place(Pos::new(x, y), Side::Human).unwrap();
        }
        assert_eq!(generate_candidates(&board), generate_candidates(&board.clone()));
    }

    #[test]
    fn test_full_board_none() {
        let mut board = Board::with_size(5).unwrap();
        for y in 0..5u8 {
            for x in 0..5u8 {
                board.place(Pos::new(x, y), Side::Computer).unwrap();
            }
        }
        assert!(generate_candidates(&board).is_empty());
    }

    #[test]
    fn test_renju_filters_human_only() {
        let mut board = Board::new();
        for (x, y) in [(8, 9), (10, 9), (9, 8), (9, 10)] {
            board.place(Pos::new(x, y), Side::Human).unwrap();
        }
        let human = generate_legal_candidates(&board, Side::Human, RuleSet::Renju);
        assert!(!human.contains(&Pos::new(9, 9)));
        let computer = generate_legal_candidates(&board, Side::Computer, RuleSet::Renju);
        assert!(computer.contains(&Pos::new(9, 9)));
        let free = generate_legal_candidates(&board, Side::Human, RuleSet::Freestyle);
        assert_eq!(free, generate_candidates(&board));
    }
}
