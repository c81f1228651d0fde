//! Error types for board and game operations

use thiserror::Error;

use crate::rules::ForbiddenKind;

/// Errors raised when a placement or game action is rejected.
///
/// Every variant is returned before the board is touched, so a failed call
/// never leaves a partially applied move behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("({x}, {y}) is outside the {size}x{size} board")]
    OutOfRange { x: i32, y: i32, size: usize },
    #[error("({x}, {y}) is already occupied")]
    Occupied { x: u8, y: u8 },
    #[error("({x}, {y}) is forbidden: {kind}")]
    Forbidden { x: u8, y: u8, kind: ForbiddenKind },
    #[error("board size {0} is out of range (5-25)")]
    InvalidBoardSize(usize),
    #[error("the game is already over")]
    GameOver,
    #[error("it is not this side's turn")]
    NotYourTurn,
}

impl GameError {
    /// True for the rejections a UI reports as an invalid click.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            GameError::OutOfRange { .. } | GameError::Occupied { .. } | GameError::Forbidden { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
