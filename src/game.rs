//! Turn-based game controller
//!
//! [`Game`] owns the board and enforces turn order, the rule set and the
//! end of the game. The human always moves first.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Game, GameConfig, Outcome, Pos};
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//! let mut engine = AIEngine::new();
//!
//! assert_eq!(game.play_human(Pos::new(9, 9)).unwrap(), Outcome::InProgress);
//! let reply = game.play_computer(&mut engine).unwrap();
//! assert!(reply.is_some());
//! assert_eq!(game.history().len(), 2);
//! ```

use crate::board::{Board, Pos, Side};
use crate::config::GameConfig;
use crate::engine::AIEngine;
use crate::error::{GameError, Result};
use crate::rules::{find_five_line, outcome_after, validate_move, Outcome, RuleSet};

/// A single game between the human and the computer
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rules: RuleSet,
    to_move: Side,
    outcome: Outcome,
    last_move: Option<Pos>,
    history: Vec<(Pos, Side)>,
}

impl Game {
    /// Start a game on an empty board of `config.board_size`.
    pub fn new(config: GameConfig) -> Result<Self> {
        let board = Board::with_size(config.board_size)?;
        log::info!(
            "new game on {0}x{0} board, {1:?} rules",
            config.board_size,
            config.rules
        );
        Ok(Self {
            board,
            rules: config.rules,
            to_move: Side::Human,
            outcome: Outcome::InProgress,
            last_move: None,
            history: Vec::new(),
        })
    }

    /// Clear the board and hand the first move back to the human.
    pub fn restart(&mut self) {
        self.board.clear();
        self.to_move = Side::Human;
        self.outcome = Outcome::InProgress;
        self.last_move = None;
        self.history.clear();
        log::info!("game restarted");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    #[inline]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[(Pos, Side)] {
        &self.history
    }

    /// Play the human's move at `pos`.
    ///
    /// # Errors
    ///
    /// - `GameOver` once the outcome is decided
    /// - `NotYourTurn` while the computer is to move
    /// - `OutOfRange`, `Occupied` or `Forbidden` for an illegal cell
    ///
    /// The board is unchanged on error.
    pub fn play_human(&mut self, pos: Pos) -> Result<Outcome> {
        self.check_turn(Side::Human)?;
        if let Err(err) = validate_move(&self.board, pos, Side::Human, self.rules) {
            log::warn!("rejected human move {pos}: {err}");
            return Err(err);
        }
        Ok(self.commit(pos, Side::Human))
    }

    /// Ask `engine` for the computer's move and play it.
    ///
    /// Returns the move played, or `None` when the board had no candidate,
    /// in which case the game ends as a draw.
    pub fn play_computer(&mut self, engine: &mut AIEngine) -> Result<Option<Pos>> {
        self.check_turn(Side::Computer)?;
        match engine.choose_move(&mut self.board) {
            Some(pos) => {
                self.apply_computer_move(pos)?;
                Ok(Some(pos))
            }
            None => {
                self.outcome = Outcome::Draw;
                log::info!("no move left for the computer: draw");
                Ok(None)
            }
        }
    }

    /// Play a computer move that was chosen elsewhere, such as on a
    /// helper thread against a clone of this board.
    pub fn apply_computer_move(&mut self, pos: Pos) -> Result<Outcome> {
        self.check_turn(Side::Computer)?;
        if let Err(err) = validate_move(&self.board, pos, Side::Computer, self.rules) {
            log::warn!("rejected computer move {pos}: {err}");
            return Err(err);
        }
        Ok(self.commit(pos, Side::Computer))
    }

    /// Take back the last human move together with the computer's reply.
    ///
    /// Returns the number of moves removed. A decided game is reopened.
    pub fn undo(&mut self) -> usize {
        let count = match self.history.last() {
            Some((_, Side::Computer)) if self.history.len() >= 2 => 2,
            Some(_) => 1,
            None => 0,
        };
        for _ in 0..count {
            if let Some((pos, _)) = self.history.pop() {
                self.board.unplace(pos);
            }
        }
        if count > 0 {
            self.to_move = Side::Human;
            self.outcome = Outcome::InProgress;
            self.last_move = self.history.last().map(|&(pos, _)| pos);
            log::debug!("undid {count} move(s)");
        }
        count
    }

    /// The five stones to highlight once a side has won
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        let winner = self.outcome.winner()?;
        let pos = self.last_move?;
        find_five_line(&self.board, pos, winner)
    }

    fn check_turn(&self, side: Side) -> Result<()> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver);
        }
        if self.to_move != side {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    /// Place a validated move and derive the outcome
    fn commit(&mut self, pos: Pos, side: Side) -> Outcome {
        self.board.put(pos, side);
        self.history.push((pos, side));
        self.last_move = Some(pos);
        self.outcome = outcome_after(&self.board, pos, side);
        self.to_move = side.opponent();

        if self.outcome.is_over() {
            log::info!("{side:?} played {pos}: {:?}", self.outcome);
        } else {
            log::debug!("{side:?} played {pos}");
        }
        self.outcome
    }
}
