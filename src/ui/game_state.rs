//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::{AIEngine, Game, GameConfig, MoveResult, Outcome, Pos, Side};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Front-end state around a [`Game`]
pub struct GameState {
    pub game: Game,
    pub config: GameConfig,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> crate::Result<Self> {
        Ok(Self {
            game: Game::new(config)?,
            config,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
        })
    }

    /// Start over; a search still running is abandoned
    pub fn reset(&mut self) {
        self.game.restart();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    pub fn is_human_turn(&self) -> bool {
        !self.game.outcome().is_over() && self.game.to_move() == Side::Human
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.game.outcome().is_over() && self.game.to_move() == Side::Computer
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt the human's move at the given position
    pub fn try_place_stone(&mut self, pos: Pos) {
        if self.is_ai_thinking() {
            self.message = Some("The computer is thinking".to_string());
            return;
        }
        match self.game.play_human(pos) {
            Ok(_) => self.message = None,
            Err(err) => self.message = Some(format!("Invalid move: {err}")),
        }
    }

    /// Take back the last move pair
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        if self.game.undo() > 0 {
            self.last_ai_result = None;
            self.message = None;
        }
    }

    /// Start the computer's search on a helper thread.
    ///
    /// The thread waits for the configured think delay, then searches a
    /// clone of the board and sends the result back.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let mut board = self.game.board().clone();
        let search = self.config.search;
        let rules = self.config.rules;
        let delay = self.config.think_delay;

        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(delay);
            let mut engine = AIEngine::with_config(search, rules);
            let result = engine.choose_move_with_stats(&mut board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the computer's move once the helper thread has delivered it
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("search thread ended without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(pos) => {
                if let Err(err) = self.game.apply_computer_move(pos) {
                    self.message = Some(format!("AI move rejected: {err}"));
                }
            }
            None => {
                // Only a full board leaves the computer without a move
                if let Err(err) = self.game.play_computer(&mut AIEngine::new()) {
                    self.message = Some(format!("AI error: {err}"));
                }
            }
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// One-line status for the side panel
    pub fn status_text(&self) -> String {
        match self.game.outcome() {
            Outcome::HumanWin => "You win!".to_string(),
            Outcome::ComputerWin => "The computer wins!".to_string(),
            Outcome::Draw => "Draw!".to_string(),
            Outcome::InProgress if self.is_ai_thinking() => "The computer is thinking...".to_string(),
            Outcome::InProgress if self.game.to_move() == Side::Human => "Your turn".to_string(),
            Outcome::InProgress => "Computer's turn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;

    fn state() -> GameState {
        GameState::new(GameConfig {
            search: SearchConfig {
                depth: 1,
                root_breadth: 4,
            },
            think_delay: Duration::ZERO,
            ..GameConfig::default()
        })
        .unwrap()
    }

    /// Poll until the helper thread delivers
    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }
    }

    #[test]
    fn test_human_then_ai_turn() {
        let mut state = state();
        assert!(state.is_human_turn());
        state.try_place_stone(Pos::new(9, 9));
        assert!(state.is_ai_turn());
        assert_eq!(state.status_text(), "Computer's turn");

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert!(state.is_human_turn());
        assert_eq!(state.game.history().len(), 2);
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_invalid_click_sets_message() {
        let mut state = state();
        state.try_place_stone(Pos::new(9, 9));
        state.start_ai_thinking();
        wait_for_ai(&mut state);

        state.try_place_stone(Pos::new(9, 9));
        assert!(state.message.is_some());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_reset_cancels_thinking() {
        let mut state = state();
        state.try_place_stone(Pos::new(9, 9));
        state.start_ai_thinking();
        state.reset();
        assert!(!state.is_ai_thinking());
        assert!(state.game.board().is_board_empty());
        assert_eq!(state.status_text(), "Your turn");
    }
}
