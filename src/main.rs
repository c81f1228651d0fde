//! Gomoku GUI
//!
//! Play five-in-a-row against a minimax computer opponent.

use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

use gomoku::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use gomoku::ui::{GameState, GomokuApp};
use gomoku::{GameConfig, RuleSet, SearchConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Rules {
    /// No placement restrictions, overlines win
    Freestyle,
    /// Overline, double four and double three forbidden for the human
    Renju,
}

impl From<Rules> for RuleSet {
    fn from(rules: Rules) -> Self {
        match rules {
            Rules::Freestyle => RuleSet::Freestyle,
            Rules::Renju => RuleSet::Renju,
        }
    }
}

/// Gomoku against a minimax computer opponent
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length
    #[arg(long, default_value_t = 19, value_parser = clap::value_parser!(u8).range(MIN_BOARD_SIZE as i64..=MAX_BOARD_SIZE as i64))]
    size: u8,

    /// Rule set for the human's moves
    #[arg(long, value_enum, default_value_t = Rules::Freestyle)]
    rules: Rules,

    /// Plies searched below each root candidate
    #[arg(long, default_value_t = 2)]
    depth: u8,

    /// Root candidates kept after pre-ordering
    #[arg(long, default_value_t = 10)]
    breadth: usize,

    /// Pause before the computer starts thinking, in milliseconds
    #[arg(long, default_value_t = 100)]
    think_delay_ms: u64,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            board_size: usize::from(self.size),
            rules: self.rules.into(),
            search: SearchConfig {
                depth: self.depth,
                root_breadth: self.breadth,
            },
            think_delay: Duration::from_millis(self.think_delay_ms),
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.game_config();
    log::debug!("{config:?}");

    let state = match GameState::new(config) {
        Ok(state) => state,
        Err(err) => Cli::command().error(ErrorKind::InvalidValue, err).exit(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, state)))),
    )
}
