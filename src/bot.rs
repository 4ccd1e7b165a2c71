// Bot facade tying the decision engine to the Battlesnake API
//
// Exposes methods corresponding to the API endpoints and owns the pieces
// that live for the whole process: the configuration and the decision
// logger. The engine itself is stateless; every call to get_move works on
// the snapshot alone.

use log::{error, info, warn};
use serde_json::{json, Value};
use std::time::Instant;

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::engine::{self, DecisionError};
use crate::types::{Direction, GameState};

/// Battlesnake bot with per-endpoint methods
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration and
    /// decision logging disabled
    pub fn new(config: Config) -> Self {
        Bot {
            config,
            debug_logger: DebugLogger::disabled(),
        }
    }

    /// Creates a Bot with an already initialized decision logger
    pub fn with_debug_logger(config: Config, debug_logger: DebugLogger) -> Self {
        Bot {
            config,
            debug_logger,
        }
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        json!({
            "apiversion": "1",
            "author": self.config.appearance.author,
            "color": self.config.appearance.color,
            "head": self.config.appearance.head,
            "tail": self.config.appearance.tail,
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, state: &GameState) {
        info!("GAME START: {}", state.game.id);
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, state: &GameState) {
        info!("GAME OVER: {} after {} turns", state.game.id, state.turn);
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// The engine reports errors instead of guessing; the fallback policy
    /// for those lives here so the API always gets a move label back.
    pub fn get_move(&self, state: &GameState) -> Value {
        let start_time = Instant::now();

        let chosen_move = match engine::decide(&self.config, state) {
            Ok(dir) => dir,
            Err(DecisionError::NoSafeMove) => {
                let fallback = Self::last_resort_move(state);
                warn!(
                    "Turn {}: no safe move, falling back to {}",
                    state.turn,
                    fallback.as_str()
                );
                fallback
            }
            Err(e) => {
                error!("Turn {}: {}, answering up", state.turn, e);
                Direction::Up
            }
        };

        self.debug_logger.log_move(state, chosen_move);

        info!(
            "Turn {}: Chose {} (time: {}ms)",
            state.turn,
            chosen_move.as_str(),
            start_time.elapsed().as_millis()
        );

        json!({ "move": chosen_move.as_str() })
    }

    /// Last-resort policy when every move is blocked: the first direction
    /// in fixed order whose destination is at least on the board, so the
    /// snake never answers with an out-of-bounds label it could avoid.
    fn last_resort_move(state: &GameState) -> Direction {
        let n = state.board.height;
        for dir in Direction::all() {
            let dest = dir.apply(&state.you.head);
            if dest.x >= 0 && dest.x < n && dest.y >= 0 && dest.y < n {
                return dir;
            }
        }
        Direction::Up
    }
}
