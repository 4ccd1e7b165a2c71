// Replay module for analyzing recorded games
//
// Reads the JSONL decision log written by the debug logger, re-runs the
// engine on every recorded snapshot, and reports where the replayed choice
// diverges from the recorded one. Useful after tuning ranking signals to
// see which historical decisions change.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::bot::Bot;
use crate::config::Config;
use crate::types::GameState;

/// One line of the debug JSONL file
#[derive(Debug, Deserialize, Serialize)]
pub struct LogEntry {
    pub turn: i32,
    pub chosen_move: String,
    pub state: GameState,
    pub timestamp: String,
}

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: i32,
    pub original_move: String,
    pub replayed_move: String,
    pub matches: bool,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
}

/// Replay engine for analyzing debug logs
pub struct ReplayEngine {
    bot: Bot,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine with the given configuration
    pub fn new(config: Config, verbose: bool) -> Self {
        ReplayEngine {
            bot: Bot::new(config),
            verbose,
        }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<LogEntry>, String> {
        let file = File::open(log_path.as_ref())
            .map_err(|e| format!("Failed to open log file: {}", e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: LogEntry = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Re-runs the engine on a single recorded snapshot
    pub fn replay_turn(&self, entry: &LogEntry) -> Result<ReplayResult, String> {
        let response = self.bot.get_move(&entry.state);
        let replayed_move = response["move"]
            .as_str()
            .ok_or_else(|| format!("Turn {}: replay produced no move label", entry.turn))?
            .to_string();

        Ok(ReplayResult {
            turn: entry.turn,
            matches: replayed_move == entry.chosen_move,
            original_move: entry.chosen_move.clone(),
            replayed_move,
        })
    }

    /// Replays a whole log file and summarizes agreement
    pub fn replay_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<ReplayStats, String> {
        let entries = self.load_log_file(log_path)?;
        let mut stats = ReplayStats::default();

        for entry in &entries {
            let result = self.replay_turn(entry)?;

            if result.matches {
                stats.matches += 1;
                if self.verbose {
                    info!("Turn {}: {} (match)", result.turn, result.replayed_move);
                }
            } else {
                stats.mismatches += 1;
                warn!(
                    "Turn {}: recorded {} but replay chose {}",
                    result.turn, result.original_move, result.replayed_move
                );
            }
            stats.total_turns += 1;
        }

        if stats.total_turns > 0 {
            stats.match_rate = stats.matches as f64 / stats.total_turns as f64;
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(chosen_move: &str) -> LogEntry {
        serde_json::from_value(json!({
            "turn": 12,
            "chosen_move": chosen_move,
            "timestamp": "2025-01-01T00:00:00Z",
            "state": {
                "game": { "id": "t" },
                "turn": 12,
                "board": {
                    "height": 11,
                    "width": 11,
                    "food": [ {"x": 8, "y": 5} ],
                    "snakes": [
                        { "id": "me", "health": 5, "body": [ {"x": 5, "y": 5} ], "head": {"x": 5, "y": 5} }
                    ]
                },
                "you": { "id": "me", "health": 5, "body": [ {"x": 5, "y": 5} ], "head": {"x": 5, "y": 5} }
            }
        }))
        .expect("test entry should deserialize")
    }

    #[test]
    fn replay_agrees_with_a_correctly_recorded_move() {
        let engine = ReplayEngine::new(Config::default_hardcoded(), false);
        let result = engine.replay_turn(&entry("right")).unwrap();
        assert!(result.matches);
        assert_eq!(result.replayed_move, "right");
    }

    #[test]
    fn replay_flags_a_divergent_recorded_move() {
        let engine = ReplayEngine::new(Config::default_hardcoded(), false);
        let result = engine.replay_turn(&entry("left")).unwrap();
        assert!(!result.matches);
        assert_eq!(result.original_move, "left");
        assert_eq!(result.replayed_move, "right");
    }
}
