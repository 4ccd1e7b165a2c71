// Move evaluation and turn orchestration
//
// Each turn is an independent computation: build the occupancy board from
// the snapshot, derive the food distance field, score the legal candidate
// moves, and return the best label. Candidates are compared with a
// lexicographic ranking tuple where lower is better; which signals lead the
// tuple depends on the active objective.

use log::debug;
use thiserror::Error;

use crate::board::{Board, OWN_SNAKE, SNAKE_BODY, SNAKE_HEAD};
use crate::config::Config;
use crate::field::FoodDistanceField;
use crate::space::count_open_squares;
use crate::types::{Coord, Direction, GameState};

/// Errors surfaced to the caller instead of a raw panic
#[derive(Debug, Error)]
pub enum DecisionError {
    /// The decoded snapshot cannot be turned into a board
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
    /// All four moves are out of bounds or run into a snake body. The
    /// engine defines no fallback here; callers pick a last-resort move.
    #[error("no safe move available")]
    NoSafeMove,
}

/// Active scoring policy, chosen from the controlled snake's health
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    StayAlive,
    Starving,
}

impl Objective {
    /// `Starving` once health drops below the configured threshold
    pub fn for_health(health: i32, low_health_threshold: i32) -> Objective {
        if health < low_health_threshold {
            Objective::Starving
        } else {
            Objective::StayAlive
        }
    }
}

/// Lexicographic sort key for one candidate move, lower is better
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey(pub i32, pub i32, pub i32, pub i32);

/// Raw signals measured at a candidate destination
#[derive(Debug, Clone, Copy)]
struct MoveSignals {
    food_distance: i32,
    open_squares: i32,
    close_to_wall: i32,
    close_to_rival_head: i32,
}

impl MoveSignals {
    fn measure(board: &Board, field: &FoodDistanceField, dest: Coord) -> MoveSignals {
        let n = board.size();
        // An unreached cell must never look like "food right here"; cost it
        // worse than any real distance on the board.
        let food_distance = field
            .get(dest.x, dest.y)
            .map(i32::from)
            .unwrap_or(n * n);

        let mut close_to_wall = 0;
        let mut close_to_rival_head = 0;
        for dir in Direction::all() {
            let next = dir.apply(&dest);
            if !board.in_bounds(next.x, next.y) {
                close_to_wall += 1;
                continue;
            }
            let flags = board.get(next.x, next.y);
            if flags & SNAKE_HEAD != 0 && flags & OWN_SNAKE == 0 {
                close_to_rival_head += 1;
            }
        }

        MoveSignals {
            food_distance,
            open_squares: count_open_squares(board, dest.x, dest.y) as i32,
            close_to_wall,
            close_to_rival_head,
        }
    }

    fn key(&self, objective: Objective) -> RankKey {
        match objective {
            Objective::Starving => RankKey(
                self.food_distance,
                -self.open_squares,
                self.close_to_wall,
                self.close_to_rival_head,
            ),
            // The constant third slot keeps the key shape of the starving
            // tuple so ties resolve the same way in both objectives.
            Objective::StayAlive => RankKey(
                -self.open_squares,
                self.close_to_wall + self.food_distance,
                0,
                self.close_to_rival_head,
            ),
        }
    }
}

/// Scores every legal move from `head` under the given objective.
/// Candidates are produced in the fixed order up, down, left, right;
/// out-of-bounds destinations and snake bodies are discarded unscored.
pub fn rank_moves(
    board: &Board,
    head: Coord,
    field: &FoodDistanceField,
    objective: Objective,
) -> Vec<(Direction, RankKey)> {
    let mut ranked = Vec::with_capacity(4);
    for dir in Direction::all() {
        let dest = dir.apply(&head);
        if !board.in_bounds(dest.x, dest.y) {
            debug!("{}=({}, {}) is out of bounds", dir.as_str(), dest.x, dest.y);
            continue;
        }
        if board.get(dest.x, dest.y) & SNAKE_BODY != 0 {
            debug!("{}=({}, {}) has a snake body", dir.as_str(), dest.x, dest.y);
            continue;
        }
        let signals = MoveSignals::measure(board, field, dest);
        let key = signals.key(objective);
        debug!(
            "{}=({}, {}) signals {:?} key {:?}",
            dir.as_str(),
            dest.x,
            dest.y,
            signals,
            key
        );
        ranked.push((dir, key));
    }
    ranked
}

/// Best legal move, or `None` when everything is blocked. The sort is
/// stable and candidates arrive in the fixed enumeration order, so ties go
/// to up before down before left before right.
pub fn best_move(
    board: &Board,
    head: Coord,
    field: &FoodDistanceField,
    objective: Objective,
) -> Option<Direction> {
    let mut ranked = rank_moves(board, head, field, objective);
    ranked.sort_by_key(|&(_, key)| key);
    ranked.first().map(|&(dir, _)| dir)
}

/// Turn controller: snapshot in, move label out
pub fn decide(config: &Config, state: &GameState) -> Result<Direction, DecisionError> {
    let board = Board::from_snapshot(state)?;
    let field = FoodDistanceField::build(board.size(), &state.board.food);
    let objective =
        Objective::for_health(state.you.health, config.engine.low_health_threshold);
    debug!(
        "turn {}: health {} -> objective {:?}",
        state.turn, state.you.health, objective
    );
    best_move(&board, state.you.head, &field, objective).ok_or(DecisionError::NoSafeMove)
}
