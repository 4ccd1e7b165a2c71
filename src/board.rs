// Layered occupancy board
//
// The board is a square grid of cell flags rebuilt from scratch for every
// incoming snapshot. Game coordinates have their origin bottom-left with y
// increasing upward; internal storage is row-major with row 0 at the top.
// All reads and writes go through the (x, y) -> (row, col) transform, raw
// indices never leave this module.

use crate::engine::DecisionError;
use crate::types::{Coord, GameState};

/// Cell is covered by any snake's body segment
pub const SNAKE_BODY: u8 = 1 << 0;
/// Cell holds some snake's head
pub const SNAKE_HEAD: u8 = 1 << 1;
/// Cell is covered by the controlled snake
pub const OWN_SNAKE: u8 = 1 << 2;

/// Square grid of per-cell occupancy flags for one turn
#[derive(Debug, Clone)]
pub struct Board {
    size: i32,
    cells: Vec<u8>,
}

impl Board {
    /// Builds the occupancy grid from a decoded snapshot.
    ///
    /// Flags are layered in a fixed order: every snake's body is written
    /// first, then every head is merged in, and the controlled snake's
    /// overlay is merged last so its flags survive the plain body writes.
    pub fn from_snapshot(state: &GameState) -> Result<Board, DecisionError> {
        let size = state.board.height;
        if size <= 0 {
            return Err(DecisionError::InvalidSnapshot(format!(
                "board height must be positive, got {}",
                size
            )));
        }
        if state.you.body.is_empty() {
            return Err(DecisionError::InvalidSnapshot(
                "controlled snake has no body".to_string(),
            ));
        }

        let mut board = Board {
            size,
            cells: vec![0; (size * size) as usize],
        };

        for snake in &state.board.snakes {
            for pos in &snake.body {
                board.checked(pos)?;
                board.set(pos.x, pos.y, SNAKE_BODY, false);
            }
            board.checked(&snake.head)?;
            board.set(snake.head.x, snake.head.y, SNAKE_HEAD, true);
        }

        for pos in &state.you.body {
            board.checked(pos)?;
            board.set(pos.x, pos.y, OWN_SNAKE, true);
        }
        board.checked(&state.you.head)?;
        board.set(
            state.you.head.x,
            state.you.head.y,
            SNAKE_HEAD | OWN_SNAKE,
            true,
        );

        Ok(board)
    }

    /// Board side length
    pub fn size(&self) -> i32 {
        self.size
    }

    /// True when (x, y) lies on the board. Upper bounds are strict: x == N
    /// and y == N are out.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.size && y >= 0 && y < self.size
    }

    /// Writes flags at a game coordinate. `merge` ORs the bits in,
    /// otherwise the cell is overwritten. Callers must pre-filter with
    /// `in_bounds`; an out-of-range coordinate is a programming error.
    pub fn set(&mut self, x: i32, y: i32, value: u8, merge: bool) {
        let idx = self.index_of(x, y);
        if merge {
            self.cells[idx] |= value;
        } else {
            self.cells[idx] = value;
        }
    }

    /// Reads the flags at a game coordinate. Same bounds contract as `set`.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.cells[self.index_of(x, y)]
    }

    /// True when the cell carries no flags at all
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == 0
    }

    /// Snapshot of the raw cells, used by the flood-fill scratch copy
    pub(crate) fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn index_of(&self, x: i32, y: i32) -> usize {
        debug_assert!(
            self.in_bounds(x, y),
            "coordinate ({}, {}) outside {}x{} board",
            x,
            y,
            self.size,
            self.size
        );
        let row = self.size - 1 - y;
        let col = x;
        (row * self.size + col) as usize
    }

    fn checked(&self, pos: &Coord) -> Result<(), DecisionError> {
        if self.in_bounds(pos.x, pos.y) {
            Ok(())
        } else {
            Err(DecisionError::InvalidSnapshot(format!(
                "coordinate ({}, {}) outside {}x{} board",
                pos.x, pos.y, self.size, self.size
            )))
        }
    }
}
