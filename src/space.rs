// Flood-fill reachability counter
//
// Counts the empty cells connected to a starting coordinate through
// orthogonal moves. Any occupancy flag blocks traversal, so the count is a
// rough measure of how much room lies behind a candidate move. The fill runs
// on an explicit stack over a private visited grid; the board itself is never
// touched, and the stack depth is bounded by the cell count rather than by
// call-stack recursion.

use crate::board::Board;
use crate::types::{Coord, Direction};

/// Number of cells reachable from (x, y) through fully empty cells,
/// including the start. Returns 0 when the start is occupied or off-board.
pub fn count_open_squares(board: &Board, x: i32, y: i32) -> usize {
    if !board.in_bounds(x, y) || !board.is_empty(x, y) {
        return 0;
    }

    let cells = board.cells();
    let mut visited = vec![false; cells.len()];
    let mut stack = vec![Coord { x, y }];
    visited[board.index_of(x, y)] = true;

    let mut count = 0;
    while let Some(pos) = stack.pop() {
        count += 1;
        for dir in Direction::all() {
            let next = dir.apply(&pos);
            if !board.in_bounds(next.x, next.y) {
                continue;
            }
            let idx = board.index_of(next.x, next.y);
            if visited[idx] || cells[idx] != 0 {
                continue;
            }
            visited[idx] = true;
            stack.push(next);
        }
    }

    count
}
