// Food distance field
//
// Multi-source BFS seeded at every food cell. Each cell ends up holding the
// shortest orthogonal step count to the nearest food, or `None` when no food
// can reach it (or the board carries no food at all). The explicit `None`
// replaces the ambiguous zero the first version of this bot used, where an
// unvisited cell was indistinguishable from a food cell.

use std::collections::VecDeque;

use crate::types::{Coord, Direction};

/// Grid of shortest step distances to the nearest food cell
#[derive(Debug, Clone)]
pub struct FoodDistanceField {
    size: i32,
    distances: Vec<Option<u16>>,
}

impl FoodDistanceField {
    /// Builds the field for an `n` x `n` board from the food coordinate list.
    /// Food cells get distance 0; ties between sources resolve to whichever
    /// source reaches a cell first in BFS level order.
    pub fn build(n: i32, food: &[Coord]) -> FoodDistanceField {
        let mut field = FoodDistanceField {
            size: n,
            distances: vec![None; (n * n) as usize],
        };

        let mut frontier: VecDeque<Coord> = VecDeque::new();
        for pos in food {
            if !field.in_bounds(pos.x, pos.y) {
                continue;
            }
            let idx = field.index_of(pos.x, pos.y);
            if field.distances[idx].is_none() {
                field.distances[idx] = Some(0);
                frontier.push_back(*pos);
            }
        }

        while let Some(pos) = frontier.pop_front() {
            let here = field.distances[field.index_of(pos.x, pos.y)]
                .unwrap_or(0);
            for dir in Direction::all() {
                let next = dir.apply(&pos);
                if !field.in_bounds(next.x, next.y) {
                    continue;
                }
                let idx = field.index_of(next.x, next.y);
                if field.distances[idx].is_none() {
                    field.distances[idx] = Some(here + 1);
                    frontier.push_back(next);
                }
            }
        }

        field
    }

    /// Distance at a game coordinate, `None` when the cell was never reached
    pub fn get(&self, x: i32, y: i32) -> Option<u16> {
        self.distances[self.index_of(x, y)]
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.size && y >= 0 && y < self.size
    }

    fn index_of(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.in_bounds(x, y));
        ((self.size - 1 - y) * self.size + x) as usize
    }
}
