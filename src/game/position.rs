use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell coordinate. Signed so a candidate head can step off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn is_within(self, field_size: usize) -> bool {
        let max = field_size as i32;
        (0..max).contains(&self.x) && (0..max).contains(&self.y)
    }
}
