use super::grid::{Cell, Grid};
use super::position::Position;
use super::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Wall,
    SelfCollision,
}

/// What the snake would run into at a candidate head position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Collision(CollisionKind),
    Food,
    Open,
}

/// Classify `candidate` against the walls, the current body and the grid.
///
/// Walls are checked first, so the grid is only read for in-range positions.
/// The whole body counts, tail included, even though the tail would move away.
pub fn classify(grid: &Grid, snake: &Snake, candidate: Position) -> Outcome {
    if !candidate.is_within(grid.field_size()) {
        return Outcome::Collision(CollisionKind::Wall);
    }

    if snake.contains(candidate) {
        return Outcome::Collision(CollisionKind::SelfCollision);
    }

    match grid.get(candidate) {
        Cell::Food => Outcome::Food,
        _ => Outcome::Open,
    }
}
