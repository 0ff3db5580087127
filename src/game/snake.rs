use std::collections::VecDeque;

use super::position::Position;

/// Snake body, head at the front and tail at the back. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start);
        Self { body }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn grow(&mut self, new_head: Position) {
        self.body.push_front(new_head);
    }

    /// Prepend a new head and drop the tail. Returns the vacated tail cell.
    pub fn advance(&mut self, new_head: Position) -> Position {
        self.body.push_front(new_head);
        // A body of length one still has its old head at the back here.
        self.body
            .pop_back()
            .unwrap_or_else(|| unreachable!("snake body is never empty"))
    }
}
