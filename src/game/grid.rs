use super::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Snake,
    Food,
}

/// Square `field_size × field_size` cell store.
///
/// No recoverable bounds handling: callers classify positions before touching
/// the grid, so an out-of-range address is a bug and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    field_size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(field_size: usize) -> Self {
        Self {
            field_size,
            cells: vec![Cell::Empty; field_size * field_size],
        }
    }

    pub fn field_size(&self) -> usize {
        self.field_size
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.field_size.max(1))
    }

    pub fn positions_of(&self, cell: Cell) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(i, _)| {
                Position::new((i % self.field_size) as i32, (i / self.field_size) as i32)
            })
            .collect()
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            pos.is_within(self.field_size),
            "grid access out of range: ({}, {}) on a {}x{} field",
            pos.x,
            pos.y,
            self.field_size,
            self.field_size
        );
        pos.y as usize * self.field_size + pos.x as usize
    }
}
