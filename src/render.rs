use crossterm::{
    cursor::MoveTo,
    execute,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

use crate::game::{Cell, GameStatus, Position, Snapshot};

fn glyph(snapshot: &Snapshot, pos: Position, cell: Cell) -> char {
    match cell {
        Cell::Snake if pos == snapshot.head => 'O',
        Cell::Snake => 'o',
        Cell::Food => '*',
        Cell::Empty => ' ',
    }
}

fn hint(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Init => "Space to start, +/- to change difficulty, 'q' to quit",
        GameStatus::Playing => "Use arrow keys to move, 'p' to pause, 'q' to quit",
        GameStatus::Suspended => "Paused: Space to resume, 'r' to restart, 'q' to quit",
        GameStatus::GameOver => "Game Over! 'r' to restart, 'q' to quit",
    }
}

/// Draw one frame. The wall is drawn just outside the playable field.
pub fn draw<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    // Engines only exist for validated configs, so this is at most MAX_FIELD_SIZE.
    let size = snapshot.grid.field_size() as u16;
    let wall_row: String = "#".repeat(usize::from(size) + 2);

    execute!(out, Clear(ClearType::All), MoveTo(0, 0), Print(&wall_row))?;

    for (y, row) in snapshot.grid.rows().enumerate() {
        let line: String = row
            .iter()
            .enumerate()
            .map(|(x, cell)| glyph(snapshot, Position::new(x as i32, y as i32), *cell))
            .collect();
        execute!(out, MoveTo(0, y as u16 + 1), Print(format!("#{}#", line)))?;
    }

    execute!(
        out,
        MoveTo(0, size + 1),
        Print(&wall_row),
        MoveTo(0, size + 2),
        Print(format!(
            "Length: {}  Score: {}  Difficulty: {}  [{}]",
            snapshot.length, snapshot.score, snapshot.difficulty, snapshot.status
        )),
        MoveTo(0, size + 3),
        Print(hint(snapshot.status))
    )?;

    out.flush()
}
