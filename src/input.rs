use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    /// Start a fresh game or resume a paused one
    Start,
    Stop,
    Restart,
    Harder,
    Easier,
    Quit,
}

pub fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

/// Map a key press to an intent. Unbound keys yield `None`.
pub fn intent_for(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }

    if let Some(direction) = direction_for(key.code) {
        return Some(Intent::Turn(direction));
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Intent::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::Stop),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Intent::Harder),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Intent::Easier),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}
