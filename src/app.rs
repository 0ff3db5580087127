use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal,
};
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};
use tracing::info;

use crate::game::GameEngine;
use crate::input::{intent_for, Intent};
use crate::render;

/// Longest we block on input while the clock is halted.
const IDLE_POLL: Duration = Duration::from_millis(50);

/// The terminal front end: forwards key presses and clock ticks to the
/// engine and redraws whenever the engine's state has changed.
pub struct App {
    engine: GameEngine,
    drawn_version: Option<u64>,
    quit: bool,
}

impl App {
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            drawn_version: None,
            quit: false,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut out = stdout();
        execute!(out, Hide).context("Failed to hide cursor")?;

        let result = self.run_loop(&mut out);
        let restored = restore_terminal(&mut out);

        prefer_loop_error(result, restored)?;
        println!(
            "\nThanks for playing! Final length: {}, score: {}",
            self.engine.length(),
            self.engine.score()
        );
        Ok(())
    }

    fn run_loop(&mut self, out: &mut Stdout) -> Result<()> {
        while !self.quit {
            self.redraw_if_changed(out)?;

            let wait = self
                .engine
                .clock()
                .time_until_due(Instant::now())
                .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));

            if event::poll(wait).context("Failed to poll terminal events")? {
                if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(intent) = intent_for(key) {
                            self.apply(intent);
                        }
                    }
                }
            }

            if let Some(tick) = self.engine.poll_tick(Instant::now()) {
                self.engine.on_tick(tick);
            }
        }
        Ok(())
    }

    /// Forward one intent to the engine. Rejected intents are dropped silently.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Turn(direction) => {
                self.engine.change_direction(direction);
            }
            Intent::Start => {
                self.engine.start();
            }
            Intent::Stop => {
                self.engine.stop();
            }
            Intent::Restart => self.engine.restart(),
            Intent::Harder => {
                if let Some(next) = self.engine.difficulty().harder() {
                    self.engine.change_difficulty(next.level());
                }
            }
            Intent::Easier => {
                if let Some(next) = self.engine.difficulty().easier() {
                    self.engine.change_difficulty(next.level());
                }
            }
            Intent::Quit => {
                info!(length = self.engine.length(), "quitting");
                self.quit = true;
            }
        }
    }

    fn redraw_if_changed(&mut self, out: &mut Stdout) -> Result<()> {
        let version = self.engine.version();
        if self.drawn_version == Some(version) {
            return Ok(());
        }
        render::draw(out, &self.engine.snapshot()).context("Failed to draw frame")?;
        self.drawn_version = Some(version);
        Ok(())
    }
}

/// Report a game-loop failure over a terminal cleanup failure.
fn prefer_loop_error(run: Result<()>, restore: Result<()>) -> Result<()> {
    run.and(restore)
}

/// Undo raw mode and show the cursor. Both steps run even if the first fails.
fn restore_terminal(out: &mut Stdout) -> Result<()> {
    let raw = terminal::disable_raw_mode().context("Failed to disable raw mode");
    let cursor = execute!(out, Show).context("Failed to show cursor");
    raw.and(cursor)
}
