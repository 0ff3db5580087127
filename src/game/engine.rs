use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

use tracing::{debug, info, trace};

use super::clock::{Clock, Tick};
use super::collision::{classify, CollisionKind, Outcome};
use super::difficulty::Difficulty;
use super::direction::Direction;
use super::food::FoodPlacer;
use super::grid::{Cell, Grid};
use super::position::Position;
use super::snake::Snake;
use crate::config::{ConfigError, GameConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Init,
    Playing,
    Suspended,
    GameOver,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameStatus::Init => "ready",
            GameStatus::Playing => "playing",
            GameStatus::Suspended => "paused",
            GameStatus::GameOver => "game over",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not playing; nothing changed
    Idle,
    Moved,
    Ate,
    Collided(CollisionKind),
}

impl StepOutcome {
    pub fn can_continue(self) -> bool {
        !matches!(self, StepOutcome::Collided(_))
    }
}

/// Owned copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub head: Position,
    pub status: GameStatus,
    pub direction: Direction,
    pub difficulty: Difficulty,
    pub length: usize,
    pub score: usize,
    /// Bumped on every engine mutation; equal versions mean identical frames.
    pub version: u64,
}

/// The snake game state machine.
///
/// Owns the grid, the snake and the session clock. All mutation goes through
/// the intent methods and [`GameEngine::step`], each of which runs to
/// completion on `&mut self`.
#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    food: FoodPlacer,
    grid: Grid,
    snake: Snake,
    /// Current food cell, if the interior had room for one
    food_at: Option<Position>,
    status: GameStatus,
    /// Direction the next step moves in
    direction: Direction,
    difficulty: Difficulty,
    clock: Clock,
    sessions: u64,
    version: u64,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let field_size = config.field_size;
        let start = config.initial_position;
        let mut engine = Self {
            food: FoodPlacer::new(config.seed),
            grid: Grid::new(field_size),
            snake: Snake::new(start),
            food_at: None,
            status: GameStatus::Init,
            direction: Direction::default(),
            difficulty: config.difficulty,
            clock: Clock::new(0, config.difficulty.tick_interval()),
            sessions: 0,
            version: 0,
            config,
        };
        engine.new_session();
        Ok(engine)
    }

    /// `Init` or `Suspended` → `Playing`. Also the only way to resume.
    pub fn start(&mut self) -> bool {
        match self.status {
            GameStatus::Init | GameStatus::Suspended => {
                info!(from = %self.status, session = self.clock.session(), "starting");
                self.status = GameStatus::Playing;
                self.clock.resume(Instant::now());
                self.touch();
                true
            }
            _ => {
                debug!(status = %self.status, "start ignored");
                false
            }
        }
    }

    /// `Playing` → `Suspended`. No tick fires after this returns.
    pub fn stop(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            debug!(status = %self.status, "stop ignored");
            return false;
        }
        info!(session = self.clock.session(), length = self.snake.len(), "suspended");
        self.status = GameStatus::Suspended;
        self.clock.halt();
        self.touch();
        true
    }

    pub fn restart(&mut self) {
        info!(from = %self.status, length = self.snake.len(), "restarting");
        self.new_session();
    }

    /// Queue a turn for the next step. The exact reverse of the current
    /// direction is refused; any other turn replaces it.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Playing {
            debug!(?direction, status = %self.status, "direction change ignored");
            return false;
        }
        if direction.is_opposite(self.direction) {
            debug!(?direction, current = ?self.direction, "reversal rejected");
            return false;
        }
        if direction != self.direction {
            self.direction = direction;
            self.touch();
        }
        true
    }

    pub fn change_difficulty(&mut self, level: u8) -> bool {
        if self.status != GameStatus::Init {
            debug!(level, status = %self.status, "difficulty change ignored");
            return false;
        }
        let Some(difficulty) = Difficulty::new(level) else {
            debug!(level, "difficulty out of range");
            return false;
        };
        let interval = difficulty.tick_interval();
        info!(%difficulty, interval_ms = interval.as_millis() as u64, "difficulty changed");
        self.difficulty = difficulty;
        self.clock.set_interval(interval, Instant::now());
        self.touch();
        true
    }

    pub fn poll_tick(&mut self, now: Instant) -> Option<Tick> {
        self.clock.poll(now)
    }

    /// Step for `tick` if it belongs to the live, running session.
    pub fn on_tick(&mut self, tick: Tick) -> StepOutcome {
        if tick.session() != self.clock.session() || !self.clock.is_running() {
            debug!(
                tick_session = tick.session(),
                session = self.clock.session(),
                "dropping stale tick"
            );
            return StepOutcome::Idle;
        }
        self.step()
    }

    /// Advance the snake one cell. A no-op unless the game is `Playing`.
    pub fn step(&mut self) -> StepOutcome {
        if self.status != GameStatus::Playing {
            return StepOutcome::Idle;
        }

        let candidate = self.snake.head().moved(self.direction);
        let outcome = match classify(&self.grid, &self.snake, candidate) {
            Outcome::Collision(kind) => {
                self.clock.halt();
                self.status = GameStatus::GameOver;
                info!(
                    ?kind,
                    x = candidate.x,
                    y = candidate.y,
                    length = self.snake.len(),
                    "game over"
                );
                StepOutcome::Collided(kind)
            }
            Outcome::Open => {
                let vacated = self.snake.advance(candidate);
                self.grid.set(vacated, Cell::Empty);
                self.grid.set(candidate, Cell::Snake);
                if self.food_at.is_none() {
                    self.spawn_food();
                }
                StepOutcome::Moved
            }
            Outcome::Food => {
                self.snake.grow(candidate);
                self.grid.set(candidate, Cell::Snake);
                self.spawn_food();
                debug!(length = self.snake.len(), "ate food");
                StepOutcome::Ate
            }
        };

        if outcome.can_continue() {
            trace!(x = candidate.x, y = candidate.y, ?outcome, "step");
        }
        self.touch();
        debug_assert!(self.grid_matches_snake(), "grid out of sync with snake");
        outcome
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            head: self.snake.head(),
            status: self.status,
            direction: self.direction,
            difficulty: self.difficulty,
            length: self.snake.len(),
            score: self.score(),
            version: self.version,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Position> {
        self.food_at
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// The `Snake` cells of the grid are exactly the snake body.
    pub fn grid_matches_snake(&self) -> bool {
        let on_grid: HashSet<Position> =
            self.grid.positions_of(Cell::Snake).into_iter().collect();
        let body: HashSet<Position> = self.snake.body().collect();
        on_grid == body && body.len() == self.snake.len()
    }

    fn new_session(&mut self) {
        self.sessions += 1;
        let start = self.config.initial_position;

        let mut grid = Grid::new(self.config.field_size);
        let snake = Snake::new(start);
        grid.set(start, Cell::Snake);

        self.grid = grid;
        self.snake = snake;
        self.status = GameStatus::Init;
        self.direction = Direction::default();
        self.difficulty = self.config.difficulty;
        self.clock = Clock::new(self.sessions, self.difficulty.tick_interval());
        self.spawn_food();
        self.touch();

        debug!(session = self.sessions, x = start.x, y = start.y, "new session");
    }

    fn spawn_food(&mut self) {
        let excluded: HashSet<Position> = self.snake.body().collect();
        self.food_at = self.food.place(self.config.field_size, &excluded);
        match self.food_at {
            Some(pos) => self.grid.set(pos, Cell::Food),
            None => debug!(length = self.snake.len(), "no free interior cell for food"),
        }
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}
