//! Grid, snake and the tick-driven state machine that moves it.
//!
//! Nothing in here touches the terminal; the front end feeds intents and
//! ticks in and reads [`Snapshot`]s out.

pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod position;
pub mod snake;

pub use clock::{Clock, Tick};
pub use collision::{classify, CollisionKind, Outcome};
pub use difficulty::Difficulty;
pub use direction::Direction;
pub use engine::{GameEngine, GameStatus, Snapshot, StepOutcome};
pub use food::FoodPlacer;
pub use grid::{Cell, Grid};
pub use position::Position;
pub use snake::Snake;
