//! gridsnake - a terminal snake game.
//!
//! - `game`: grid, snake, collision and the tick-driven engine
//! - `config`: game settings and YAML loading
//! - `input` / `render` / `app`: the crossterm front end

pub mod app;
pub mod config;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
