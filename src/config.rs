use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::{Difficulty, Position};

/// Smallest field with a non-empty interior for food.
pub const MIN_FIELD_SIZE: usize = 3;
/// Largest field that still fits a terminal, walls and status lines included.
pub const MAX_FIELD_SIZE: usize = 200;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("field size {0} is too small, need at least 3")]
    FieldTooSmall(usize),

    #[error("field size {0} is too large, at most 200 is allowed")]
    FieldTooLarge(usize),

    #[error("initial position ({x}, {y}) is outside a {field_size}x{field_size} field")]
    InitialPositionOutOfRange { x: i32, y: i32, field_size: usize },

    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Settings for a game. Every session of an engine is built from the same config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the square field
    pub field_size: usize,
    /// Where the one-cell snake starts each session
    pub initial_position: Position,
    /// Difficulty a fresh session starts at
    pub difficulty: Difficulty,
    /// Seed for food placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_size: 35,
            initial_position: Position::new(17, 17),
            difficulty: Difficulty::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// A square field with the snake starting in the middle.
    pub fn centered(field_size: usize) -> Self {
        let mid = (field_size / 2) as i32;
        Self {
            field_size,
            initial_position: Position::new(mid, mid),
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_size < MIN_FIELD_SIZE {
            return Err(ConfigError::FieldTooSmall(self.field_size));
        }
        if self.field_size > MAX_FIELD_SIZE {
            return Err(ConfigError::FieldTooLarge(self.field_size));
        }
        if !self.initial_position.is_within(self.field_size) {
            return Err(ConfigError::InitialPositionOutOfRange {
                x: self.initial_position.x,
                y: self.initial_position.y,
                field_size: self.field_size,
            });
        }
        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
