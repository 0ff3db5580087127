use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use gridsnake::app::App;
use gridsnake::config::GameConfig;
use gridsnake::game::{Difficulty, GameEngine};
use gridsnake::logging;

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "A snake game for the terminal")]
struct Cli {
    /// YAML file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Width and height of the square field; the snake starts in the middle
    #[arg(long)]
    field_size: Option<usize>,

    /// Starting difficulty, 1 (slow) to 5 (fast)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    difficulty: Option<u8>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_yaml_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(field_size) = self.field_size {
            config = GameConfig {
                difficulty: config.difficulty,
                seed: config.seed,
                ..GameConfig::centered(field_size)
            };
        }
        if let Some(level) = self.difficulty.and_then(Difficulty::new) {
            config.difficulty = level;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game settings")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    tracing::info!(?config, "starting gridsnake");

    let mut app = App::new(GameEngine::new(config)?);
    app.run()
}
