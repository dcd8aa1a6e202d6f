use anyhow::{Context, Result};
use arcade_snake::game::GameConfig;
use arcade_snake::modes::HumanMode;
use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arcade_snake")]
#[command(version, about = "Snake for the terminal")]
struct Cli {
    /// Side length of the square grid (overrides the config file)
    #[arg(long)]
    grid_size: Option<usize>,

    /// YAML file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the log; the terminal belongs to the game
    #[arg(long, default_value = "snake.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_yaml_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve settings before touching the terminal so errors stay readable
    let config = cli.game_config()?;

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {:?}", cli.log_file))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    info!("Starting arcade_snake with {:?}", config);

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
