use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};

use super::grid::{GRID_SIZE, MAX_GRID_SIZE};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Tick interval at the start of a game
    pub initial_interval_ms: u64,
    /// Fastest tick interval the speed-up can reach
    pub min_interval_ms: u64,
    /// How much each eaten food shortens the tick interval
    pub speed_step_ms: u64,
    /// Points per eaten food
    pub food_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_interval_ms: 100,
            min_interval_ms: 50,
            speed_step_ms: 2,
            food_score: 10,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Load a configuration from a YAML file. Missing keys take their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("Invalid config file {:?}", path))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml_ng::from_str(content).context("Failed to deserialize config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_size >= 2,
            "grid_size must be at least 2, got {}",
            self.grid_size
        );
        ensure!(
            self.grid_size <= MAX_GRID_SIZE,
            "grid_size must be at most {}, got {}",
            MAX_GRID_SIZE,
            self.grid_size
        );
        ensure!(self.min_interval_ms > 0, "min_interval_ms must be positive");
        if self.initial_interval_ms < self.min_interval_ms {
            bail!(
                "initial_interval_ms ({}) is below min_interval_ms ({})",
                self.initial_interval_ms,
                self.min_interval_ms
            );
        }
        Ok(())
    }
}
