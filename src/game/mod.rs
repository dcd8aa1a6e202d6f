//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end drives it through `GameEngine` and reads it back as a `Snapshot`.

pub mod collision;
pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use collision::{CollisionType, occupied};
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickResult};
pub use food::FoodPlacer;
pub use grid::{CELL_HEIGHT, CELL_WIDTH, GRID_SIZE, Grid, MAX_GRID_SIZE, Position};
pub use state::{GameState, Snake, Snapshot, Status};
