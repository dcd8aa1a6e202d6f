//! Arcade Snake - the classic grid game for the terminal
//!
//! This library provides:
//! - Core game logic: grid, collisions, food placement, the tick rule (game module)
//! - The tick clock that follows the game's speed (clock module)
//! - Keyboard mapping (input module)
//! - TUI rendering from state snapshots (render module)
//! - Session stats (metrics module)
//! - The interactive terminal loop (modes module)

pub mod clock;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
