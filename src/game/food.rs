use rand::Rng;
use rand::rngs::ThreadRng;

use super::collision::occupied;
use super::grid::{Grid, Position};

/// Picks food cells by rejection sampling.
///
/// Draws uniformly from the whole board and redraws while the candidate is on
/// the snake. The loop does not terminate once the snake covers every cell;
/// a snake that long is not reachable on the board sizes this game uses.
pub struct FoodPlacer<R: Rng = ThreadRng> {
    rng: R,
}

impl FoodPlacer<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for FoodPlacer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> FoodPlacer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Spawn food at a random cell not covered by `snake`
    pub fn place(&mut self, grid: &Grid, snake: &[Position]) -> Position {
        let size = grid.size() as i32;
        loop {
            let candidate = Position::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size));

            if !occupied(candidate, snake) {
                return candidate;
            }
        }
    }
}
