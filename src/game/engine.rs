use super::{
    collision::{CollisionType, occupied},
    config::GameConfig,
    food::FoodPlacer,
    grid::{Grid, Position},
    state::{GameState, Snake, Status},
};
use log::{debug, info};
use rand::Rng;
use rand::rngs::ThreadRng;

/// Result of a game tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Whether the tick interval shrank, so the clock has to be re-armed
    pub interval_changed: bool,
}

impl TickResult {
    pub fn game_over(&self) -> bool {
        self.collision_type.is_some()
    }
}

/// The game engine that handles all game logic
pub struct GameEngine<R: Rng = ThreadRng> {
    config: GameConfig,
    grid: Grid,
    placer: FoodPlacer<R>,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food cells from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            grid: Grid::new(config.grid_size),
            config,
            placer: FoodPlacer::with_rng(rng),
        }
    }

    /// A fresh game that has not been started
    pub fn idle_state(&mut self) -> GameState {
        let snake = Snake::new(self.grid.center());
        let food = self.placer.place(&self.grid, snake.segments());

        GameState::new(self.grid, snake, food, self.config.initial_interval_ms)
    }

    /// Replace whatever was being played with a new running game
    pub fn start(&mut self) -> GameState {
        let mut state = self.idle_state();
        state.status = Status::Running;
        info!(
            "Game started on {}x{} grid, interval {}ms",
            self.grid.size(),
            self.grid.size(),
            state.tick_interval_ms
        );
        state
    }

    /// Advance a running game by one cell. Does nothing unless running.
    pub fn tick(&mut self, state: &mut GameState) -> TickResult {
        if !state.is_running() {
            return TickResult::default();
        }

        // Input is read once, here; later turns wait for the next tick
        state.direction = state.pending_direction;

        let new_head = state.snake.head().moved_in_direction(state.direction);

        if let Some(collision_type) = check_collision(state, new_head) {
            state.status = Status::GameOver;
            info!(
                "Game over ({:?}) with score {} and length {}",
                collision_type,
                state.score,
                state.snake.len()
            );
            return TickResult {
                collision_type: Some(collision_type),
                ..Default::default()
            };
        }

        let ate_food = new_head == state.food;
        state.snake.advance(new_head, ate_food);

        let mut interval_changed = false;
        if ate_food {
            state.score = state.score.saturating_add(self.config.food_score);
            state.food = self.placer.place(&state.grid, state.snake.segments());

            let previous = state.tick_interval_ms;
            state.tick_interval_ms = previous
                .saturating_sub(self.config.speed_step_ms)
                .max(self.config.min_interval_ms);
            interval_changed = state.tick_interval_ms != previous;
            debug!(
                "Food eaten: score {}, length {}, interval {}ms",
                state.score,
                state.snake.len(),
                state.tick_interval_ms
            );
        }

        TickResult {
            ate_food,
            collision_type: None,
            interval_changed,
        }
    }
}

/// Check if the new head position causes a collision on the state's own board.
///
/// The current tail is always left out of the body check, also on ticks
/// where the snake is about to grow and the tail stays put.
fn check_collision(state: &GameState, pos: Position) -> Option<CollisionType> {
    if !state.grid.contains(pos) {
        return Some(CollisionType::Wall);
    }

    if occupied(pos, state.snake.without_tail()) {
        return Some(CollisionType::SelfCollision);
    }

    None
}
