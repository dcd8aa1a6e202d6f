use super::{
    collision::occupied,
    direction::Direction,
    grid::{Grid, Position},
};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Position>,
}

impl Snake {
    /// Create a one-cell snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty body or one that overlaps itself.
    pub fn from_segments(body: Vec<Position>) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        let overlaps = body
            .iter()
            .enumerate()
            .any(|(i, pos)| occupied(*pos, &body[i + 1..]));
        if overlaps { None } else { Some(Self { body }) }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Every segment except the tail, i.e. the cells still taken after a plain move
    pub fn without_tail(&self) -> &[Position] {
        &self.body[..self.body.len() - 1]
    }

    /// Prepend a new head, dropping the tail unless the snake grows
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: a snake has at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Not started, or paused; only `start` leaves this state
    Idle,
    Running,
    /// Terminal until the next `start`
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Position,
    /// Direction applied on the last tick
    pub direction: Direction,
    /// Intent for the next tick
    pub pending_direction: Direction,
    pub score: u32,
    pub tick_interval_ms: u64,
    pub status: Status,
}

impl GameState {
    /// Create an idle game state heading right
    pub fn new(grid: Grid, snake: Snake, food: Position, tick_interval_ms: u64) -> Self {
        Self {
            grid,
            snake,
            food,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            tick_interval_ms,
            status: Status::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Buffer a turn for the next tick.
    ///
    /// Ignored while not running and when it would reverse the snake onto
    /// itself. A later call before the tick replaces an earlier one.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if !self.is_running() || self.direction.is_opposite(direction) {
            return;
        }
        self.pending_direction = direction;
    }

    /// Stop a running game. There is no resume; `start` begins a new one.
    pub fn pause(&mut self) {
        if self.is_running() {
            self.status = Status::Idle;
        }
    }

    /// Immutable view handed to the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().to_vec(),
            food: self.food,
            score: self.score,
            status: self.status,
            grid_size: self.grid.size(),
            tick_interval_ms: self.tick_interval_ms,
        }
    }
}

/// What the renderer sees after each fully applied change
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Head first
    pub snake: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub status: Status,
    pub grid_size: usize,
    pub tick_interval_ms: u64,
}

impl Snapshot {
    pub fn head(&self) -> Position {
        self.snake[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_state() -> GameState {
        let mut state = GameState::new(
            Grid::new(20),
            Snake::new(Position::new(10, 10)),
            Position::new(3, 3),
            100,
        );
        state.status = Status::Running;
        state
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.tail(), Position::new(5, 5));
        assert!(snake.without_tail().is_empty());
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_from_segments_rejects_bad_bodies() {
        assert!(Snake::from_segments(vec![]).is_none());
        assert!(
            Snake::from_segments(vec![Position::new(1, 1), Position::new(1, 1)]).is_none()
        );

        let snake =
            Snake::from_segments(vec![Position::new(2, 1), Position::new(1, 1)]).unwrap();
        assert_eq!(snake.head(), Position::new(2, 1));
        assert_eq!(snake.tail(), Position::new(1, 1));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5));

        // Move without growing
        snake.advance(Position::new(6, 5), false);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(6, 5));

        // Move with growing
        snake.advance(Position::new(7, 5), true);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(7, 5));
        assert_eq!(snake.tail(), Position::new(6, 5));
        assert_eq!(snake.without_tail(), &[Position::new(7, 5)]);
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(
            Grid::new(20),
            Snake::new(Position::new(10, 10)),
            Position::new(3, 3),
            100,
        );
        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.pending_direction, Direction::Right);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut state = running_state();
        state.set_pending_direction(Direction::Left);
        assert_eq!(state.pending_direction, Direction::Right);
    }

    #[test]
    fn test_latest_turn_wins() {
        let mut state = running_state();
        state.set_pending_direction(Direction::Up);
        state.set_pending_direction(Direction::Down);
        assert_eq!(state.pending_direction, Direction::Down);
    }

    #[test]
    fn test_reversal_guard_uses_applied_direction() {
        // Up then Left between ticks: Left is checked against Right, not Up
        let mut state = running_state();
        state.set_pending_direction(Direction::Up);
        state.set_pending_direction(Direction::Left);
        assert_eq!(state.pending_direction, Direction::Up);
    }

    #[test]
    fn test_input_ignored_when_not_running() {
        let mut state = running_state();
        state.status = Status::Idle;
        state.set_pending_direction(Direction::Up);
        assert_eq!(state.pending_direction, Direction::Right);

        state.status = Status::GameOver;
        state.set_pending_direction(Direction::Down);
        assert_eq!(state.pending_direction, Direction::Right);
    }

    #[test]
    fn test_pause_only_from_running() {
        let mut state = running_state();
        state.pause();
        assert_eq!(state.status, Status::Idle);

        state.status = Status::GameOver;
        state.pause();
        assert_eq!(state.status, Status::GameOver);
    }

    #[test]
    fn test_snapshot_copies_state() {
        let state = running_state();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.snake, vec![Position::new(10, 10)]);
        assert_eq!(snapshot.head(), Position::new(10, 10));
        assert_eq!(snapshot.food, Position::new(3, 3));
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.status, Status::Running);
        assert_eq!(snapshot.grid_size, 20);
        assert_eq!(snapshot.tick_interval_ms, 100);
    }
}
