//! Plays many random games and checks the board rules after every tick.

use arcade_snake::game::{
    Direction, GameConfig, GameEngine, GameState, Grid, Position, Status, occupied,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_board_rules(state: &GameState) {
    let segments = state.snake.segments();
    assert!(!segments.is_empty());

    for (i, segment) in segments.iter().enumerate() {
        assert!(state.grid.contains(*segment), "segment {:?} off the board", segment);
        assert!(
            !occupied(*segment, &segments[i + 1..]),
            "segment {:?} appears twice",
            segment
        );
    }

    assert!(state.grid.contains(state.food));
    assert!(!occupied(state.food, segments), "food {:?} on the snake", state.food);
    assert!(state.tick_interval_ms >= 50);
}

#[test]
fn random_play_keeps_board_rules() {
    let mut engine = GameEngine::with_rng(GameConfig::new(8), StdRng::seed_from_u64(2024));
    let mut steering = StdRng::seed_from_u64(99);
    let mut games_over = 0;

    for _ in 0..200 {
        let mut state = engine.start();
        assert_board_rules(&state);

        for _ in 0..500 {
            if !state.is_running() {
                break;
            }

            let turn = Direction::ALL[steering.gen_range(0..Direction::ALL.len())];
            state.set_pending_direction(turn);

            let before = state.clone();
            let result = engine.tick(&mut state);

            if result.game_over() {
                games_over += 1;
                assert_eq!(state.status, Status::GameOver);
                assert_eq!(state.snake, before.snake);
                assert_eq!(state.score, before.score);
                assert_eq!(state.food, before.food);
                break;
            }

            assert_board_rules(&state);

            // Growth law
            if state.snake.head() == before.food {
                assert!(result.ate_food);
                assert_eq!(state.snake.len(), before.snake.len() + 1);
                assert_eq!(state.score, before.score + 10);
            } else {
                assert!(!result.ate_food);
                assert_eq!(state.snake.len(), before.snake.len());
                assert_eq!(state.score, before.score);
            }

            // Speed never goes back up and shrinks by exactly one step per food
            assert!(state.tick_interval_ms <= before.tick_interval_ms);
            if result.ate_food && before.tick_interval_ms >= 52 {
                assert_eq!(state.tick_interval_ms, before.tick_interval_ms - 2);
            } else if !result.ate_food {
                assert_eq!(state.tick_interval_ms, before.tick_interval_ms);
            }
        }
    }

    assert!(games_over > 0);
}

fn clockwise(direction: Direction) -> Direction {
    match direction {
        Direction::Up => Direction::Right,
        Direction::Right => Direction::Down,
        Direction::Down => Direction::Left,
        Direction::Left => Direction::Up,
    }
}

#[test]
fn speed_reaches_floor_and_stays() {
    let mut engine = GameEngine::with_rng(GameConfig::default(), StdRng::seed_from_u64(5));
    let mut state = engine.start();
    let mut intervals = vec![state.tick_interval_ms];

    // Feed the snake by dropping food in front of it, turning clockwise at
    // each wall: right along row 10, down column 19, left along row 19, up
    for _ in 0..40 {
        let next = state.snake.head().moved_in_direction(state.direction);
        let next = if state.grid.contains(next) && !occupied(next, state.snake.segments()) {
            next
        } else {
            let turn = clockwise(state.direction);
            state.set_pending_direction(turn);
            state.snake.head().moved_in_direction(turn)
        };
        state.food = next;

        let result = engine.tick(&mut state);
        assert!(result.ate_food, "snake missed food at {:?}", next);
        intervals.push(state.tick_interval_ms);
    }

    assert_eq!(state.status, Status::Running);
    assert_eq!(state.score, 400);
    assert_eq!(state.snake.len(), 41);
    assert_eq!(&intervals[..4], &[100, 98, 96, 94]);
    assert_eq!(intervals[25], 50);
    assert!(intervals[25..].iter().all(|&ms| ms == 50));
}

#[test]
fn start_on_default_board() {
    let mut engine = GameEngine::new(GameConfig::default());
    let mut state = engine.start();

    assert_eq!(state.grid, Grid::new(20));
    assert_eq!(state.snake.segments(), &[Position::new(10, 10)]);
    assert_eq!(state.direction, Direction::Right);
    assert_eq!(state.score, 0);
    assert_eq!(state.tick_interval_ms, 100);
    assert_eq!(state.status, Status::Running);
    assert_ne!(state.food, Position::new(10, 10));

    if state.food == Position::new(11, 10) {
        state.food = Position::new(0, 0);
    }
    engine.tick(&mut state);
    assert_eq!(state.snake.segments(), &[Position::new(11, 10)]);
}

#[test]
fn wall_ends_game_without_moving() {
    let mut engine = GameEngine::new(GameConfig::default());
    let mut state = engine.start();
    for _ in 0..9 {
        state.food = Position::new(0, 0);
        engine.tick(&mut state);
    }
    assert_eq!(state.snake.head(), Position::new(19, 10));
    let before = state.snake.clone();

    engine.tick(&mut state);

    assert_eq!(state.status, Status::GameOver);
    assert_eq!(state.snake, before);
}
