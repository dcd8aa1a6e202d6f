pub mod game_clock;

pub use game_clock::GameClock;
