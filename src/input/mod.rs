pub mod handler;

pub use handler::{InputHandler, KeyAction, direction_for_key};
