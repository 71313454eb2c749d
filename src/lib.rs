pub mod game;
pub mod ui;

pub use game::{GameState, Square};
