//! Text front-end - a thin presentation layer over [`crate::game::GameState`]
//!
//! Reads line commands, forwards them to the game, and renders the board as
//! text or JSON. It owns the [`crate::game::RejectionIndicator`]; the game
//! state never sees it.

pub mod command;
pub mod text;

pub use command::Command;
pub use text::{render_board, TextStyle};
