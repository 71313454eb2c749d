//! Plain-text board rendering
//!
//! Draws the board with Black at the top, marks the selected origin with
//! brackets, highlighted moves with `*` and a flagged rejection with `!`.

use std::fmt::Write;

use web_time::Instant;

use crate::game::resources::RejectionIndicator;
use crate::game::state::GameState;
use crate::game::types::{Square, BOARD_SIZE};

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Use chess symbols instead of `wP`-style tags
    pub glyphs: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { glyphs: true }
    }
}

pub fn render_board(
    state: &GameState,
    rejection: &RejectionIndicator,
    now: Instant,
    style: TextStyle,
) -> String {
    let selection = state.selection();
    let rejected = rejection.active(now);
    let mut out = String::new();

    for row in (0..BOARD_SIZE).rev() {
        let _ = write!(out, "{} ", row);
        for col in 0..BOARD_SIZE {
            let square = Square::new(row, col);
            let body = match state.board().get(square) {
                Some(piece) if style.glyphs => format!("{} ", piece.glyph()),
                Some(piece) => piece.to_string(),
                None => "..".to_string(),
            };
            let (open, close) = if selection.origin() == Some(square) {
                ('[', ']')
            } else if rejected == Some(square) {
                ('!', '!')
            } else if selection.possible_moves().contains(&square) {
                ('*', '*')
            } else {
                (' ', ' ')
            };
            let _ = write!(out, "{open}{body}{close}");
        }
        out.push('\n');
    }

    out.push_str("  ");
    for col in 0..BOARD_SIZE {
        let _ = write!(out, " {col}  ");
    }
    out.push('\n');
    out.push_str(&state.turn().label());
    out.push('\n');
    out
}
