//! Turn tracking
//!
//! Tracks whose move it is. The tracker has no knowledge of legality: it
//! only flips when a committed move tells it to.
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: White plays → advance() → Black plays → advance() → Move 2: White plays
//! ```

use serde::Serialize;

use crate::game::pieces::PieceColor;

/// Tracks whose turn it currently is and the current move number
///
/// Move numbers follow standard chess notation: a "move" is White's turn
/// plus Black's reply, so the number increments only after Black moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentTurn {
    pub color: PieceColor,
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            color: PieceColor::White,
            move_number: 1,
        }
    }
}

impl CurrentTurn {
    /// The side to move
    pub fn current(&self) -> PieceColor {
        self.color
    }

    /// Switch to the other player's turn
    pub fn advance(&mut self) {
        self.color = match self.color {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => {
                self.move_number += 1;
                PieceColor::White
            }
        };
    }

    /// Back to White on move 1
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Turn indicator text, e.g. `"White's Turn"`
    pub fn label(&self) -> String {
        format!("{}'s Turn", self.color)
    }
}
