//! Type definitions for board coordinates
//!
//! Provides the [`Square`] coordinate used by every other module. Rows run
//! from white's back rank (row 0) towards black's (row 7); columns run from
//! file 'a' (column 0) to file 'h' (column 7).

use std::fmt;

use serde::Serialize;

use super::error::{GameError, GameResult};

/// Number of rows and columns on the board
pub const BOARD_SIZE: u8 = 8;

/// Board square position (row, column)
///
/// Both coordinates are 0-indexed and always in `0..8`. Construction through
/// [`Square::new`] treats out-of-range input as a contract violation, while
/// [`Square::try_new`] reports it as [`GameError::OutOfBounds`] for callers
/// that handle untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square from row and column indices
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..8`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pawnboard::game::types::Square;
    ///
    /// let square = Square::new(1, 4); // e2
    /// assert_eq!(square.row(), 1);
    /// assert_eq!(square.col(), 4);
    /// ```
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "Square ({row}, {col}) is outside the 8x8 board"
        );
        Square { row, col }
    }

    /// Create a square, reporting out-of-range coordinates as an error
    pub fn try_new(row: u8, col: u8) -> GameResult<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Square { row, col })
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    /// Row index (0-7), 0 being white's back rank
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-7), 0 being file 'a'
    pub fn col(self) -> u8 {
        self.col
    }

    /// Iterate over all 64 squares, row by row
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    /// Convert to tuple (row, col)
    pub fn to_tuple(self) -> (u8, u8) {
        (self.row, self.col)
    }
}

impl From<(u8, u8)> for Square {
    fn from((row, col): (u8, u8)) -> Self {
        Square::new(row, col)
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        square.to_tuple()
    }
}

/// Formats the square in algebraic style (e.g. `e2`) for log output
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}
