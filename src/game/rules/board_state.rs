//! Board state representation for move validation
//!
//! A plain 8x8 container of occupants. It performs no validation of its own:
//! legality lives in [`super::piece_moves`], and the only way occupancy
//! changes is through [`BoardState::set`].

use serde::Serialize;

use crate::game::pieces::{Piece, PieceColor, PieceType, BACK_ROW};
use crate::game::types::{Square, BOARD_SIZE};

/// The 8x8 grid of occupants, indexed `[row][col]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardState {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoardState {
    /// A board with no pieces on it
    pub fn empty() -> Self {
        BoardState {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The standard starting layout: 32 pieces, white on rows 0-1
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [PieceColor::White, PieceColor::Black] {
            for (col, &piece_type) in BACK_ROW.iter().enumerate() {
                let col = col as u8;
                board.set(
                    Square::new(color.back_row(), col),
                    Some(Piece::new(color, piece_type)),
                );
                board.set(
                    Square::new(color.pawn_start_row(), col),
                    Some(Piece::pawn(color)),
                );
            }
        }
        board
    }

    /// Build a board from explicit placements, everything else empty
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Self::empty();
        for (square, piece) in pieces {
            board.set(square, Some(piece));
        }
        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    pub fn set(&mut self, square: Square, occupant: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = occupant;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn get_piece_color(&self, square: Square) -> Option<PieceColor> {
        self.get(square).map(|piece| piece.color)
    }

    /// All occupied squares with their pieces, row by row
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn occupant_count(&self) -> usize {
        self.occupants().count()
    }

    /// Number of pieces of the given type, both sides combined
    pub fn count_type(&self, piece_type: PieceType) -> usize {
        self.occupants()
            .filter(|(_, piece)| piece.piece_type == piece_type)
            .count()
    }
}
