//! Piece values and the standard starting layout
//!
//! A piece is a plain `{color, piece_type}` value. It carries no identity or
//! position of its own: "the piece on e2" is whatever occupies that square.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The other side
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row delta of a forward pawn step: white moves up the rows, black down
    pub fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }

    /// Row the side's pawns start on
    pub fn pawn_start_row(self) -> u8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => 6,
        }
    }

    /// Row the side's back-rank pieces start on
    pub fn back_row(self) -> u8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }

    /// Single-letter prefix used by the plain-text renderer
    pub fn letter(self) -> char {
        match self {
            PieceColor::White => 'w',
            PieceColor::Black => 'b',
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => f.write_str("White"),
            PieceColor::Black => f.write_str("Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    pub fn letter(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
}

impl Piece {
    pub const fn new(color: PieceColor, piece_type: PieceType) -> Self {
        Piece { color, piece_type }
    }

    pub const fn pawn(color: PieceColor) -> Self {
        Piece::new(color, PieceType::Pawn)
    }

    /// Board glyph for the piece
    ///
    /// The white king uses a crown so it stays distinguishable from the
    /// black king on dark terminal themes.
    pub fn glyph(self) -> char {
        match (self.color, self.piece_type) {
            (PieceColor::White, PieceType::King) => '👑',
            (PieceColor::White, PieceType::Queen) => '♕',
            (PieceColor::White, PieceType::Rook) => '♖',
            (PieceColor::White, PieceType::Bishop) => '♗',
            (PieceColor::White, PieceType::Knight) => '♘',
            (PieceColor::White, PieceType::Pawn) => '♙',
            (PieceColor::Black, PieceType::King) => '♚',
            (PieceColor::Black, PieceType::Queen) => '♛',
            (PieceColor::Black, PieceType::Rook) => '♜',
            (PieceColor::Black, PieceType::Bishop) => '♝',
            (PieceColor::Black, PieceType::Knight) => '♞',
            (PieceColor::Black, PieceType::Pawn) => '♟',
        }
    }
}

/// Two-letter tag such as `wP` or `bK`
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.piece_type.letter())
    }
}

/// Back-rank order from column 0 to column 7, shared by both sides
pub const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];
