//! Piece movement rules
//!
//! Only pawns have movement rules. Every other piece type is immobile, so
//! any move request for a king, queen, rook, bishop or knight is illegal.
//! Pure functions with no side effects.

use super::board_state::BoardState;
use crate::game::pieces::{PieceColor, PieceType};
use crate::game::types::Square;

/// Check if moving the piece on `from` to `to` is legal with `turn` to move
///
/// An empty origin, identical squares, and every non-pawn piece are illegal.
/// Illegal moves are an ordinary outcome: the result is `false`, never an
/// error.
pub fn is_valid_move(board: &BoardState, turn: PieceColor, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }

    let Some(piece) = board.get(from) else {
        return false;
    };

    match piece.piece_type {
        PieceType::Pawn => is_valid_pawn_move(board, turn, piece.color, from, to),
        PieceType::King
        | PieceType::Queen
        | PieceType::Rook
        | PieceType::Bishop
        | PieceType::Knight => false,
    }
}

/// Get all squares the piece on `position` may legally move to
///
/// Built from [`is_valid_move`] so hints never disagree with validation.
pub fn get_possible_moves(board: &BoardState, turn: PieceColor, position: Square) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_valid_move(board, turn, position, to))
        .collect()
}

fn is_valid_pawn_move(
    board: &BoardState,
    turn: PieceColor,
    color: PieceColor,
    from: Square,
    to: Square,
) -> bool {
    let direction = color.pawn_direction();

    let dx = to.col() as i8 - from.col() as i8;
    let dy = to.row() as i8 - from.row() as i8;

    // Forward move
    if dx == 0 && dy == direction {
        return board.is_empty(to);
    }

    // Double move from the start row; the square in between is not consulted
    if dx == 0 && dy == 2 * direction && from.row() == color.pawn_start_row() {
        return board.is_empty(to);
    }

    // Capture diagonally
    if dx.abs() == 1 && dy == direction {
        return board
            .get_piece_color(to)
            .is_some_and(|target_color| target_color != turn);
    }

    false
}
