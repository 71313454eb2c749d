//! Game Flow Integration Tests
//!
//! Tests for full game flows through the public API:
//! - Starting layout and turn order
//! - Two-phase selection and move attempts
//! - Captures and rejected moves
//! - Win condition and automatic reset

use pawnboard::game::pieces::BACK_ROW;
use pawnboard::game::{
    ClickOutcome, GameOverState, GameState, MoveOutcome, OriginOutcome, Piece, PieceColor,
    PieceType, Selection, Square,
};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

/// Play a move through the click protocol and return its outcome
fn play(game: &mut GameState, from: (u8, u8), to: (u8, u8)) -> MoveOutcome {
    assert_eq!(
        game.click(from.into()),
        ClickOutcome::Origin(OriginOutcome::Selected),
        "origin {from:?} should be selectable"
    );
    match game.click(to.into()) {
        ClickOutcome::Move { outcome, .. } => outcome,
        other => panic!("second click should attempt a move, got {other:?}"),
    }
}

// ============================================================================
// Initial State Tests
// ============================================================================

#[test]
fn test_initial_layout() {
    let game = GameState::new();
    let board = game.board();

    for col in 0..8u8 {
        assert_eq!(board.get(sq(1, col)), Some(Piece::pawn(PieceColor::White)));
        assert_eq!(board.get(sq(6, col)), Some(Piece::pawn(PieceColor::Black)));
        assert_eq!(
            board.get(sq(0, col)),
            Some(Piece::new(PieceColor::White, BACK_ROW[col as usize]))
        );
        assert_eq!(
            board.get(sq(7, col)),
            Some(Piece::new(PieceColor::Black, BACK_ROW[col as usize]))
        );
    }
    assert_eq!(board.occupant_count(), 32);
    assert_eq!(game.turn().current(), PieceColor::White);
    assert_eq!(game.selection(), &Selection::NoSelection);
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_pawn_single_advance_flips_turn() {
    let mut game = GameState::new();

    let outcome = play(&mut game, (1, 4), (2, 4));

    let MoveOutcome::Accepted(report) = outcome else {
        panic!("single advance should be accepted");
    };
    assert_eq!(report.record.from, sq(1, 4));
    assert_eq!(report.record.to, sq(2, 4));
    assert_eq!(report.record.moved, Some(Piece::pawn(PieceColor::White)));
    assert_eq!(report.record.captured, None);
    assert_eq!(report.game_over, GameOverState::Playing);

    assert!(game.board().is_empty(sq(1, 4)));
    assert_eq!(game.board().get(sq(2, 4)), Some(Piece::pawn(PieceColor::White)));
    assert_eq!(game.turn().current(), PieceColor::Black);
    assert!(!game.selection().is_selected());
}

#[test]
fn test_sides_alternate() {
    let mut game = GameState::new();

    assert!(play(&mut game, (1, 4), (3, 4)).is_accepted());
    assert!(play(&mut game, (6, 3), (4, 3)).is_accepted());
    assert_eq!(game.turn().current(), PieceColor::White);
    assert_eq!(game.turn().move_number, 2);
}

#[test]
fn test_opponent_and_empty_selection_ignored() {
    let mut game = GameState::new();

    assert_eq!(game.select_origin(sq(6, 0)), OriginOutcome::Ignored);
    assert_eq!(game.select_origin(sq(4, 4)), OriginOutcome::Ignored);
    assert_eq!(game.selection(), &Selection::NoSelection);

    assert_eq!(
        game.click(sq(6, 0)),
        ClickOutcome::Origin(OriginOutcome::Ignored),
        "Clicking an opponent piece is not a destination"
    );
    assert!(!game.selection().is_selected());
}

#[test]
fn test_selection_records_move_hints() {
    let mut game = GameState::new();

    assert_eq!(game.select_origin(sq(1, 2)), OriginOutcome::Selected);
    assert_eq!(game.selection().origin(), Some(sq(1, 2)));
    assert_eq!(game.selection().possible_moves(), &[sq(2, 2), sq(3, 2)]);

    game.reset();
    assert_eq!(game.select_origin(sq(0, 1)), OriginOutcome::Selected);
    assert!(
        game.selection().possible_moves().is_empty(),
        "Knights have no moves to highlight"
    );
}

// ============================================================================
// Piece Movement Tests
// ============================================================================

#[test]
fn test_double_advance_only_from_start_row() {
    let mut game = GameState::new();

    assert!(play(&mut game, (1, 4), (2, 4)).is_accepted());
    assert!(play(&mut game, (6, 0), (5, 0)).is_accepted());

    let before = game.clone();
    assert_eq!(play(&mut game, (2, 4), (4, 4)), MoveOutcome::Rejected);
    assert_eq!(game.board(), before.board());
    assert_eq!(game.turn(), before.turn());
}

#[test]
fn test_double_advance_jumps_intermediate_piece() {
    let mut game = GameState::new();

    // Walk a black pawn down to (2, 5), right in front of White's f-pawn.
    assert!(play(&mut game, (1, 0), (2, 0)).is_accepted());
    assert!(play(&mut game, (6, 5), (4, 5)).is_accepted());
    assert!(play(&mut game, (2, 0), (3, 0)).is_accepted());
    assert!(play(&mut game, (4, 5), (3, 5)).is_accepted());
    assert!(play(&mut game, (3, 0), (4, 0)).is_accepted());
    assert!(play(&mut game, (3, 5), (2, 5)).is_accepted());

    assert!(play(&mut game, (1, 5), (3, 5)).is_accepted());
    assert_eq!(game.board().get(sq(3, 5)), Some(Piece::pawn(PieceColor::White)));
    assert_eq!(game.board().get(sq(2, 5)), Some(Piece::pawn(PieceColor::Black)));
}

#[test]
fn test_diagonal_capture_removes_piece() {
    let mut game = GameState::new();

    assert!(play(&mut game, (1, 3), (3, 3)).is_accepted());
    assert!(play(&mut game, (6, 4), (4, 4)).is_accepted());

    let outcome = play(&mut game, (3, 3), (4, 4));
    let MoveOutcome::Accepted(report) = outcome else {
        panic!("capture should be accepted");
    };
    assert_eq!(report.record.captured, Some(Piece::pawn(PieceColor::Black)));
    assert_eq!(game.board().get(sq(4, 4)), Some(Piece::pawn(PieceColor::White)));
    assert_eq!(game.board().occupant_count(), 31);
}

#[test]
fn test_diagonal_onto_empty_or_own_piece_rejected() {
    let mut game = GameState::new();

    assert_eq!(play(&mut game, (1, 3), (2, 4)), MoveOutcome::Rejected);
    assert_eq!(
        game.attempt_move(sq(0, 3), sq(1, 4)),
        MoveOutcome::Rejected,
        "Queens cannot move, let alone capture their own pawn"
    );
    assert_eq!(game.board().occupant_count(), 32);
}

#[test]
fn test_non_pawn_pieces_never_move() {
    let mut game = GameState::new();

    // Open a few lines so the knight, bishop, queen and king have empty targets.
    assert!(play(&mut game, (1, 1), (3, 1)).is_accepted());
    assert!(play(&mut game, (6, 7), (5, 7)).is_accepted());
    assert!(play(&mut game, (1, 4), (3, 4)).is_accepted());
    assert!(play(&mut game, (5, 7), (4, 7)).is_accepted());

    let attempts: [((u8, u8), (u8, u8)); 5] = [
        ((0, 0), (1, 0)), // rook
        ((0, 1), (2, 2)), // knight
        ((0, 2), (1, 1)), // bishop
        ((0, 3), (1, 4)), // queen
        ((0, 4), (1, 4)), // king
    ];
    for (from, to) in attempts {
        let before = game.clone();
        assert_eq!(game.attempt_move(from.into(), to.into()), MoveOutcome::Rejected);
        assert_eq!(game, before, "Rejected move {from:?} -> {to:?} changed state");
    }
}

#[test]
fn test_attempt_move_requires_own_piece() {
    let mut game = GameState::new();

    assert_eq!(game.attempt_move(sq(6, 4), sq(5, 4)), MoveOutcome::Rejected);
    assert_eq!(game.board().get(sq(6, 4)), Some(Piece::pawn(PieceColor::Black)));
    assert_eq!(game.turn().current(), PieceColor::White);
}

// ============================================================================
// Rejection Tests
// ============================================================================

#[test]
fn test_repeated_rejection_is_idempotent() {
    let mut game = GameState::new();
    let initial = game.clone();

    assert_eq!(play(&mut game, (1, 4), (4, 4)), MoveOutcome::Rejected);
    assert_eq!(game, initial);
    assert_eq!(play(&mut game, (1, 4), (4, 4)), MoveOutcome::Rejected);
    assert_eq!(game, initial);
}

#[test]
fn test_clicking_origin_again_is_a_rejected_move() {
    let mut game = GameState::new();

    assert_eq!(play(&mut game, (1, 4), (1, 4)), MoveOutcome::Rejected);
    assert!(!game.selection().is_selected());
}

#[test]
fn test_clicking_other_own_piece_is_a_rejected_move() {
    let mut game = GameState::new();

    assert_eq!(play(&mut game, (1, 4), (1, 5)), MoveOutcome::Rejected);
    assert!(!game.selection().is_selected());
    assert_eq!(game.turn().current(), PieceColor::White);
}

// ============================================================================
// Win Condition Tests
// ============================================================================

#[test]
fn test_king_capture_wins_and_resets() {
    let mut game = GameState::new();

    // White's e-pawn walks up and takes d7, Black shuffles its a-pawn.
    assert!(play(&mut game, (1, 4), (3, 4)).is_accepted());
    assert!(play(&mut game, (6, 0), (5, 0)).is_accepted());
    assert!(play(&mut game, (3, 4), (4, 4)).is_accepted());
    assert!(play(&mut game, (5, 0), (4, 0)).is_accepted());
    assert!(play(&mut game, (4, 4), (5, 4)).is_accepted());
    assert!(play(&mut game, (4, 0), (3, 0)).is_accepted());
    assert!(play(&mut game, (5, 4), (6, 3)).is_accepted());
    assert!(play(&mut game, (3, 0), (2, 0)).is_accepted());

    let outcome = play(&mut game, (6, 3), (7, 4));
    let MoveOutcome::Accepted(report) = outcome else {
        panic!("capturing the king should be accepted");
    };
    assert_eq!(
        report.record.captured,
        Some(Piece::new(PieceColor::Black, PieceType::King))
    );
    assert_eq!(report.game_over, GameOverState::WhiteWon);
    assert_eq!(report.game_over.message(), "White wins!");

    assert_eq!(game, GameState::new(), "Game resets immediately after a win");
}

#[test]
fn test_black_king_capture_wins() {
    let mut game = GameState::new();

    assert!(play(&mut game, (1, 7), (2, 7)).is_accepted());
    assert!(play(&mut game, (6, 4), (4, 4)).is_accepted());
    assert!(play(&mut game, (2, 7), (3, 7)).is_accepted());
    assert!(play(&mut game, (4, 4), (3, 4)).is_accepted());
    assert!(play(&mut game, (3, 7), (4, 7)).is_accepted());
    assert!(play(&mut game, (3, 4), (2, 4)).is_accepted());
    assert!(play(&mut game, (4, 7), (5, 7)).is_accepted());
    assert!(play(&mut game, (2, 4), (1, 3)).is_accepted());
    assert!(play(&mut game, (5, 7), (6, 6)).is_accepted());

    let outcome = play(&mut game, (1, 3), (0, 4));
    let MoveOutcome::Accepted(report) = outcome else {
        panic!("capturing the king should be accepted");
    };
    assert_eq!(report.game_over, GameOverState::BlackWon);
    assert_eq!(report.game_over.winner(), Some(PieceColor::Black));
    assert_eq!(game.turn().current(), PieceColor::White);
    assert_eq!(game.board().occupant_count(), 32);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = GameState::new();
    assert!(play(&mut game, (1, 4), (3, 4)).is_accepted());
    assert_eq!(game.select_origin(sq(6, 4)), OriginOutcome::Selected);

    game.reset();

    assert_eq!(game, GameState::new());
    assert_eq!(game.turn().label(), "White's Turn");
}

#[test]
fn test_json_snapshot_shape() {
    let mut game = GameState::new();
    game.select_origin(sq(1, 0));

    let value = serde_json::to_value(&game).unwrap();
    assert_eq!(value["turn"]["color"], "white");
    assert_eq!(value["selection"]["state"], "origin_selected");
    assert_eq!(value["selection"]["origin"]["row"], 1);
    assert_eq!(value["board"]["squares"][0][4]["piece_type"], "king");
    assert!(value["board"]["squares"][4][4].is_null());
}
