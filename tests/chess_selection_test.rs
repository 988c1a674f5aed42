//! Tests for the click-driven selection state machine.

use strictly_chess::{
    Board, BoardError, BoardState, Cell, ChessInvariants, InvariantSet, Kind, Notification, Piece, Selection,
    SelectionController, Side, Square, Transition,
};

fn cell(row: i32, col: i32) -> Cell {
    Cell::new(row, col).expect("valid cell")
}

#[test]
fn test_scenario_pawn_advance() {
    let mut controller = SelectionController::new();

    let out = controller.on_cell_clicked(6, 0).unwrap();
    assert_eq!(out, vec![Notification::HighlightCell { cell: cell(6, 0) }]);
    assert_eq!(controller.selection(), Selection::PieceSelected(cell(6, 0)));

    let out = controller.on_cell_clicked(4, 0).unwrap();
    let pawn = Square::Occupied(Piece::new(Side::White, Kind::Pawn));
    assert_eq!(
        out,
        vec![
            Notification::UnhighlightCell { cell: cell(6, 0) },
            Notification::RedrawCell { cell: cell(6, 0), square: Square::Empty },
            Notification::RedrawCell { cell: cell(4, 0), square: pawn },
        ]
    );
    assert_eq!(controller.state().get(4, 0).unwrap(), pawn);
    assert_eq!(controller.state().get(6, 0).unwrap(), Square::Empty);
    assert_eq!(controller.state().current_turn(), Side::Black);
    assert_eq!(controller.selection(), Selection::Idle);
}

#[test]
fn test_scenario_reselect_same_side() {
    let mut controller = SelectionController::new();
    controller.on_cell_clicked(6, 0).unwrap();
    controller.on_cell_clicked(4, 0).unwrap();

    controller.on_cell_clicked(1, 4).unwrap();
    assert_eq!(controller.selection(), Selection::PieceSelected(cell(1, 4)));

    let out = controller.on_cell_clicked(1, 3).unwrap();
    assert_eq!(
        out,
        vec![
            Notification::UnhighlightCell { cell: cell(1, 4) },
            Notification::HighlightCell { cell: cell(1, 3) },
        ]
    );
    assert_eq!(controller.selection(), Selection::PieceSelected(cell(1, 3)));
    assert_eq!(controller.state().current_turn(), Side::Black);
}

#[test]
fn test_scenario_empty_click_ignored() {
    let mut controller = SelectionController::new();
    let before = controller.state().clone();

    assert!(controller.on_cell_clicked(4, 4).unwrap().is_empty());
    assert_eq!(controller.selection(), Selection::Idle);
    assert_eq!(controller.state(), &before);
}

#[test]
fn test_scenario_enemy_click_ignored() {
    let mut controller = SelectionController::new();
    let before = controller.state().clone();

    assert!(controller.on_cell_clicked(1, 0).unwrap().is_empty());
    assert_eq!(controller.selection(), Selection::Idle);
    assert_eq!(controller.state(), &before);
}

#[test]
fn test_clicking_selected_cell_again_keeps_selection() {
    let mut controller = SelectionController::new();
    controller.on_cell_clicked(7, 4).unwrap();
    for _ in 0..3 {
        controller.on_cell_clicked(7, 4).unwrap();
        assert_eq!(controller.selection(), Selection::PieceSelected(cell(7, 4)));
    }
    assert_eq!(controller.state().current_turn(), Side::White);
}

#[test]
fn test_capture_by_move() {
    let mut controller = SelectionController::new();
    controller.on_cell_clicked(7, 3).unwrap();
    controller.on_cell_clicked(0, 4).unwrap();

    assert_eq!(
        controller.state().get(0, 4).unwrap(),
        Square::Occupied(Piece::new(Side::White, Kind::Queen))
    );
    assert_eq!(controller.state().piece_count(), 31);
    assert_eq!(controller.state().current_turn(), Side::Black);
}

#[test]
fn test_turn_alternates_over_a_game() {
    let mut controller = SelectionController::new();
    let moves = [
        ((6, 4), (4, 4)),
        ((1, 4), (3, 4)),
        ((7, 6), (5, 5)),
        ((0, 1), (2, 2)),
        ((7, 5), (3, 2)),
        ((0, 6), (2, 5)),
    ];
    let mut expected = Side::White;
    let mut count = controller.state().piece_count();

    for ((fr, fc), (tr, tc)) in moves {
        assert_eq!(controller.state().current_turn(), expected);

        let before = controller.state().clone();

        // Noise that must not affect the turn.
        controller.on_cell_clicked(4, 7).unwrap();
        controller.on_cell_clicked(fr, fc).unwrap();
        controller.on_cell_clicked(fr, fc).unwrap();
        controller.on_cell_clicked(tr, tc).unwrap();

        expected = expected.opponent();
        assert_eq!(controller.state().current_turn(), expected);
        assert!(controller.state().piece_count() <= count);
        count = controller.state().piece_count();
        assert!(ChessInvariants::check_all(&Transition::new(&before, controller.state())).is_ok());
    }
}

#[test]
fn test_moves_on_custom_board_with_extra_pieces() {
    let white_queen = Square::Occupied(Piece::new(Side::White, Kind::Queen));
    let black_queen = Square::Occupied(Piece::new(Side::Black, Kind::Queen));
    let black_rook = Square::Occupied(Piece::new(Side::Black, Kind::Rook));

    let mut state = BoardState::from_board(Board::empty(), Side::Black);
    for col in 0..4 {
        state.set(4, col, white_queen).unwrap();
        state.set(2, col, black_queen).unwrap();
    }
    state.set(0, 7, black_rook).unwrap();
    let mut controller = SelectionController::with_state(state);
    assert_eq!(controller.state().piece_count(), 9);

    // Black moves first on this board; a white queen is not selectable.
    assert!(controller.on_cell_clicked(4, 0).unwrap().is_empty());
    controller.on_cell_clicked(0, 7).unwrap();
    let out = controller.on_cell_clicked(0, 6).unwrap();
    assert_eq!(
        out,
        vec![
            Notification::UnhighlightCell { cell: cell(0, 7) },
            Notification::RedrawCell { cell: cell(0, 7), square: Square::Empty },
            Notification::RedrawCell { cell: cell(0, 6), square: black_rook },
        ]
    );
    assert_eq!(controller.state().current_turn(), Side::White);
    assert_eq!(controller.state().piece_count(), 9);

    // White queen takes a black queen.
    controller.on_cell_clicked(4, 1).unwrap();
    let out = controller.on_cell_clicked(2, 1).unwrap();
    assert_eq!(
        out,
        vec![
            Notification::UnhighlightCell { cell: cell(4, 1) },
            Notification::RedrawCell { cell: cell(4, 1), square: Square::Empty },
            Notification::RedrawCell { cell: cell(2, 1), square: white_queen },
        ]
    );
    assert_eq!(controller.state().current_turn(), Side::Black);
    assert_eq!(controller.state().piece_count(), 8);

    // Extra pieces added mid-game through the board state stay playable.
    let mut state = controller.state().clone();
    state.set(7, 7, black_queen).unwrap();
    let mut controller = SelectionController::with_state(state);
    controller.on_cell_clicked(7, 7).unwrap();
    controller.on_cell_clicked(4, 3).unwrap();
    assert_eq!(controller.state().get(4, 3).unwrap(), black_queen);
    assert_eq!(controller.state().get(7, 7).unwrap(), Square::Empty);
    assert_eq!(controller.state().current_turn(), Side::White);
    assert_eq!(controller.state().piece_count(), 8);
}

#[test]
fn test_off_board_click_is_error() {
    let mut controller = SelectionController::new();
    for (row, col) in [(-1, 0), (8, 0), (0, -1), (0, 8)] {
        assert_eq!(
            controller.on_cell_clicked(row, col),
            Err(BoardError::OutOfBounds { row, col })
        );
    }
    assert_eq!(controller.selection(), Selection::Idle);
}
