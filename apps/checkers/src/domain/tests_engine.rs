use crate::domain::board::Board;
use crate::domain::engine::StandardRules;
use crate::domain::moves::Move;
use crate::domain::rules::RulesProvider;
use crate::domain::types::{PieceId, Position, Rank, Side};
use crate::errors::domain::{DomainError, ValidationKind};

fn pos(row: u8, column: u8) -> Position {
    Position::new(row, column)
}

/// First man on B3 with Second men on C4 and E6: a forced double jump.
fn double_jump_position() -> (StandardRules, PieceId) {
    let mut board = Board::empty();
    let jumper = board.place(pos(2, 1), Side::First, Rank::Man);
    board.place(pos(3, 2), Side::Second, Rank::Man);
    board.place(pos(5, 4), Side::Second, Rank::Man);
    board.place(pos(7, 0), Side::Second, Rank::Man);
    (StandardRules::with_board(board, Side::First), jumper)
}

#[test]
fn opening_has_seven_moves_per_side() {
    let rules = StandardRules::new();
    assert_eq!(rules.legal_moves(Side::First).len(), 7);
    assert_eq!(rules.legal_moves(Side::Second).len(), 7);
    assert!(rules.legal_moves(Side::First).iter().all(|mv| !mv.is_capture()));
}

#[test]
fn simple_step_finishes_after_one_hop() {
    let mut rules = StandardRules::new();
    let piece = rules.piece_at(pos(2, 3)).unwrap();
    assert_eq!(
        rules.legal_destinations(piece.id, &[]),
        vec![pos(3, 2), pos(3, 4)]
    );

    rules.commit_partial_move(piece.id, pos(3, 4)).unwrap();
    assert!(rules.legal_destinations(piece.id, &[pos(3, 4)]).is_empty());

    let mv = Move::new(piece.id, pos(2, 3), vec![pos(3, 4)]);
    rules.commit_finished_move(piece.id, &mv).unwrap();
    assert_eq!(rules.history().len(), 1);
    assert!(!rules.move_in_progress());
    assert_eq!(rules.position_of(piece.id), Some(pos(3, 4)));
}

#[test]
fn capture_is_mandatory() {
    let mut board = Board::empty();
    let jumper = board.place(pos(2, 1), Side::First, Rank::Man);
    let idle = board.place(pos(2, 5), Side::First, Rank::Man);
    board.place(pos(3, 2), Side::Second, Rank::Man);
    let rules = StandardRules::with_board(board, Side::First);

    assert_eq!(rules.legal_destinations(jumper, &[]), vec![pos(4, 3)]);
    assert!(rules.legal_destinations(idle, &[]).is_empty());
    let moves = rules.legal_moves(Side::First);
    assert_eq!(moves.len(), 1);
    assert!(moves[0].is_capture());
}

#[test]
fn double_jump_continues_until_exhausted() {
    let (mut rules, jumper) = double_jump_position();

    assert_eq!(rules.legal_destinations(jumper, &[]), vec![pos(4, 3)]);
    rules.commit_partial_move(jumper, pos(4, 3)).unwrap();
    assert!(rules.piece_at(pos(3, 2)).is_none(), "jumped piece is removed");

    assert_eq!(rules.legal_destinations(jumper, &[pos(4, 3)]), vec![pos(6, 5)]);
    rules.commit_partial_move(jumper, pos(6, 5)).unwrap();
    assert!(rules
        .legal_destinations(jumper, &[pos(4, 3), pos(6, 5)])
        .is_empty());

    let mv = Move::new(jumper, pos(2, 1), vec![pos(4, 3), pos(6, 5)]);
    rules.commit_finished_move(jumper, &mv).unwrap();
    assert_eq!(rules.captures_by(Side::First), 2);
    assert_eq!(rules.board().count(Side::Second), 1);
    assert_eq!(rules.history()[0].captured, vec![pos(3, 2), pos(5, 4)]);
}

#[test]
fn full_moves_encode_whole_chain() {
    let (rules, jumper) = double_jump_position();
    let moves = rules.legal_moves(Side::First);
    assert_eq!(
        moves,
        vec![Move::new(jumper, pos(2, 1), vec![pos(4, 3), pos(6, 5)])]
    );
}

#[test]
fn finishing_an_open_capture_is_rejected() {
    let (mut rules, jumper) = double_jump_position();
    rules.commit_partial_move(jumper, pos(4, 3)).unwrap();
    let early = Move::new(jumper, pos(2, 1), vec![pos(4, 3)]);
    let err = rules.commit_finished_move(jumper, &early).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::UnfinishedCapture, _)
    ));
    assert!(rules.move_in_progress());
}

#[test]
fn illegal_hop_is_rejected_without_side_effects() {
    let mut rules = StandardRules::new();
    let piece = rules.piece_at(pos(2, 3)).unwrap();
    let before = rules.board().clone();
    let err = rules.commit_partial_move(piece.id, pos(4, 5)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::IllegalHop, _)
    ));
    assert_eq!(rules.board(), &before);
    assert!(!rules.move_in_progress());
}

#[test]
fn finishing_without_hops_is_rejected() {
    let mut rules = StandardRules::new();
    let piece = rules.piece_at(pos(2, 3)).unwrap();
    let mv = Move::new(piece.id, pos(2, 3), vec![pos(3, 4)]);
    let err = rules.commit_finished_move(piece.id, &mv).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::NoMoveInProgress, _)
    ));
}

#[test]
fn mismatched_finish_is_rejected() {
    let mut rules = StandardRules::new();
    let piece = rules.piece_at(pos(2, 3)).unwrap();
    rules.commit_partial_move(piece.id, pos(3, 4)).unwrap();
    let wrong = Move::new(piece.id, pos(2, 3), vec![pos(3, 2)]);
    let err = rules.commit_finished_move(piece.id, &wrong).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MoveMismatch, _)
    ));
}

#[test]
fn opponent_pieces_have_no_destinations() {
    let rules = StandardRules::new();
    let black = rules.piece_at(pos(5, 2)).unwrap();
    assert_eq!(black.side, Side::Second);
    assert!(rules.legal_destinations(black.id, &[]).is_empty());
}

#[test]
fn man_is_crowned_on_far_row_and_stops() {
    let mut board = Board::empty();
    let runner = board.place(pos(5, 2), Side::First, Rank::Man);
    board.place(pos(6, 3), Side::Second, Rank::Man);
    // A king on E8 could jump F7 backwards; a man crowned this turn cannot.
    board.place(pos(6, 5), Side::Second, Rank::Man);
    let mut rules = StandardRules::with_board(board, Side::First);

    rules.commit_partial_move(runner, pos(7, 4)).unwrap();
    assert!(rules.legal_destinations(runner, &[pos(7, 4)]).is_empty());

    let mv = Move::new(runner, pos(5, 2), vec![pos(7, 4)]);
    rules.commit_finished_move(runner, &mv).unwrap();
    assert_eq!(rules.piece_at(pos(7, 4)).unwrap().rank, Rank::King);
    assert!(rules.history()[0].crowned);
}

#[test]
fn kings_move_backwards() {
    let mut board = Board::empty();
    let king = board.place(pos(4, 3), Side::Second, Rank::King);
    board.place(pos(0, 1), Side::First, Rank::Man);
    let rules = StandardRules::with_board(board, Side::Second);
    assert_eq!(
        rules.legal_destinations(king, &[]),
        vec![pos(3, 2), pos(3, 4), pos(5, 2), pos(5, 4)]
    );
}

#[test]
fn blocked_side_has_no_legal_move() {
    let mut board = Board::empty();
    board.place(pos(0, 1), Side::First, Rank::Man);
    board.place(pos(1, 0), Side::Second, Rank::Man);
    board.place(pos(1, 2), Side::Second, Rank::Man);
    board.place(pos(2, 3), Side::Second, Rank::Man);
    let rules = StandardRules::with_board(board, Side::First);
    assert!(!rules.has_legal_move(Side::First));
    assert!(rules.legal_moves(Side::First).is_empty());
    assert!(rules.has_legal_move(Side::Second));
}

#[test]
fn toggle_flips_active_side() {
    let mut rules = StandardRules::new();
    assert_eq!(rules.active_side(), Side::First);
    rules.toggle_active_side();
    assert_eq!(rules.active_side(), Side::Second);
}
