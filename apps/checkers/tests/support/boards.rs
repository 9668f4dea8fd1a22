//! Hand-built positions shared by the integration tests.

use checkers::{Board, PieceId, Position, Rank, Side, StandardRules};

pub fn pos(row: u8, column: u8) -> Position {
    Position::new(row, column)
}

/// First man on B3 facing Second men on C4 and E6: a forced double jump
/// (2,1) -> (4,3) -> (6,5). Second keeps a man on A8 so the game goes on, and
/// First has an idle man on B1.
pub fn double_jump() -> (StandardRules, PieceId) {
    let mut board = Board::empty();
    let jumper = board.place(pos(2, 1), Side::First, Rank::Man);
    board.place(pos(0, 1), Side::First, Rank::Man);
    board.place(pos(3, 2), Side::Second, Rank::Man);
    board.place(pos(5, 4), Side::Second, Rank::Man);
    board.place(pos(7, 0), Side::Second, Rank::Man);
    (StandardRules::with_board(board, Side::First), jumper)
}

/// First captures Second's last man with (2,1) -> (4,3).
pub fn last_capture() -> StandardRules {
    let mut board = Board::empty();
    board.place(pos(2, 1), Side::First, Rank::Man);
    board.place(pos(3, 2), Side::Second, Rank::Man);
    StandardRules::with_board(board, Side::First)
}

/// One man each: First on B3, Second on D5. Stepping B3 -> C4 hands Second
/// a capture that wipes out First.
pub fn walk_into_capture() -> StandardRules {
    let mut board = Board::empty();
    board.place(pos(2, 1), Side::First, Rank::Man);
    board.place(pos(4, 3), Side::Second, Rank::Man);
    StandardRules::with_board(board, Side::First)
}
