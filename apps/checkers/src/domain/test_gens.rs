// Proptest generators for domain types.
// Boards are built square by square so every generated position is valid by
// construction: pieces only on playable squares, no man on its crowning row.

use proptest::prelude::*;

use crate::domain::board::{crowning_row, is_playable, Board, BOARD_SIZE};
use crate::domain::types::{Position, Rank, Side};

pub fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::First), Just(Side::Second)]
}

/// What to put on one playable square. Empty squares are the most likely.
fn occupant() -> impl Strategy<Value = Option<(Side, Rank)>> {
    prop_oneof![
        6 => Just(None),
        2 => Just(Some((Side::First, Rank::Man))),
        2 => Just(Some((Side::Second, Rank::Man))),
        1 => Just(Some((Side::First, Rank::King))),
        1 => Just(Some((Side::Second, Rank::King))),
    ]
}

pub fn playable_squares() -> Vec<Position> {
    (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |column| Position::new(row, column)))
        .filter(|pos| is_playable(*pos))
        .collect()
}

/// A sparse mid-game board.
pub fn board() -> impl Strategy<Value = Board> {
    let squares = playable_squares();
    proptest::collection::vec(occupant(), squares.len()).prop_map(move |cells| {
        let mut board = Board::empty();
        for (pos, cell) in squares.iter().zip(cells) {
            if let Some((side, rank)) = cell {
                let rank = if rank == Rank::Man && pos.row == crowning_row(side) {
                    Rank::King
                } else {
                    rank
                };
                board.place(*pos, side, rank);
            }
        }
        board
    })
}

/// Indices used to pick among legal moves during random playouts.
pub fn move_choices(max_len: usize) -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(any::<usize>(), 1..=max_len)
}

/// Any square on the board, playable or not.
pub fn square() -> impl Strategy<Value = Position> {
    (0..BOARD_SIZE, 0..BOARD_SIZE).prop_map(|(row, column)| Position::new(row, column))
}
