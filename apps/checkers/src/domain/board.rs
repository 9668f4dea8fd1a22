//! Square grid and standard starting layout.

use crate::domain::types::{Piece, PieceId, Position, Rank, Side};

pub const BOARD_SIZE: u8 = 8;

/// Rows each side fills with men at the start of a game.
pub const HOME_ROWS: u8 = 3;

/// Pieces stand and move only on squares where `row + column` is odd.
#[inline]
pub fn is_playable(pos: Position) -> bool {
    (pos.row + pos.column) % 2 == 1
}

/// Row on which a man of `side` is crowned.
#[inline]
pub fn crowning_row(side: Side) -> u8 {
    match side {
        Side::First => BOARD_SIZE - 1,
        Side::Second => 0,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    next_id: u8,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            next_id: 0,
        }
    }

    /// Twelve men per side on the playable squares of their three home rows.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            let side = if row < HOME_ROWS {
                Side::First
            } else if row >= BOARD_SIZE - HOME_ROWS {
                Side::Second
            } else {
                continue;
            };
            for column in 0..BOARD_SIZE {
                let pos = Position::new(row, column);
                if is_playable(pos) {
                    board.place(pos, side, Rank::Man);
                }
            }
        }
        board
    }

    pub const fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Put a new piece on `pos`, replacing whatever stood there.
    pub fn place(&mut self, pos: Position, side: Side, rank: Rank) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.squares[pos.row as usize][pos.column as usize] = Some(Piece { id, side, rank });
        id
    }

    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.column as usize))
            .copied()
            .flatten()
    }

    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.squares
            .get_mut(pos.row as usize)
            .and_then(|row| row.get_mut(pos.column as usize))
            .and_then(Option::take)
    }

    pub(crate) fn put(&mut self, pos: Position, piece: Piece) {
        self.squares[pos.row as usize][pos.column as usize] = Some(piece);
    }

    /// All pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(column, cell)| {
                cell.map(|piece| (Position::new(row as u8, column as u8), piece))
            })
        })
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.side == side)
    }

    pub fn find(&self, id: PieceId) -> Option<(Position, Piece)> {
        self.pieces().find(|(_, piece)| piece.id == id)
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
