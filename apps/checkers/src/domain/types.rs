//! Core value types: Side, Rank, Piece, Position

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// The two sides of a game. `First` always opens.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Stable array index for per-side tables.
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::First => "White",
            Side::Second => "Black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

/// Identity of a piece, stable for the whole game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u8);

/// Opaque piece handle as seen by the interaction core.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub side: Side,
    pub rank: Rank,
}

impl Piece {
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }
}

/// A board coordinate. Row 0 is the `First` side's home row.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub column: u8,
}

impl Position {
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Square reached by moving `(d_row, d_col)`, if it stays on a board of `size`.
    pub fn offset(self, d_row: i8, d_col: i8, size: u8) -> Option<Position> {
        let row = self.row as i16 + d_row as i16;
        let column = self.column as i16 + d_col as i16;
        let limit = size as i16;
        if (0..limit).contains(&row) && (0..limit).contains(&column) {
            Some(Position::new(row as u8, column as u8))
        } else {
            None
        }
    }

    /// Square halfway between two squares two diagonals apart.
    pub fn midpoint(self, other: Position) -> Option<Position> {
        let d_row = self.row.abs_diff(other.row);
        let d_col = self.column.abs_diff(other.column);
        if d_row != 2 || d_col != 2 {
            return None;
        }
        Some(Position::new(
            (self.row + other.row) / 2,
            (self.column + other.column) / 2,
        ))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'A' + self.column) as char;
        write!(f, "{file}{}", self.row as u16 + 1)
    }
}

impl FromStr for Position {
    type Err = DomainError;

    /// Parse algebraic notation such as `C3` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        let file = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| c.is_ascii_uppercase())
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::ParsePosition,
                    format!("missing column letter in '{token}'"),
                )
            })?;
        let row: u8 = chars.as_str().parse().map_err(|_| {
            DomainError::validation(
                ValidationKind::ParsePosition,
                format!("invalid row number in '{token}'"),
            )
        })?;
        if row == 0 {
            return Err(DomainError::validation(
                ValidationKind::ParsePosition,
                format!("rows are numbered from 1 in '{token}'"),
            ));
        }
        Ok(Position::new(row - 1, file as u8 - b'A'))
    }
}
