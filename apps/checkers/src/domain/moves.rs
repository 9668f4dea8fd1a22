//! A full move: origin square plus every landing square of the turn.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::types::{PieceId, Position};

/// One logical move as committed to the rules engine.
///
/// `hops` holds landing squares in the order they were reached. A hop that
/// spans two rows is a capture of the piece on the midpoint square.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: PieceId,
    pub from: Position,
    pub hops: Vec<Position>,
}

impl Move {
    pub fn new(piece: PieceId, from: Position, hops: Vec<Position>) -> Self {
        Self { piece, from, hops }
    }

    /// Final square, or the origin for a move with no hops.
    pub fn to(&self) -> Position {
        self.hops.last().copied().unwrap_or(self.from)
    }

    /// Consecutive `(from, to)` pairs for every hop.
    pub fn segments(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        std::iter::once(self.from)
            .chain(self.hops.iter().copied())
            .zip(self.hops.iter().copied())
    }

    /// Squares of the pieces jumped over, in capture order.
    pub fn captured(&self) -> Vec<Position> {
        self.segments()
            .filter_map(|(from, to)| from.midpoint(to))
            .collect()
    }

    pub fn is_capture(&self) -> bool {
        self.segments().any(|(from, to)| from.midpoint(to).is_some())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}", self.from)?;
        for hop in &self.hops {
            write!(f, "{sep}{hop}")?;
        }
        Ok(())
    }
}
