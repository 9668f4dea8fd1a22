//! Render snapshot handed to presentation adapters after every mutation.

use std::fmt;

use serde::Serialize;

use crate::domain::board::is_playable;
use crate::domain::outcome::GameOutcome;
use crate::domain::rules::RulesProvider;
use crate::domain::types::{Position, Rank, Side};

/// What stands on a square, as far as a renderer cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Occupant {
    pub side: Side,
    pub rank: Rank,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SquareView {
    pub position: Position,
    pub playable: bool,
    pub occupant: Option<Occupant>,
    /// The square is a legal next hop for the selected piece right now.
    pub is_destination: bool,
}

/// Whole-board view. Squares are row-major, row 0 first.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub size: u8,
    /// `None` once the game is over.
    pub active_side: Option<Side>,
    pub selected: Option<Position>,
    pub outcome: Option<GameOutcome>,
    pub squares: Vec<SquareView>,
}

impl BoardSnapshot {
    pub fn capture(
        rules: &dyn RulesProvider,
        active_side: Option<Side>,
        selected: Option<Position>,
        destinations: &[Position],
        outcome: Option<GameOutcome>,
    ) -> Self {
        let size = rules.board_size();
        let squares = (0..size)
            .flat_map(|row| (0..size).map(move |column| Position::new(row, column)))
            .map(|position| SquareView {
                position,
                playable: is_playable(position),
                occupant: rules.piece_at(position).map(|piece| Occupant {
                    side: piece.side,
                    rank: piece.rank,
                }),
                is_destination: destinations.contains(&position),
            })
            .collect();

        Self {
            size,
            active_side,
            selected,
            outcome,
            squares,
        }
    }

    pub fn square(&self, pos: Position) -> Option<&SquareView> {
        if pos.row >= self.size || pos.column >= self.size {
            return None;
        }
        self.squares
            .get(pos.row as usize * self.size as usize + pos.column as usize)
    }

    pub fn destinations(&self) -> impl Iterator<Item = Position> + '_ {
        self.squares
            .iter()
            .filter(|square| square.is_destination)
            .map(|square| square.position)
    }
}

fn glyph(square: &SquareView, selected: bool) -> char {
    match (square.occupant, square.is_destination) {
        (Some(Occupant { side, rank }), _) => {
            let c = match side {
                Side::First => 'w',
                Side::Second => 'b',
            };
            let c = if rank == Rank::King {
                c.to_ascii_uppercase()
            } else {
                c
            };
            if selected {
                '@'
            } else {
                c
            }
        }
        (None, true) => '*',
        (None, false) if square.playable => '.',
        (None, false) => ' ',
    }
}

/// Text board with the last row on top, as a player on the `First` side
/// sees it. `w`/`b` are men, `W`/`B` kings, `@` the selected piece and `*`
/// a square the selected piece may move to.
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.size).rev() {
            write!(f, "{} ", row as u16 + 1)?;
            for column in 0..self.size {
                let pos = Position::new(row, column);
                let c = self
                    .square(pos)
                    .map(|square| glyph(square, self.selected == Some(pos)))
                    .unwrap_or('?');
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for column in 0..self.size {
            write!(f, "{} ", (b'A' + column) as char)?;
        }
        Ok(())
    }
}
