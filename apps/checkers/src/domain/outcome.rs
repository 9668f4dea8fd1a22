//! How a game ended.

use std::fmt;

use serde::Serialize;

use crate::domain::types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    /// The loser had no legal move on their turn.
    NoLegalMoves,
    Resignation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GameOutcome {
    Won { winner: Side, reason: WinReason },
    /// The configured move limit was reached.
    Drawn { moves: u32 },
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::Won { winner, .. } => Some(*winner),
            GameOutcome::Drawn { .. } => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Won {
                winner,
                reason: WinReason::NoLegalMoves,
            } => write!(f, "{winner} wins"),
            GameOutcome::Won {
                winner,
                reason: WinReason::Resignation,
            } => write!(f, "{winner} wins by resignation"),
            GameOutcome::Drawn { moves } => write!(f, "draw after {moves} moves"),
        }
    }
}
