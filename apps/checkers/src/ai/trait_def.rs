//! AI player trait definition.

use std::fmt;

use crate::domain::moves::Move;
use crate::domain::rules::RulesProvider;
use crate::domain::types::Side;

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI produced an invalid move
    InvalidMove(String),
    /// The side to move has nothing legal to play
    NoLegalMoves,
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
            AiError::NoLegalMoves => write!(f, "AI has no legal moves"),
        }
    }
}

impl std::error::Error for AiError {}

/// Trait for automated opponents.
///
/// Implementations get read-only access to the rules provider and must
/// return one full legal move for `side`. A multi-capture is a single
/// move: `hops` lists every landing square in order.
pub trait AiPlayer: Send + Sync {
    fn choose_move(&self, rules: &dyn RulesProvider, side: Side) -> Result<Move, AiError>;
}
