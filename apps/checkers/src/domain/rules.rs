//! The contract between the interaction core and a rules engine.

use rand::prelude::*;

use crate::domain::moves::Move;
use crate::domain::types::{Piece, PieceId, Position, Side};
use crate::errors::domain::DomainError;

/// Everything the move controller and turn coordinator need from a rules
/// engine. The core never looks at board internals or move geometry; it only
/// sequences these calls.
pub trait RulesProvider {
    fn board_size(&self) -> u8;

    fn piece_at(&self, pos: Position) -> Option<Piece>;

    fn position_of(&self, piece: PieceId) -> Option<Position>;

    /// Side the engine currently considers to be moving.
    fn active_side(&self) -> Side;

    /// Legal next hops for `piece`.
    ///
    /// An empty `chain` asks for the first hop of a fresh move; a non-empty
    /// chain lists the squares already landed on this turn and asks for a
    /// continuation of the same capture sequence. An empty result for a
    /// non-empty chain means the move is complete.
    fn legal_destinations(&self, piece: PieceId, chain: &[Position]) -> Vec<Position>;

    /// Apply one hop (removing a jumped piece) without ending the turn.
    fn commit_partial_move(&mut self, piece: PieceId, destination: Position)
        -> Result<(), DomainError>;

    /// Finalize the hops committed this turn as one logical move.
    fn commit_finished_move(&mut self, piece: PieceId, mv: &Move) -> Result<(), DomainError>;

    /// Every full legal move for `side`; a multi-capture is a single entry.
    fn legal_moves(&self, side: Side) -> Vec<Move>;

    fn has_legal_move(&self, side: Side) -> bool {
        !self.legal_moves(side).is_empty()
    }

    /// Uniform choice among `legal_moves(side)`.
    fn random_legal_move(&self, side: Side, rng: &mut dyn RngCore) -> Option<Move> {
        self.legal_moves(side).choose(rng).cloned()
    }

    fn toggle_active_side(&mut self);
}
