//! Per-turn selection state: the chosen piece and the hops made with it.

use crate::domain::rules::RulesProvider;
use crate::domain::types::{Piece, Position};
use crate::errors::domain::DomainError;

/// Holds the piece being moved this turn and the capture chain built so far.
///
/// `pending` is only ever written by [`SelectionTracker::refresh`], which asks
/// the rules provider; it is never edited by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    active: Option<Piece>,
    origin: Option<Position>,
    chain: Vec<Position>,
    pending: Vec<Position>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_piece(&self) -> Option<Piece> {
        self.active
    }

    /// Square the active piece stood on when it was selected.
    pub fn origin(&self) -> Option<Position> {
        self.origin
    }

    pub fn capture_chain(&self) -> &[Position] {
        &self.chain
    }

    pub fn pending_destinations(&self) -> &[Position] {
        &self.pending
    }

    /// A hop has been made this turn; the side may not switch pieces.
    pub fn in_progress(&self) -> bool {
        !self.chain.is_empty()
    }

    /// Square currently holding the active piece.
    pub fn current_square(&self) -> Option<Position> {
        self.chain.last().copied().or(self.origin)
    }

    pub fn is_pending(&self, square: Position) -> bool {
        self.pending.contains(&square)
    }

    /// Make `piece` (standing on `square`) the active piece.
    pub fn select(
        &mut self,
        piece: Piece,
        square: Position,
        rules: &dyn RulesProvider,
    ) -> Result<(), DomainError> {
        debug_assert!(self.chain.is_empty(), "re-selection during a capture chain");
        self.active = Some(piece);
        self.origin = Some(square);
        self.chain.clear();
        self.refresh(rules)
    }

    /// Record a committed hop and recompute the pending destinations.
    pub fn push_hop(&mut self, square: Position, rules: &dyn RulesProvider) -> Result<(), DomainError> {
        self.chain.push(square);
        self.refresh(rules)
    }

    /// Recompute `pending` from the rules provider for the current chain.
    pub fn refresh(&mut self, rules: &dyn RulesProvider) -> Result<(), DomainError> {
        let Some(piece) = self.active else {
            self.pending.clear();
            return Ok(());
        };
        let expected = self.current_square();
        let actual = rules.position_of(piece.id);
        if actual.is_none() || actual != expected {
            return Err(DomainError::invariant(format!(
                "selected {:?} expected on {:?} but rules report {:?}",
                piece.id, expected, actual
            )));
        }
        self.pending = rules.legal_destinations(piece.id, &self.chain);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.origin = None;
        self.chain.clear();
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_none() && self.chain.is_empty() && self.pending.is_empty()
    }
}
