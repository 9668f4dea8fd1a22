//! Move Controller: turns square selections into validated hops.

use tracing::{debug, info};

use crate::domain::moves::Move;
use crate::domain::rules::RulesProvider;
use crate::domain::types::Position;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::interaction::events::{EventQueue, GameEvent};
use crate::interaction::selection::SelectionTracker;
use crate::interaction::turn::TurnCoordinator;

/// What a selection did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Nothing changed.
    Ignored,
    /// A piece of the active side became the active piece.
    Selected,
    /// A hop was committed and the same piece must keep capturing.
    Hopped,
    /// The last hop finished the move; the turn has advanced.
    MoveCompleted(Move),
}

#[derive(Debug, Default)]
pub struct MoveController {
    tracker: SelectionTracker,
}

impl MoveController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracker(&self) -> &SelectionTracker {
        &self.tracker
    }

    /// Drop any selection or half-finished capture chain.
    pub fn reset(&mut self) {
        self.tracker.clear();
    }

    /// Handle one selection of `square` by whoever is at the board.
    ///
    /// Precedence: a fresh selection of an own piece (only before the first
    /// hop), then a pending destination of the active piece, otherwise
    /// nothing. Illegal selections return `Ok(Ignored)`; an `Err` always
    /// means the core and the rules provider disagree.
    pub fn handle_selection(
        &mut self,
        square: Position,
        rules: &mut dyn RulesProvider,
        turns: &mut TurnCoordinator,
        events: &mut EventQueue,
    ) -> Result<SelectionOutcome, AppError> {
        let Some(side) = turns.active_side() else {
            return Ok(SelectionOutcome::Ignored);
        };
        if turns.is_automated(side) {
            debug!(%square, side = %side, "Selection ignored on automated turn");
            return Ok(SelectionOutcome::Ignored);
        }

        if !self.tracker.in_progress() {
            if let Some(piece) = rules.piece_at(square).filter(|p| p.side == side) {
                self.tracker.select(piece, square, &*rules)?;
                debug!(
                    %square,
                    destinations = self.tracker.pending_destinations().len(),
                    "Piece selected"
                );
                return Ok(SelectionOutcome::Selected);
            }
        }

        if let Some(piece) = self.tracker.active_piece() {
            if self.tracker.is_pending(square) {
                rules.commit_partial_move(piece.id, square).map_err(|e| {
                    DomainError::invariant(format!("rules rejected offered hop to {square}: {e}"))
                })?;
                self.tracker.push_hop(square, &*rules)?;
                if self.tracker.pending_destinations().is_empty() {
                    let mv = self.end_move(rules, turns, events)?;
                    return Ok(SelectionOutcome::MoveCompleted(mv));
                }
                debug!(%square, "Capture continues");
                return Ok(SelectionOutcome::Hopped);
            }
        }

        debug!(%square, side = %side, "Selection ignored");
        Ok(SelectionOutcome::Ignored)
    }

    /// Commit the hops of this turn as one move, clear the tracker and hand
    /// the turn over.
    fn end_move(
        &mut self,
        rules: &mut dyn RulesProvider,
        turns: &mut TurnCoordinator,
        events: &mut EventQueue,
    ) -> Result<Move, AppError> {
        let (Some(piece), Some(origin)) = (self.tracker.active_piece(), self.tracker.origin())
        else {
            return Err(DomainError::invariant("move ended without an active piece").into());
        };
        let mv = Move::new(piece.id, origin, self.tracker.capture_chain().to_vec());

        let committed = rules.commit_finished_move(piece.id, &mv);
        self.tracker.clear();
        committed.map_err(|e| DomainError::invariant(format!("rules rejected {mv}: {e}")))?;

        info!(side = %piece.side, mv = %mv, "Move committed");
        events.push(GameEvent::MoveCommitted {
            side: piece.side,
            mv: mv.clone(),
        });
        turns.advance_turn(rules, events)?;
        Ok(mv)
    }
}
