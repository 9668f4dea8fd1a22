//! Turn Coordinator: whose move it is, automated replies, and game end.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::ai::{AiError, AiPlayer};
use crate::domain::moves::Move;
use crate::domain::outcome::{GameOutcome, WinReason};
use crate::domain::rules::RulesProvider;
use crate::domain::types::Side;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::interaction::events::{EventQueue, GameEvent};

/// Attempts an automated player gets to come up with a legal move.
const MAX_AI_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TurnState {
    Active(Side),
    GameOver(GameOutcome),
}

/// Who makes the decisions for one side.
pub enum SideController {
    Human,
    Automated(Box<dyn AiPlayer>),
}

impl SideController {
    pub fn is_automated(&self) -> bool {
        matches!(self, SideController::Automated(_))
    }
}

impl fmt::Debug for SideController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideController::Human => f.write_str("Human"),
            SideController::Automated(_) => f.write_str("Automated"),
        }
    }
}

#[derive(Debug)]
pub struct TurnCoordinator {
    state: TurnState,
    controllers: [SideController; 2],
    moves_played: u32,
    move_limit: Option<u32>,
}

impl TurnCoordinator {
    /// Two automated sides need a move limit, otherwise the automated loop
    /// has no bound.
    pub fn new(
        first: SideController,
        second: SideController,
        move_limit: Option<u32>,
    ) -> Result<Self, AppError> {
        if first.is_automated() && second.is_automated() && move_limit.is_none() {
            return Err(AppError::config(
                "both sides automated requires a move limit",
            ));
        }
        Ok(Self {
            state: TurnState::Active(Side::First),
            controllers: [first, second],
            moves_played: 0,
            move_limit,
        })
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn active_side(&self) -> Option<Side> {
        match self.state {
            TurnState::Active(side) => Some(side),
            TurnState::GameOver(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            TurnState::GameOver(outcome) => Some(outcome),
            TurnState::Active(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, TurnState::GameOver(_))
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    pub fn is_automated(&self, side: Side) -> bool {
        self.controllers[side.index()].is_automated()
    }

    /// Sync with the side the rules provider has to move, announce it and
    /// let automated sides play until a human is to move or the game ends.
    pub fn start(
        &mut self,
        rules: &mut dyn RulesProvider,
        events: &mut EventQueue,
    ) -> Result<(), AppError> {
        if self.is_over() {
            return Ok(());
        }
        let side = rules.active_side();
        self.state = TurnState::Active(side);
        info!(side = %side, "Game started");
        events.push(GameEvent::TurnBecame { side });
        self.settle(rules, events)
    }

    /// Called once a finished move has been committed for the active side.
    pub fn advance_turn(
        &mut self,
        rules: &mut dyn RulesProvider,
        events: &mut EventQueue,
    ) -> Result<(), AppError> {
        let TurnState::Active(side) = self.state else {
            return Ok(());
        };
        if rules.active_side() != side {
            return Err(DomainError::invariant(format!(
                "turn state says {side} but rules say {}",
                rules.active_side()
            ))
            .into());
        }
        self.moves_played += 1;
        self.flip(side, rules, events);
        self.settle(rules, events)
    }

    /// `side` concedes. No-op once the game is over.
    pub fn resign(&mut self, side: Side, events: &mut EventQueue) {
        if self.is_over() {
            return;
        }
        self.finish(
            GameOutcome::Won {
                winner: side.opponent(),
                reason: WinReason::Resignation,
            },
            events,
        );
    }

    fn flip(&mut self, side: Side, rules: &mut dyn RulesProvider, events: &mut EventQueue) {
        rules.toggle_active_side();
        let next = side.opponent();
        self.state = TurnState::Active(next);
        debug!(side = %next, moves = self.moves_played, "Turn passed");
        events.push(GameEvent::TurnBecame { side: next });
    }

    fn finish(&mut self, outcome: GameOutcome, events: &mut EventQueue) {
        self.state = TurnState::GameOver(outcome);
        info!(?outcome, moves = self.moves_played, "Game over");
        events.push(GameEvent::GameEnded { outcome });
    }

    /// Loop until a human side is to move or the game is over.
    ///
    /// Each automated move flips the side once, so with both sides
    /// automated the move limit bounds the loop; with a human side the loop
    /// stops at the human's turn.
    fn settle(
        &mut self,
        rules: &mut dyn RulesProvider,
        events: &mut EventQueue,
    ) -> Result<(), AppError> {
        loop {
            let TurnState::Active(side) = self.state else {
                return Ok(());
            };

            if !rules.has_legal_move(side) {
                self.finish(
                    GameOutcome::Won {
                        winner: side.opponent(),
                        reason: WinReason::NoLegalMoves,
                    },
                    events,
                );
                return Ok(());
            }

            if let Some(limit) = self.move_limit {
                if self.moves_played >= limit {
                    self.finish(
                        GameOutcome::Drawn {
                            moves: self.moves_played,
                        },
                        events,
                    );
                    return Ok(());
                }
            }

            let SideController::Automated(player) = &self.controllers[side.index()] else {
                return Ok(());
            };
            let mv = choose_legal_move(player.as_ref(), &*rules, side)?;
            play_move(rules, &mv)?;
            info!(side = %side, mv = %mv, "Automated move committed");
            events.push(GameEvent::MoveCommitted { side, mv });

            self.moves_played += 1;
            self.flip(side, rules, events);
        }
    }
}

/// Ask `player` for a move, checking it against the full legal moves.
fn choose_legal_move(
    player: &dyn AiPlayer,
    rules: &dyn RulesProvider,
    side: Side,
) -> Result<Move, AppError> {
    let legal = rules.legal_moves(side);
    let mut last_error = None;

    for attempt in 1..=MAX_AI_ATTEMPTS {
        match player.choose_move(rules, side) {
            Ok(mv) if legal.contains(&mv) => return Ok(mv),
            Ok(mv) => {
                warn!(side = %side, attempt, mv = %mv, "AI chose an illegal move");
                last_error = Some(AiError::InvalidMove(format!("{mv} is not legal for {side}")));
            }
            Err(e) => {
                warn!(side = %side, attempt, error = %e, "AI failed to choose a move");
                last_error = Some(e);
            }
        }
    }

    Err(last_error
        .unwrap_or_else(|| AiError::Internal("no attempts made".into()))
        .into())
}

/// Commit a full legal move: every hop partially, then exactly one finish.
fn play_move(rules: &mut dyn RulesProvider, mv: &Move) -> Result<(), AppError> {
    for &hop in &mv.hops {
        rules.commit_partial_move(mv.piece, hop).map_err(|e| {
            DomainError::invariant(format!("rules rejected hop of legal move {mv}: {e}"))
        })?;
    }
    rules
        .commit_finished_move(mv.piece, mv)
        .map_err(|e| DomainError::invariant(format!("rules rejected legal move {mv}: {e}")))?;
    Ok(())
}
