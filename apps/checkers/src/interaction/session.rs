//! One game: the rules provider, the move controller, the turn coordinator
//! and the event outbox, owned together.

use tracing::info;

use crate::ai;
use crate::config::{GameConfig, PlayerKind};
use crate::domain::outcome::GameOutcome;
use crate::domain::rules::RulesProvider;
use crate::domain::snapshot::BoardSnapshot;
use crate::domain::types::{Position, Side};
use crate::error::AppError;
use crate::interaction::controller::{MoveController, SelectionOutcome};
use crate::interaction::events::{EventQueue, GameEvent};
use crate::interaction::selection::SelectionTracker;
use crate::interaction::turn::{SideController, TurnCoordinator, TurnState};

/// Entry point for presentation adapters.
///
/// Adapters call [`GameSession::start`] once, feed square selections into
/// [`GameSession::handle_selection`] and redraw from the events returned by
/// [`GameSession::drain_events`].
pub struct GameSession<R: RulesProvider> {
    rules: R,
    controller: MoveController,
    turns: TurnCoordinator,
    events: EventQueue,
}

impl<R: RulesProvider> GameSession<R> {
    pub fn new(rules: R, config: &GameConfig) -> Result<Self, AppError> {
        config.validate()?;
        let first = side_controller(config, Side::First)?;
        let second = side_controller(config, Side::Second)?;
        Self::with_controllers(rules, first, second, config.move_limit)
    }

    pub fn with_controllers(
        rules: R,
        first: SideController,
        second: SideController,
        move_limit: Option<u32>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            rules,
            controller: MoveController::new(),
            turns: TurnCoordinator::new(first, second, move_limit)?,
            events: EventQueue::new(),
        })
    }

    /// Announce the first side and let automated sides move.
    pub fn start(&mut self) -> Result<(), AppError> {
        self.turns.start(&mut self.rules, &mut self.events)?;
        self.push_snapshot();
        Ok(())
    }

    /// Feed one square selection into the core.
    ///
    /// Once the game is over this is a no-op that emits nothing.
    pub fn handle_selection(&mut self, square: Position) -> Result<SelectionOutcome, AppError> {
        if self.turns.is_over() {
            return Ok(SelectionOutcome::Ignored);
        }
        let outcome = self.controller.handle_selection(
            square,
            &mut self.rules,
            &mut self.turns,
            &mut self.events,
        )?;
        self.push_snapshot();
        Ok(outcome)
    }

    /// `side` concedes the game.
    pub fn resign(&mut self, side: Side) {
        if self.turns.is_over() {
            return;
        }
        info!(side = %side, "Resigned");
        self.controller.reset();
        self.turns.resign(side, &mut self.events);
        self.push_snapshot();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let tracker = self.controller.tracker();
        BoardSnapshot::capture(
            &self.rules,
            self.turns.active_side(),
            tracker.current_square(),
            tracker.pending_destinations(),
            self.turns.outcome(),
        )
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    pub fn state(&self) -> TurnState {
        self.turns.state()
    }

    pub fn active_side(&self) -> Option<Side> {
        self.turns.active_side()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.turns.outcome()
    }

    pub fn moves_played(&self) -> u32 {
        self.turns.moves_played()
    }

    pub fn selection(&self) -> &SelectionTracker {
        self.controller.tracker()
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    fn push_snapshot(&mut self) {
        let snapshot = self.snapshot();
        self.events.push(GameEvent::BoardChanged(snapshot));
    }
}

/// Build the controller for `side`. The second side's AI gets a shifted
/// seed so two seeded bots do not mirror each other's RNG stream.
fn side_controller(config: &GameConfig, side: Side) -> Result<SideController, AppError> {
    match config.kind(side) {
        PlayerKind::Human => Ok(SideController::Human),
        PlayerKind::Automated => {
            let seed = config.ai_seed.map(|s| s.wrapping_add(side.index() as u64));
            let factory = ai::by_name(&config.ai)
                .ok_or_else(|| AppError::config(format!("unknown AI '{}'", config.ai)))?;
            Ok(SideController::Automated((factory.make)(seed)))
        }
    }
}
