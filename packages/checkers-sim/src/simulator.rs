//! Headless games between two automated sides.
//!
//! Games run through the same `GameSession` and turn coordinator a human
//! game uses; the simulator only wires up two automated controllers and a
//! move limit, then reads the result back out of the rules engine.

use checkers::ai::by_name;
use checkers::domain::MoveRecord;
use checkers::interaction::SideController;
use checkers::{AppError, GameOutcome, GameSession, Side, StandardRules};
use tracing::debug;

use crate::types::AiType;

/// Everything the metrics layer needs from one finished game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub moves: u32,
    pub captures: [u16; 2],
    pub pieces_left: [usize; 2],
    pub history: Vec<MoveRecord>,
}

/// Seed for game `game_num` of a seeded run.
///
/// A game consumes two consecutive seeds (one per side), so games are spaced
/// two apart and never share an RNG stream.
pub fn game_seed(base: u64, game_num: u32) -> u64 {
    base.wrapping_add(2 * game_num as u64)
}

pub struct Simulator {
    seed: u64,
    move_limit: u32,
}

impl Simulator {
    pub fn new(seed: u64, move_limit: u32) -> Self {
        Self { seed, move_limit }
    }

    /// Play one game. `First` is seeded with the game seed and `Second`
    /// with the next value, so a seed fixes the whole game.
    pub fn simulate_game(&self, ai_types: [AiType; 2]) -> Result<GameResult, AppError> {
        let first = self.controller(ai_types[0], Side::First)?;
        let second = self.controller(ai_types[1], Side::Second)?;

        let mut session = GameSession::with_controllers(
            StandardRules::new(),
            first,
            second,
            Some(self.move_limit),
        )?;
        session.start()?;

        let outcome = session.outcome().ok_or_else(|| {
            checkers::DomainError::invariant("automated game stopped before it ended")
        })?;
        debug!(seed = self.seed, ?outcome, moves = session.moves_played(), "Game simulated");

        let rules = session.rules();
        Ok(GameResult {
            outcome,
            moves: session.moves_played(),
            captures: Side::ALL.map(|side| rules.captures_by(side)),
            pieces_left: Side::ALL.map(|side| rules.board().count(side)),
            history: rules.history().to_vec(),
        })
    }

    fn controller(&self, ai: AiType, side: Side) -> Result<SideController, AppError> {
        let factory = by_name(ai.name())
            .ok_or_else(|| AppError::config(format!("unknown AI '{}'", ai.name())))?;
        let seed = self.seed.wrapping_add(side.index() as u64);
        Ok(SideController::Automated((factory.make)(Some(seed))))
    }
}
