//! Random AI player - makes random legal moves.
//!
//! [`RandomPlayer`] is the baseline automated opponent: it picks uniformly
//! among the full legal moves of its side. Seeding makes it reproducible.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::moves::Move;
use crate::domain::rules::RulesProvider;
use crate::domain::types::Side;

/// AI that makes random legal moves.
///
/// The RNG sits behind a `Mutex` because [`AiPlayer::choose_move`] takes
/// `&self` and the trait is `Send + Sync`.
///
/// ```rust,ignore
/// let any = RandomPlayer::new(None);
/// let reproducible = RandomPlayer::new(Some(12345));
/// ```
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub const fn name() -> &'static str {
        Self::NAME
    }

    pub const fn version() -> &'static str {
        Self::VERSION
    }

    /// `Some(seed)` gives reproducible play, `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_move(&self, rules: &dyn RulesProvider, side: Side) -> Result<Move, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        rules
            .random_legal_move(side, &mut *rng)
            .ok_or(AiError::NoLegalMoves)
    }
}
