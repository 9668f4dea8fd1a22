//! Greedy AI player - always takes the longest capture available.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::moves::Move;
use crate::domain::rules::RulesProvider;
use crate::domain::types::Side;

/// Picks a legal move that captures the most pieces; ties are broken at
/// random. Looks no further ahead than the current move.
pub struct GreedyPlayer {
    rng: Mutex<StdRng>,
}

impl GreedyPlayer {
    pub const NAME: &'static str = "GreedyPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for GreedyPlayer {
    fn choose_move(&self, rules: &dyn RulesProvider, side: Side) -> Result<Move, AiError> {
        let legal = rules.legal_moves(side);
        let best = legal
            .iter()
            .map(|mv| mv.captured().len())
            .max()
            .ok_or(AiError::NoLegalMoves)?;
        let candidates: Vec<&Move> = legal
            .iter()
            .filter(|mv| mv.captured().len() == best)
            .collect();

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        candidates
            .choose(&mut *rng)
            .map(|mv| (*mv).clone())
            .ok_or_else(|| AiError::Internal("no candidate after filtering".into()))
    }
}
