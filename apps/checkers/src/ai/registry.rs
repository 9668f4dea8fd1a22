//! Static table of the automated opponents a game can be configured with.
//!
//! `CHECKERS_AI` and the simulator's `--first`/`--second` resolve through
//! [`by_name`]. Each factory takes the optional seed for its side.

use crate::ai::{AiPlayer, GreedyPlayer, RandomPlayer};

/// A named constructor for one opponent.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    AiFactory {
        name: GreedyPlayer::NAME,
        version: GreedyPlayer::VERSION,
        make: make_greedy_player,
    },
];

/// Every opponent, in the order menus should list them.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Case-sensitive lookup by `AiPlayer` name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

fn make_random_player(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(RandomPlayer::new(seed))
}

fn make_greedy_player(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(GreedyPlayer::new(seed))
}
