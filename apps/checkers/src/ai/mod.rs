//! Automated opponents.
//!
//! - [`AiPlayer`]: the trait the turn coordinator drives
//! - [`RandomPlayer`]: uniform choice among legal moves (seedable for tests)
//! - [`GreedyPlayer`]: longest capture first
//! - a static registry so players can be chosen by name from config

mod config;
mod greedy;
mod random;
pub mod registry;
mod trait_def;

pub use config::AiConfig;
pub use greedy::GreedyPlayer;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory};
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, AiPlayer};

/// Create an AI player from its registry name and optional JSON config.
///
/// Returns `None` if the name is not registered.
pub fn create_ai(name: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    let config = AiConfig::from_json(config);
    by_name(name).map(|factory| (factory.make)(config.seed()))
}
