//! Shared types for the simulator.

use checkers::ai::{GreedyPlayer, RandomPlayer};
use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per game, written as games finish
    Jsonl,
    /// A single JSON array written at the end of the run
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum MetricsLevel {
    /// Result and per-side totals only
    Basic,
    /// Also the full move list of every game
    Detailed,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AiType {
    Random,
    Greedy,
}

impl AiType {
    /// Registry name of the AI.
    pub fn name(&self) -> &'static str {
        match self {
            AiType::Random => RandomPlayer::NAME,
            AiType::Greedy => GreedyPlayer::NAME,
        }
    }
}
