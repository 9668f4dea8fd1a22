#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod interaction;

// Re-exports for public API
pub use config::{GameConfig, PlayerKind};
pub use domain::{
    Board, BoardSnapshot, GameOutcome, Move, Piece, PieceId, Position, Rank, RulesProvider,
    Side, StandardRules, WinReason,
};
pub use error::AppError;
pub use errors::{DomainError, ValidationKind};
pub use interaction::{GameEvent, GameSession, SelectionOutcome, SideController, TurnState};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    checkers_test_support::logging::init();
}
