//! Domain layer: board, pieces, moves and the rules contract.

pub mod board;
pub mod engine;
pub mod moves;
pub mod outcome;
pub mod rules;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_engine;
#[cfg(test)]
mod tests_props_rules;

pub use board::{Board, BOARD_SIZE};
pub use engine::{MoveRecord, StandardRules};
pub use moves::Move;
pub use outcome::{GameOutcome, WinReason};
pub use rules::RulesProvider;
pub use snapshot::{BoardSnapshot, Occupant, SquareView};
pub use types::{Piece, PieceId, Position, Rank, Side};
