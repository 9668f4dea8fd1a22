//! The interaction core: selections in, board mutations and events out.

pub mod controller;
pub mod events;
pub mod selection;
pub mod session;
pub mod turn;

pub use controller::{MoveController, SelectionOutcome};
pub use events::{EventQueue, GameEvent};
pub use selection::SelectionTracker;
pub use session::GameSession;
pub use turn::{SideController, TurnCoordinator, TurnState};
