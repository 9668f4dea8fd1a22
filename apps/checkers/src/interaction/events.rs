//! Events the core emits for presentation adapters.
//!
//! The core never draws. It mutates state, then queues what changed here;
//! an adapter drains the queue and redraws from the snapshots.

use std::collections::VecDeque;

use serde::Serialize;

use crate::domain::moves::Move;
use crate::domain::outcome::GameOutcome;
use crate::domain::snapshot::BoardSnapshot;
use crate::domain::types::Side;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum GameEvent {
    /// Redraw from this snapshot.
    BoardChanged(BoardSnapshot),
    /// A finished move was committed for `side`.
    MoveCommitted { side: Side, mv: Move },
    /// Edge-triggered: `side` is now to move.
    TurnBecame { side: Side },
    /// Edge-triggered, emitted once per game.
    GameEnded { outcome: GameOutcome },
}

/// FIFO of events waiting for the adapter.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.queue.push_back(event);
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
