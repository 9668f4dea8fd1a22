//! A rules provider spy: delegates to `StandardRules` and records every
//! mutating call so tests can check the exact commit sequence.

use checkers::{DomainError, Move, Piece, PieceId, Position, RulesProvider, Side, StandardRules};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesCall {
    Partial(PieceId, Position),
    Finished(Move),
    Toggle,
}

pub struct RecordingRules {
    inner: StandardRules,
    calls: Vec<RulesCall>,
}

impl RecordingRules {
    pub fn new(inner: StandardRules) -> Self {
        Self {
            inner,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[RulesCall] {
        &self.calls
    }

    pub fn finished_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RulesCall::Finished(_)))
            .count()
    }

    pub fn inner(&self) -> &StandardRules {
        &self.inner
    }
}

impl RulesProvider for RecordingRules {
    fn board_size(&self) -> u8 {
        self.inner.board_size()
    }

    fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.inner.piece_at(pos)
    }

    fn position_of(&self, piece: PieceId) -> Option<Position> {
        self.inner.position_of(piece)
    }

    fn active_side(&self) -> Side {
        self.inner.active_side()
    }

    fn legal_destinations(&self, piece: PieceId, chain: &[Position]) -> Vec<Position> {
        self.inner.legal_destinations(piece, chain)
    }

    fn commit_partial_move(
        &mut self,
        piece: PieceId,
        destination: Position,
    ) -> Result<(), DomainError> {
        self.calls.push(RulesCall::Partial(piece, destination));
        self.inner.commit_partial_move(piece, destination)
    }

    fn commit_finished_move(&mut self, piece: PieceId, mv: &Move) -> Result<(), DomainError> {
        self.calls.push(RulesCall::Finished(mv.clone()));
        self.inner.commit_finished_move(piece, mv)
    }

    fn legal_moves(&self, side: Side) -> Vec<Move> {
        self.inner.legal_moves(side)
    }

    fn has_legal_move(&self, side: Side) -> bool {
        self.inner.has_legal_move(side)
    }

    fn toggle_active_side(&mut self) {
        self.calls.push(RulesCall::Toggle);
        self.inner.toggle_active_side();
    }
}
