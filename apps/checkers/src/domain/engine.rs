//! Reference rules engine: English draughts on an 8x8 board.
//!
//! Men move and capture diagonally forward, kings one square in any
//! diagonal direction. Capturing is compulsory and a capture sequence must be
//! followed to its end. A man is crowned when its move is finished on the far
//! row; a man standing on the far row has no forward jump, so a crowning hop
//! always ends the move.

use serde::Serialize;
use tracing::debug;

use crate::domain::board::{crowning_row, Board};
use crate::domain::moves::Move;
use crate::domain::rules::RulesProvider;
use crate::domain::types::{Piece, PieceId, Position, Rank, Side};
use crate::errors::domain::{DomainError, ValidationKind};

const KING_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Diagonal directions a piece may travel in.
fn directions(piece: Piece) -> &'static [(i8, i8)] {
    match (piece.rank, piece.side) {
        (Rank::King, _) => &KING_DIRECTIONS,
        (Rank::Man, Side::First) => &KING_DIRECTIONS[..2],
        (Rank::Man, Side::Second) => &KING_DIRECTIONS[2..],
    }
}

fn steps_from(board: &Board, from: Position, piece: Piece) -> Vec<Position> {
    directions(piece)
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc, board.size()))
        .filter(|&to| board.get(to).is_none())
        .collect()
}

/// `(landing, captured)` pairs for every single jump available from `from`.
fn jumps_from(board: &Board, from: Position, piece: Piece) -> Vec<(Position, Position)> {
    directions(piece)
        .iter()
        .filter_map(|&(dr, dc)| {
            let over = from.offset(dr, dc, board.size())?;
            let landing = from.offset(dr * 2, dc * 2, board.size())?;
            let victim = board.get(over)?;
            (victim.side != piece.side && board.get(landing).is_none()).then_some((landing, over))
        })
        .collect()
}

fn side_can_capture(board: &Board, side: Side) -> bool {
    board
        .pieces_of(side)
        .any(|(pos, piece)| !jumps_from(board, pos, piece).is_empty())
}

/// Depth-first expansion of every maximal jump sequence from `pos`.
fn collect_chains(
    board: &Board,
    pos: Position,
    piece: Piece,
    path: &mut Vec<Position>,
    out: &mut Vec<Vec<Position>>,
) {
    let jumps = jumps_from(board, pos, piece);
    if jumps.is_empty() {
        if !path.is_empty() {
            out.push(path.clone());
        }
        return;
    }
    for (landing, over) in jumps {
        let mut next = board.clone();
        next.take(pos);
        next.take(over);
        next.put(landing, piece);
        path.push(landing);
        collect_chains(&next, landing, piece, path, out);
        path.pop();
    }
}

/// Hops committed so far in the current turn.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TurnProgress {
    piece: PieceId,
    origin: Position,
    hops: Vec<Position>,
    captured: Vec<Position>,
}

/// A finished move as kept in the game history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub side: Side,
    pub mv: Move,
    pub captured: Vec<Position>,
    pub crowned: bool,
}

#[derive(Debug, Clone)]
pub struct StandardRules {
    board: Board,
    active: Side,
    in_progress: Option<TurnProgress>,
    captures: [u16; 2],
    history: Vec<MoveRecord>,
}

impl StandardRules {
    /// Standard opening position, `First` to move.
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Side::First)
    }

    /// Arbitrary position, mainly for tests and puzzles.
    pub fn with_board(board: Board, active: Side) -> Self {
        Self {
            board,
            active,
            in_progress: None,
            captures: [0; 2],
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of opposing pieces `side` has captured so far.
    pub fn captures_by(&self, side: Side) -> u16 {
        self.captures[side.index()]
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn move_in_progress(&self) -> bool {
        self.in_progress.is_some()
    }

    fn first_hops(&self, pos: Position, piece: Piece) -> Vec<Position> {
        if side_can_capture(&self.board, piece.side) {
            jumps_from(&self.board, pos, piece)
                .into_iter()
                .map(|(landing, _)| landing)
                .collect()
        } else {
            steps_from(&self.board, pos, piece)
        }
    }

    fn continuation_hops(&self, pos: Position, piece: Piece, chain: &[Position]) -> Vec<Position> {
        match &self.in_progress {
            Some(progress)
                if progress.piece == piece.id
                    && progress.hops == chain
                    && !progress.captured.is_empty() =>
            {
                jumps_from(&self.board, pos, piece)
                    .into_iter()
                    .map(|(landing, _)| landing)
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    fn current_chain(&self) -> Vec<Position> {
        self.in_progress
            .as_ref()
            .map(|progress| progress.hops.clone())
            .unwrap_or_default()
    }
}

impl Default for StandardRules {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesProvider for StandardRules {
    fn board_size(&self) -> u8 {
        self.board.size()
    }

    fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board.get(pos)
    }

    fn position_of(&self, piece: PieceId) -> Option<Position> {
        self.board.find(piece).map(|(pos, _)| pos)
    }

    fn active_side(&self) -> Side {
        self.active
    }

    fn legal_destinations(&self, piece: PieceId, chain: &[Position]) -> Vec<Position> {
        let Some((pos, found)) = self.board.find(piece) else {
            return Vec::new();
        };
        if found.side != self.active {
            return Vec::new();
        }

        let mut hops = if chain.is_empty() {
            if self.in_progress.is_some() {
                // A fresh move cannot start while another is half-committed.
                return Vec::new();
            }
            self.first_hops(pos, found)
        } else {
            self.continuation_hops(pos, found, chain)
        };
        hops.sort();
        hops
    }

    fn commit_partial_move(
        &mut self,
        piece: PieceId,
        destination: Position,
    ) -> Result<(), DomainError> {
        let chain = self.current_chain();
        if !self.legal_destinations(piece, &chain).contains(&destination) {
            return Err(DomainError::validation(
                ValidationKind::IllegalHop,
                format!("{piece:?} cannot move to {destination}"),
            ));
        }

        let (from, moving) = self.board.find(piece).ok_or_else(|| {
            DomainError::invariant(format!("{piece:?} has legal hops but is not on the board"))
        })?;
        let captured = from.midpoint(destination);

        self.board.take(from);
        if let Some(over) = captured {
            self.board.take(over);
        }
        self.board.put(destination, moving);

        let progress = self.in_progress.get_or_insert_with(|| TurnProgress {
            piece,
            origin: from,
            hops: Vec::new(),
            captured: Vec::new(),
        });
        progress.hops.push(destination);
        progress.captured.extend(captured);

        debug!(piece = piece.0, %from, to = %destination, capture = captured.is_some(), "Hop applied");
        Ok(())
    }

    fn commit_finished_move(&mut self, piece: PieceId, mv: &Move) -> Result<(), DomainError> {
        let Some(progress) = self.in_progress.as_ref() else {
            return Err(DomainError::validation(
                ValidationKind::NoMoveInProgress,
                format!("no hops committed for {piece:?}"),
            ));
        };

        if progress.piece != piece
            || mv.piece != piece
            || mv.from != progress.origin
            || mv.hops != progress.hops
        {
            return Err(DomainError::validation(
                ValidationKind::MoveMismatch,
                format!("{mv} does not match the committed hops"),
            ));
        }

        if !self.legal_destinations(piece, &progress.hops).is_empty() {
            return Err(DomainError::validation(
                ValidationKind::UnfinishedCapture,
                format!("{mv} can still capture"),
            ));
        }

        let Some(progress) = self.in_progress.take() else {
            return Err(DomainError::invariant("turn progress vanished while finishing"));
        };

        let (pos, mut moving) = self.board.find(piece).ok_or_else(|| {
            DomainError::invariant(format!("{piece:?} left the board during its own move"))
        })?;
        let crowned = !moving.is_king() && pos.row == crowning_row(moving.side);
        if crowned {
            moving.rank = Rank::King;
            self.board.put(pos, moving);
        }

        self.captures[moving.side.index()] += progress.captured.len() as u16;
        self.history.push(MoveRecord {
            side: moving.side,
            mv: mv.clone(),
            captured: progress.captured,
            crowned,
        });
        Ok(())
    }

    fn legal_moves(&self, side: Side) -> Vec<Move> {
        let capturing = side_can_capture(&self.board, side);
        let mut moves = Vec::new();
        for (pos, piece) in self.board.pieces_of(side) {
            if capturing {
                let mut chains = Vec::new();
                collect_chains(&self.board, pos, piece, &mut Vec::new(), &mut chains);
                moves.extend(
                    chains
                        .into_iter()
                        .map(|hops| Move::new(piece.id, pos, hops)),
                );
            } else {
                moves.extend(
                    steps_from(&self.board, pos, piece)
                        .into_iter()
                        .map(|to| Move::new(piece.id, pos, vec![to])),
                );
            }
        }
        moves
    }

    fn has_legal_move(&self, side: Side) -> bool {
        self.board.pieces_of(side).any(|(pos, piece)| {
            !steps_from(&self.board, pos, piece).is_empty()
                || !jumps_from(&self.board, pos, piece).is_empty()
        })
    }

    fn toggle_active_side(&mut self) {
        debug_assert!(
            self.in_progress.is_none(),
            "active side toggled with a move half-committed"
        );
        self.active = self.active.opponent();
    }
}
