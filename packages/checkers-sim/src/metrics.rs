//! Metrics collection and output for simulation results.

use checkers::domain::MoveRecord;
use checkers::{GameOutcome, Side, WinReason};
use serde::Serialize;

use crate::simulator::GameResult;
use crate::types::MetricsLevel;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: RunConfig,
    pub result: GameResultMetrics,
    pub player_metrics: Vec<PlayerMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<Vec<MoveMetrics>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub ai_types: [String; 2],
    pub total_games: u32,
    pub move_limit: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub outcome: GameOutcome,
    pub winner: Option<Side>,
    pub moves: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub side: Side,
    pub ai_type: String,
    pub captures: u16,
    pub pieces_left: usize,
    pub kings_made: u32,
    pub capture_moves: u32,
    /// Longest single capture chain.
    pub longest_chain: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveMetrics {
    pub ply: u32,
    pub side: Side,
    pub notation: String,
    pub captured: usize,
    pub crowned: bool,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    config: RunConfig,
    level: &MetricsLevel,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let player_metrics = Side::ALL
        .iter()
        .map(|&side| build_player_metrics(side, &config.ai_types[side.index()], result))
        .collect();

    let moves = match level {
        MetricsLevel::Basic => None,
        MetricsLevel::Detailed => Some(
            result
                .history
                .iter()
                .enumerate()
                .map(|(ply, record)| build_move_metrics(ply as u32 + 1, record))
                .collect(),
        ),
    };

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config,
        result: GameResultMetrics {
            outcome: result.outcome,
            winner: result.outcome.winner(),
            moves: result.moves,
            duration_ms,
        },
        player_metrics,
        moves,
    }
}

fn build_player_metrics(side: Side, ai_type: &str, result: &GameResult) -> PlayerMetrics {
    let own = || result.history.iter().filter(move |r| r.side == side);

    PlayerMetrics {
        side,
        ai_type: ai_type.to_string(),
        captures: result.captures[side.index()],
        pieces_left: result.pieces_left[side.index()],
        kings_made: own().filter(|r| r.crowned).count() as u32,
        capture_moves: own().filter(|r| !r.captured.is_empty()).count() as u32,
        longest_chain: own().map(|r| r.captured.len()).max().unwrap_or(0),
    }
}

fn build_move_metrics(ply: u32, record: &MoveRecord) -> MoveMetrics {
    MoveMetrics {
        ply,
        side: record.side,
        notation: record.mv.to_string(),
        captured: record.captured.len(),
        crowned: record.crowned,
    }
}

/// Short label for the CSV `result` column.
fn result_label(outcome: &GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::Won {
            reason: WinReason::NoLegalMoves,
            ..
        } => "win",
        GameOutcome::Won {
            reason: WinReason::Resignation,
            ..
        } => "resignation",
        GameOutcome::Drawn { .. } => "draw",
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub result: &'static str,
    pub winner: String,
    pub moves: u32,
    pub first_captures: u16,
    pub second_captures: u16,
    pub first_ai: String,
    pub second_ai: String,
    pub duration_ms: f64,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            result: result_label(&metrics.result.outcome),
            winner: metrics
                .result
                .winner
                .map(|side| side.name().to_string())
                .unwrap_or_default(),
            moves: metrics.result.moves,
            first_captures: metrics.player_metrics[0].captures,
            second_captures: metrics.player_metrics[1].captures,
            first_ai: metrics.config.ai_types[0].clone(),
            second_ai: metrics.config.ai_types[1].clone(),
            duration_ms: metrics.result.duration_ms,
        }
    }
}
