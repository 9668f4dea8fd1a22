//! Checkers simulator CLI - plays automated games headlessly.
//!
//! Each game runs through the same session and turn coordinator as an
//! interactive game, with both sides automated and a move limit.

mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use checkers::Side;
use clap::Parser;
use metrics::{build_game_metrics, RunConfig};
use output::OutputWriter;
use simulator::{game_seed, GameResult, Simulator};
use tracing::{info, warn};
use types::{AiType, MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "checkers-sim")]
#[command(about = "Headless checkers simulator for comparing automated opponents")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// AI playing White (moves first)
    #[arg(long, default_value = "random")]
    first: AiType,

    /// AI playing Black
    #[arg(long, default_value = "random")]
    second: AiType,

    /// Base seed; game N uses seed + 2N
    #[arg(long)]
    seed: Option<u64>,

    /// Moves after which a game is scored as a draw
    #[arg(long, default_value = "200")]
    move_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: PathBuf,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if args.move_limit == 0 {
        return Err("--move-limit must be positive".into());
    }

    let ai_types = [args.first, args.second];
    if args.show_output {
        info!(
            games = args.games,
            first = ai_types[0].name(),
            second = ai_types[1].name(),
            move_limit = args.move_limit,
            "Starting simulator"
        );
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    let run_config = RunConfig {
        ai_types: ai_types.map(|ai| ai.name().to_string()),
        total_games: args.games,
        move_limit: args.move_limit,
    };

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(s) => game_seed(s, game_num),
            None => rand::random(),
        };

        match Simulator::new(game_seed, args.move_limit).simulate_game(ai_types) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    game_seed,
                    run_config.clone(),
                    &args.metrics_level,
                    &result,
                    duration_ms,
                );

                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }

                if args.verbose {
                    info!(game = game_num, outcome = %result.outcome, moves = result.moves, "Game completed");
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (results_path, csv_path) = output_writer.output_paths();
    let (results_path, csv_path) = (results_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", results_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games, &run_config.ai_types);
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    errors: u32,
    elapsed: Duration,
    total: u32,
    ai_types: &[String; 2],
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let games = results.len() as f64;
    let draws = results.iter().filter(|r| r.outcome.winner().is_none()).count();
    let avg_moves = results.iter().map(|r| r.moves as f64).sum::<f64>() / games;
    println!("Average moves: {:.1}", avg_moves);

    println!("\n=== Results by Side ===");
    for side in Side::ALL {
        let wins = results
            .iter()
            .filter(|r| r.outcome.winner() == Some(side))
            .count();
        let captures: u32 = results
            .iter()
            .map(|r| r.captures[side.index()] as u32)
            .sum();
        println!(
            "{} ({}): wins={} ({:.1}%), avg captures={:.1}",
            side,
            ai_types[side.index()],
            wins,
            wins as f64 / games * 100.0,
            captures as f64 / games
        );
    }
    println!("Draws: {} ({:.1}%)", draws, draws as f64 / games * 100.0);
}
