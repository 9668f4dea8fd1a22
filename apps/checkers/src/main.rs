use std::io::{self, BufRead, Write};

use checkers::{GameConfig, GameEvent, GameSession, Position, StandardRules};

mod telemetry;

fn main() -> io::Result<()> {
    telemetry::init_tracing();

    // CHECKERS_MODE, CHECKERS_AI, CHECKERS_AI_SEED and CHECKERS_MOVE_LIMIT
    // pick the players; RUST_LOG controls the JSON logs on stderr.
    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let mut session = match GameSession::new(StandardRules::new(), &config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("❌ Failed to set up the game: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = session.start() {
        eprintln!("❌ Failed to start the game: {e}");
        std::process::exit(1);
    }

    println!("White (w) starts at the bottom, Black (b) at the top. Kings are W/B.");
    println!("Type a square such as C3 to select a piece or move it, `resign` or `quit`.");
    present(session.drain_events());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    while let Some(side) = session.active_side() {
        print!("{side} > ");
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let input = line.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "resign" => session.resign(side),
            _ => match input.parse::<Position>() {
                Ok(square) => {
                    if let Err(e) = session.handle_selection(square) {
                        eprintln!("❌ {e}");
                        std::process::exit(1);
                    }
                }
                Err(_) => {
                    println!("Unrecognised square '{input}', expected something like C3");
                    continue;
                }
            },
        }
        present(session.drain_events());
    }

    Ok(())
}

/// Print moves and the game result, then the latest board.
fn present(events: Vec<GameEvent>) {
    let mut board = None;
    for event in events {
        match event {
            GameEvent::BoardChanged(snapshot) => board = Some(snapshot),
            GameEvent::MoveCommitted { side, mv } => println!("{side}: {mv}"),
            GameEvent::GameEnded { outcome } => println!("🏁 Game over: {outcome}"),
            GameEvent::TurnBecame { .. } => {}
        }
    }
    if let Some(board) = board {
        println!("{board}");
    }
}
