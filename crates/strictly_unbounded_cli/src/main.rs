//! Strictly Unbounded - command-line replay tool

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_unbounded::{
    Action, EngineConfig, GameState, Invariant, MarksAlternateInvariant, Point, Snapshot,
};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (game, json) = match cli.command {
        Command::Replay {
            moves,
            config,
            win_length,
            json,
        } => {
            let config = load_config(config.as_deref(), win_length)?;
            (replay_moves(&config, &moves), json)
        }
        Command::Inspect { snapshot } => (load_snapshot(&snapshot)?, false),
    };

    println!("{}", render(&game, json)?);
    Ok(())
}

/// Reads the config file, if any, and applies the win-length override.
#[instrument]
fn load_config(path: Option<&Path>, win_length: Option<usize>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    match win_length {
        Some(n) => Ok(EngineConfig::new(n)?.with_opening_player(*config.opening_player())),
        None => Ok(config),
    }
}

/// Replays moves from a fresh game, skipping illegal ones.
#[instrument(skip(moves), fields(moves = moves.len()))]
fn replay_moves(config: &EngineConfig, moves: &[Point]) -> GameState {
    info!(win_length = *config.win_length(), "Starting replay");
    let mut game = config.new_game();

    for &point in moves {
        let action = Action::Move(point);
        if let Err(reason) = game.check(&action) {
            warn!(%point, %reason, "Skipping move");
            continue;
        }
        game = game.reduce(action);
        debug!(%point, marks = game.mark_count(), "Move applied");
    }

    game
}

/// Loads a snapshot file.
#[instrument]
fn load_snapshot(path: &Path) -> Result<GameState> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let snapshot = Snapshot::from_json(&text)?;
    let game = GameState::try_from(snapshot)?;

    if !MarksAlternateInvariant::holds(&game) {
        warn!(
            invariant = MarksAlternateInvariant::description(),
            "Snapshot was not produced by alternating turns"
        );
    }
    Ok(game)
}

/// Formats the game as a JSON snapshot or a short status report.
fn render(game: &GameState, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&Snapshot::from(game))?);
    }

    let status = match game.winner() {
        Some(winner) => format!("winner:     {}", winner),
        None => format!("to move:    {}", game.to_move()),
    };
    Ok(format!(
        "win length: {}\nmarks:      {}\n{}",
        game.win_length(),
        game.mark_count(),
        status
    ))
}
