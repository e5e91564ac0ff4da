//! Command-line interface for strictly_unbounded.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_unbounded::Point;

/// Strictly Unbounded - N-in-a-row on an infinite board
#[derive(Parser, Debug)]
#[command(name = "strictly_unbounded")]
#[command(about = "Replay and inspect unbounded N-in-a-row games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a sequence of moves through the turn reducer
    Replay {
        /// Moves as `x,y`, alternating players starting with the configured opener
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<Point>,

        /// Path to an engine config TOML file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Win-length override
        #[arg(short = 'n', long)]
        win_length: Option<usize>,

        /// Print the final state as a JSON snapshot
        #[arg(long)]
        json: bool,
    },

    /// Load a JSON snapshot and report its status
    Inspect {
        /// Path to the snapshot file
        snapshot: PathBuf,
    },
}
