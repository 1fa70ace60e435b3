//! Command-line interface for strictly_arena.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_arena::{Difficulty, GameMode, Mark};

/// Strictly Arena - tic-tac-toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_arena")]
#[command(about = "Tic-tac-toe with an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Path to the TOML config file (defaults apply if it doesn't exist)
        #[arg(short, long, default_value = "strictly_arena.toml")]
        config: PathBuf,

        /// Who plays on each side
        #[arg(long, value_enum)]
        mode: Option<GameMode>,

        /// Mark played by the computer (X or O)
        #[arg(long)]
        computer_mark: Option<Mark>,

        /// Mark that moves first (X or O)
        #[arg(long)]
        first: Option<Mark>,

        /// Strength of computer players
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Score every legal move on a board
    Analyze {
        /// Board as 9 cells in row-major order, e.g. "OO.XX...." ('.', '_' or '-' for empty)
        #[arg(short, long)]
        board: String,

        /// Side to move (X or O)
        #[arg(short, long)]
        player: Mark,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
