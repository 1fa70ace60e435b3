//! Strictly Arena - play tic-tac-toe against a perfect opponent.
//!
//! # Architecture
//!
//! - **Game**: typestate lifecycle (setup, in progress, finished)
//! - **Players**: human (line input), minimax computer, first-free-square AI
//! - **Orchestrator**: turn controller that alternates players and emits events
//! - **Config**: TOML settings with CLI overrides
//! - **Analysis**: per-move scores for a given board
//!
//! The solver itself lives in [`strictly_minimax`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod config;
mod game;
mod mode;
mod orchestrator;
mod players;

pub use analysis::AnalysisReport;
pub use config::{ArenaConfig, ConfigError};
pub use game::{GameFinished, GameInProgress, GameResult, GameSetup, Move, MoveError};
pub use mode::{Difficulty, GameMode};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{HumanPlayer, MinimaxPlayer, Player, SimpleAi};

pub use strictly_minimax::{Board, Outcome, Player as Mark, Position, Square};
