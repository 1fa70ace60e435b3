//! Game mode and difficulty selection.

use serde::{Deserialize, Serialize};

/// Who sits on each side of the board.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Human against the computer.
    #[default]
    HumanVsComputer,
    /// Computer against itself.
    ComputerVsComputer,
    /// Two humans sharing the terminal.
    HumanVsHuman,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::HumanVsComputer => "Human vs Computer",
            GameMode::ComputerVsComputer => "Computer vs Computer",
            GameMode::HumanVsHuman => "Human vs Human",
        }
    }
}

/// Strength of the computer side.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Difficulty {
    /// Takes the first empty square.
    Easy,
    /// Full minimax search, never loses.
    #[default]
    Perfect,
}
