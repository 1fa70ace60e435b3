//! Player trait and implementations.

mod human;
mod minimax;
mod simple_ai;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;
pub use simple_ai::SimpleAi;

use crate::game::GameInProgress;
use anyhow::Result;
use strictly_minimax::Position;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player for the mark currently to move.
    async fn get_move(&mut self, game: &GameInProgress) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether moves come from a person at the keyboard.
    fn is_human(&self) -> bool {
        false
    }
}
