//! Simple AI that picks the first available square.

use super::Player;
use crate::game::GameInProgress;
use anyhow::Result;
use std::time::Duration;
use strictly_minimax::Position;
use tracing::debug;

/// Weak opponent that takes the first empty square.
pub struct SimpleAi {
    name: String,
    think_delay: Duration,
}

impl SimpleAi {
    /// Creates a new simple AI.
    pub fn new(name: impl Into<String>, think_delay: Duration) -> Self {
        Self {
            name: name.into(),
            think_delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for SimpleAi {
    async fn get_move(&mut self, game: &GameInProgress) -> Result<Position> {
        debug!(ai = %self.name, "AI making move");

        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let Some(position) = game.valid_moves().into_iter().next() else {
            anyhow::bail!("No valid moves available");
        };

        debug!(ai = %self.name, %position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
