//! Computer player backed by the minimax solver.

use super::Player;
use crate::game::GameInProgress;
use anyhow::Result;
use std::time::Duration;
use strictly_minimax::{Position, Solver};
use tracing::{debug, instrument};

/// Perfect-play computer opponent.
///
/// The search runs on tokio's blocking pool so it never stalls the task
/// driving input and output.
pub struct MinimaxPlayer {
    name: String,
    think_delay: Duration,
}

impl MinimaxPlayer {
    /// Creates a computer player that pauses `think_delay` before each move.
    pub fn new(name: impl Into<String>, think_delay: Duration) -> Self {
        Self {
            name: name.into(),
            think_delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    #[instrument(skip(self, game), fields(ai = %self.name, mark = %game.to_move()))]
    async fn get_move(&mut self, game: &GameInProgress) -> Result<Position> {
        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let solver = Solver::new(game.to_move());
        let board = *game.board();
        let position = tokio::task::spawn_blocking(move || solver.best_move(&board)).await??;

        debug!(%position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
