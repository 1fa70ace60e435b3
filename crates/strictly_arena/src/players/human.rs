//! Human player that reads moves from a line-based input.

use super::Player;
use crate::game::GameInProgress;
use anyhow::Result;
use std::sync::Arc;
use strictly_minimax::Position;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Human player typing `1`-`9` or a position label, one move per line.
///
/// The reader sits behind a shared lock so two hot-seat players can take
/// turns on the same terminal without either buffering the other's input.
pub struct HumanPlayer<R> {
    name: String,
    input: Arc<Mutex<R>>,
}

impl<R> HumanPlayer<R> {
    /// Creates a human player reading from a shared input.
    pub fn new(name: impl Into<String>, input: Arc<Mutex<R>>) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }

    /// Creates a human player that owns its reader.
    pub fn from_reader(name: impl Into<String>, reader: R) -> Self {
        Self::new(name, Arc::new(Mutex::new(reader)))
    }
}

/// Parses `1`-`9` (1-based, as shown on the board) or a position label.
fn parse_input(line: &str) -> Option<Position> {
    let trimmed = line.trim();
    if let Ok(num) = trimmed.parse::<usize>() {
        return num.checked_sub(1).and_then(Position::from_index);
    }
    Position::from_label_or_number(trimmed)
}

#[async_trait::async_trait]
impl<R> Player for HumanPlayer<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn get_move(&mut self, game: &GameInProgress) -> Result<Position> {
        let mut input = self.input.lock().await;
        let mut line = String::new();

        loop {
            line.clear();
            let read = input.read_line(&mut line).await?;
            if read == 0 {
                anyhow::bail!("Input closed before {} chose a move", self.name);
            }

            let Some(position) = parse_input(&line) else {
                warn!(input = %line.trim(), "Not a position, enter 1-9 or a label like 'center'");
                continue;
            };

            if !game.board().is_empty(position) {
                warn!(%position, "Square is already occupied");
                continue;
            }

            debug!(player = %self.name, %position, "Human chose position");
            return Ok(position);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}
