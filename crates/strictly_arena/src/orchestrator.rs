//! Game orchestration between players.

use crate::config::ArenaConfig;
use crate::game::{GameFinished, GameResult, GameSetup, Move};
use crate::mode::{Difficulty, GameMode};
use crate::players::{HumanPlayer, MinimaxPlayer, Player, SimpleAi};
use anyhow::Result;
use std::sync::Arc;
use strictly_minimax::{Board, Outcome, Player as Mark, Position};
use tokio::io::BufReader;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player is about to choose a move.
    TurnStarted {
        /// Display name of the player.
        player: String,
        /// Mark the player places.
        mark: Mark,
        /// Whether input is expected from the keyboard.
        human: bool,
    },
    /// Move was made.
    MoveMade {
        /// Display name of the player.
        player: String,
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// Board after the latest move (or the empty board at the start).
    BoardChanged(Board),
    /// Game ended.
    GameOver {
        /// Final outcome, a win or a draw.
        outcome: Outcome,
        /// Display name of the winner, if any.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
///
/// Each call to [`Orchestrator::run`] starts from an empty board.
pub struct Orchestrator {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    first: Mark,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        first: Mark,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            player_x,
            player_o,
            first,
            event_tx,
        }
    }

    /// Builds the players described by `config`, with humans on stdin.
    #[instrument(skip(config, event_tx), fields(mode = %config.mode()))]
    pub fn from_config(config: &ArenaConfig, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        let stdin = Arc::new(Mutex::new(BufReader::new(tokio::io::stdin())));
        let human = |mark: Mark| -> Box<dyn Player> {
            Box::new(HumanPlayer::new(
                format!("{} ({})", config.human_name(), mark),
                Arc::clone(&stdin),
            ))
        };

        let (player_x, player_o) = match config.mode() {
            GameMode::HumanVsComputer => match config.computer_mark() {
                Mark::X => (computer(config, Mark::X), human(Mark::O)),
                Mark::O => (human(Mark::X), computer(config, Mark::O)),
            },
            GameMode::ComputerVsComputer => (computer(config, Mark::X), computer(config, Mark::O)),
            GameMode::HumanVsHuman => (human(Mark::X), human(Mark::O)),
        };

        Self::new(player_x, player_o, *config.first_player(), event_tx)
    }

    fn player_mut(&mut self, mark: Mark) -> &mut dyn Player {
        match mark {
            Mark::X => self.player_x.as_mut(),
            Mark::O => self.player_o.as_mut(),
        }
    }

    fn player_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    /// Runs one game to completion and returns the finished game.
    #[instrument(skip(self), fields(first = %self.first))]
    pub async fn run(&mut self) -> Result<GameFinished> {
        info!("Starting game orchestration");

        let mut game = GameSetup::new().start(self.first);
        self.event_tx.send(GameEvent::BoardChanged(*game.board()))?;

        loop {
            let mark = game.to_move();
            let player_name = self.player_name(mark).to_string();

            let human = self.player_mut(mark).is_human();
            self.event_tx.send(GameEvent::TurnStarted {
                player: player_name.clone(),
                mark,
                human,
            })?;

            debug!(player = %player_name, %mark, "Waiting for move");
            let position = self.player_mut(mark).get_move(&game).await?;

            let result = game.make_move(Move::new(mark, position))?;

            self.event_tx.send(GameEvent::MoveMade {
                player: player_name,
                mark,
                position,
            })?;

            match result {
                GameResult::InProgress(next) => {
                    self.event_tx.send(GameEvent::BoardChanged(*next.board()))?;
                    game = next;
                }
                GameResult::Finished(finished) => {
                    self.event_tx
                        .send(GameEvent::BoardChanged(*finished.board()))?;

                    let outcome = finished.outcome();
                    let winner = outcome
                        .winner()
                        .map(|mark| self.player_name(mark).to_string());
                    info!(%outcome, ?winner, "Game over");
                    self.event_tx.send(GameEvent::GameOver { outcome, winner })?;

                    return Ok(finished);
                }
            }
        }
    }
}

fn computer(config: &ArenaConfig, mark: Mark) -> Box<dyn Player> {
    let name = format!("{} ({})", config.computer_name(), mark);
    match config.difficulty() {
        Difficulty::Perfect => Box::new(MinimaxPlayer::new(name, config.think_delay())),
        Difficulty::Easy => Box::new(SimpleAi::new(name, config.think_delay())),
    }
}
