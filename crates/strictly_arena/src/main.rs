//! Strictly Arena - terminal front end for the minimax solver.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_arena::{
    AnalysisReport, ArenaConfig, Board, Difficulty, GameEvent, GameMode, Mark, Orchestrator,
    Outcome,
};
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            computer_mark,
            first,
            difficulty,
            delay_ms,
        } => {
            let config = load_config(&config, mode, computer_mark, first, difficulty, delay_ms)?;
            run_play(config).await
        }
        Command::Analyze {
            board,
            player,
            json,
        } => run_analyze(&board, player, json),
    }
}

/// Loads the config file and applies command-line overrides.
#[instrument(skip(path), fields(path = %path.display()))]
fn load_config(
    path: &Path,
    mode: Option<GameMode>,
    computer_mark: Option<Mark>,
    first: Option<Mark>,
    difficulty: Option<Difficulty>,
    delay_ms: Option<u64>,
) -> Result<ArenaConfig> {
    let mut config = ArenaConfig::load_or_default(path)?;

    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(mark) = computer_mark {
        config = config.with_computer_mark(mark);
    }
    if let Some(mark) = first {
        config = config.with_first_player(mark);
    }
    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_think_delay_ms(delay_ms);
    }

    info!(?config, "Effective configuration");
    Ok(config)
}

/// Plays one game, printing events as they arrive.
async fn run_play(config: ArenaConfig) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            present(&event);
        }
    });

    println!("{}", config.mode().name());
    let mut orchestrator = Orchestrator::from_config(&config, event_tx);
    let result = orchestrator.run().await;

    // Dropping the orchestrator closes the channel so the printer drains and exits
    drop(orchestrator);
    printer.await?;

    result.map(|_| ())
}

fn present(event: &GameEvent) {
    match event {
        GameEvent::BoardChanged(board) => println!("\n{}\n", board.display()),
        GameEvent::TurnStarted {
            player,
            mark,
            human: true,
        } => println!("{player} [{mark}] to move, enter 1-9:"),
        GameEvent::TurnStarted { player, .. } => println!("{player} is thinking..."),
        GameEvent::MoveMade {
            player, position, ..
        } => println!("{player} plays {position}"),
        GameEvent::GameOver {
            outcome: Outcome::Draw,
            ..
        } => println!("Draw!"),
        GameEvent::GameOver {
            winner: Some(name),
            ..
        } => println!("{name} wins!"),
        GameEvent::GameOver { outcome, .. } => println!("{outcome}"),
    }
}

/// Prints per-move scores for a board.
#[instrument]
fn run_analyze(board: &str, player: Mark, json: bool) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))?;
    let report = AnalysisReport::analyze(board, player).context("Cannot analyze this board")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}
