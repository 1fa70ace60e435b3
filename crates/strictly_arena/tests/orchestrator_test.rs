//! Tests for turn orchestration between players.

use std::time::Duration;
use strictly_arena::{
    GameEvent, HumanPlayer, Mark, MinimaxPlayer, Orchestrator, Outcome, Player, Position,
    SimpleAi,
};
use tokio::sync::mpsc;

fn perfect(name: &str) -> Box<dyn Player> {
    Box::new(MinimaxPlayer::new(name, Duration::ZERO))
}

fn easy(name: &str) -> Box<dyn Player> {
    Box::new(SimpleAi::new(name, Duration::ZERO))
}

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_perfect_players_draw() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(perfect("Alpha"), perfect("Beta"), Mark::X, tx);

    let finished = orchestrator.run().await.unwrap();
    assert_eq!(finished.outcome(), Outcome::Draw);
    assert_eq!(finished.history().len(), 9);

    let events = drain(&mut rx);
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            outcome: Outcome::Draw,
            winner: None,
        })
    );
    let moves = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveMade { .. }))
        .count();
    assert_eq!(moves, 9);
}

#[tokio::test]
async fn test_perfect_player_beats_first_free_square() {
    for first in [Mark::X, Mark::O] {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut orchestrator = Orchestrator::new(easy("Easy"), perfect("Perfect"), first, tx);
        let finished = orchestrator.run().await.unwrap();
        assert_eq!(finished.outcome(), Outcome::Won(Mark::O), "first {first}");
    }
}

#[tokio::test]
async fn test_each_run_starts_from_empty_board() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(easy("One"), easy("Two"), Mark::X, tx);

    let first = orchestrator.run().await.unwrap();
    drain(&mut rx);
    let second = orchestrator.run().await.unwrap();

    assert_eq!(first.history(), second.history());
    assert_eq!(
        rx.try_recv().unwrap(),
        GameEvent::BoardChanged(strictly_arena::Board::new())
    );
}

#[tokio::test]
async fn test_human_input_skips_bad_lines() {
    // "zz" is garbage, the second "5" and "1" are already taken.
    let input: &[u8] = b"5\nzz\n5\n1\n2\n8\n";
    let human = HumanPlayer::from_reader("Human", input);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(Box::new(human), easy("Easy"), Mark::X, tx);

    let finished = orchestrator.run().await.unwrap();

    // X: center, then top-center, then bottom-center. O: top-left, top-right.
    let x_moves: Vec<Position> = finished
        .history()
        .iter()
        .filter(|m| m.player == Mark::X)
        .map(|m| m.position)
        .collect();
    assert_eq!(
        x_moves,
        vec![Position::Center, Position::TopCenter, Position::BottomCenter]
    );
    assert_eq!(finished.outcome(), Outcome::Won(Mark::X));

    let events = drain(&mut rx);
    assert!(events.contains(&GameEvent::TurnStarted {
        player: "Human".to_string(),
        mark: Mark::X,
        human: true,
    }));
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            outcome: Outcome::Won(Mark::X),
            winner: Some("Human".to_string()),
        })
    );
}

#[tokio::test]
async fn test_closed_input_is_an_error() {
    let human = HumanPlayer::from_reader("Human", &b""[..]);
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(Box::new(human), easy("Easy"), Mark::X, tx);
    assert!(orchestrator.run().await.is_err());
}
