//! Tests for the typestate game lifecycle.

use strictly_arena::{GameInProgress, GameResult, GameSetup, Mark, Move, MoveError, Outcome, Position};

#[test]
fn test_typestate_lifecycle() {
    let game = GameSetup::new().start(Mark::X);
    assert_eq!(game.to_move(), Mark::X);

    let result = game
        .make_move(Move::new(Mark::X, Position::Center))
        .expect("Valid move");

    let game = match result {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Game shouldn't finish after one move"),
    };

    assert_eq!(game.to_move(), Mark::O);
    assert_eq!(game.valid_moves().len(), 8);
}

#[test]
fn test_occupied_square_rejected() {
    let game = match GameSetup::new()
        .start(Mark::X)
        .make_move(Move::new(Mark::X, Position::Center))
        .unwrap()
    {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Unexpected finish"),
    };

    let result = game.make_move(Move::new(Mark::O, Position::Center));
    assert_eq!(result.unwrap_err(), MoveError::SquareOccupied(Position::Center));
}

#[test]
fn test_wrong_player_rejected() {
    let game = GameSetup::new().start(Mark::X);
    let action = Move::new(Mark::O, Position::Center);
    assert_eq!(game.check(&action), Err(MoveError::WrongPlayer(Mark::O)));
    assert!(matches!(game.make_move(action), Err(MoveError::WrongPlayer(Mark::O))));
}

#[test]
fn test_o_can_move_first() {
    let game = GameSetup::new().start(Mark::O);
    assert_eq!(game.to_move(), Mark::O);
    assert!(game.check(&Move::new(Mark::O, Position::TopLeft)).is_ok());
}

#[test]
fn test_replay_from_history() {
    let moves = vec![
        Move::new(Mark::X, Position::Center),
        Move::new(Mark::O, Position::TopLeft),
        Move::new(Mark::X, Position::BottomRight),
        Move::new(Mark::O, Position::TopRight),
        Move::new(Mark::X, Position::BottomLeft),
    ];

    match GameInProgress::replay(Mark::X, &moves).expect("Valid replay") {
        GameResult::InProgress(game) => {
            assert_eq!(game.history().len(), 5);
            assert_eq!(game.to_move(), Mark::O);
        }
        GameResult::Finished(_) => panic!("Game shouldn't finish"),
    }
}

#[test]
fn test_win_detection() {
    let moves = vec![
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopCenter),
        Move::new(Mark::O, Position::BottomLeft),
        Move::new(Mark::X, Position::TopRight),
    ];

    match GameInProgress::replay(Mark::X, &moves).expect("Valid replay") {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), Outcome::Won(Mark::X));
            assert_eq!(game.history().len(), 5);
        }
        GameResult::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_draw_detection_and_restart() {
    let moves = vec![
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopRight),
        Move::new(Mark::O, Position::TopCenter),
        Move::new(Mark::X, Position::BottomCenter),
        Move::new(Mark::O, Position::MiddleLeft),
        Move::new(Mark::X, Position::MiddleRight),
        Move::new(Mark::O, Position::BottomRight),
        Move::new(Mark::X, Position::BottomLeft),
    ];

    let finished = match GameInProgress::replay(Mark::X, &moves).expect("Valid replay") {
        GameResult::Finished(game) => game,
        GameResult::InProgress(_) => panic!("Game should be finished"),
    };
    assert_eq!(finished.outcome(), Outcome::Draw);
    assert!(finished.board().is_full());

    let setup = finished.restart();
    assert_eq!(setup.board(), &strictly_arena::Board::new());
}

#[test]
fn test_replay_stops_at_first_finish() {
    let moves = vec![
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::MiddleLeft),
        Move::new(Mark::X, Position::TopCenter),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopRight),
        // Never applied, the game is already won
        Move::new(Mark::O, Position::MiddleRight),
    ];

    match GameInProgress::replay(Mark::X, &moves).unwrap() {
        GameResult::Finished(game) => assert_eq!(game.history().len(), 5),
        GameResult::InProgress(_) => panic!("Game should be finished"),
    }
}
