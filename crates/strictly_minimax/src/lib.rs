//! Strictly Minimax - a deterministic tic-tac-toe solver.
//!
//! The crate is split along the data flow of a single decision:
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`] and [`Position`]
//! - **Outcome evaluator**: [`evaluate`] reports win, draw or ongoing
//! - **Search engine**: [`Solver::search`], minimax with alpha-beta pruning
//! - **Move selector**: [`Solver::best_move`] picks the highest-scoring cell
//!
//! Everything here is pure and synchronous. A [`Solver`] carries only the
//! mark it plays for, so it can be shared freely and called reentrantly.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Outcome, Player, Position, Solver, evaluate};
//!
//! let board: Board = "OO.XX....".parse().unwrap();
//! assert_eq!(evaluate(&board), Outcome::Ongoing);
//!
//! let choice = Solver::new(Player::O).best_move(&board).unwrap();
//! assert_eq!(choice, Position::TopRight);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
mod rules;
mod solver;
mod types;

pub use position::Position;
pub use rules::{Outcome, WIN_LINES, check_winner, evaluate, is_full};
pub use solver::{
    DRAW_SCORE, INFINITY, NEG_INFINITY, ScoredMove, Solver, SolverError, WIN_SCORE, best_move,
};
pub use types::{Board, BoardError, Player, Square};
