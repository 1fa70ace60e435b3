//! Exhaustive minimax search with alpha-beta pruning.
//!
//! Scores are from the point of view of the solver's own mark: a win found
//! at depth `d` is worth `WIN_SCORE - d`, a loss `d - WIN_SCORE`, a draw
//! [`DRAW_SCORE`]. Shallower wins and deeper losses are therefore preferred.

use crate::{Board, Outcome, Player, Position, Square, evaluate};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Base utility of a win, reduced by the depth at which it happens.
pub const WIN_SCORE: i32 = 10;

/// Utility of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Upper bound of the initial search window.
pub const INFINITY: i32 = i32::MAX;

/// Lower bound of the initial search window.
pub const NEG_INFINITY: i32 = -i32::MAX;

/// A legal move together with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ScoredMove {
    /// Cell the mark would be placed in.
    pub position: Position,
    /// Score of the resulting position for the searching player.
    pub score: i32,
}

/// Error returned when there is no move to choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SolverError {
    /// The board is already won or drawn.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// No empty square is left.
    #[display("No legal moves available")]
    NoLegalMoves,
}

impl std::error::Error for SolverError {}

/// Minimax solver playing for one mark.
///
/// Holds no state besides the maximizing mark, so one value can serve any
/// number of boards and calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solver {
    maximizer: Player,
}

impl Solver {
    /// Creates a solver that maximizes for `maximizer`.
    pub fn new(maximizer: Player) -> Self {
        Self { maximizer }
    }

    /// The mark this solver plays for.
    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    fn terminal_score(&self, outcome: Outcome, depth: i32) -> Option<i32> {
        match outcome {
            Outcome::Ongoing => None,
            Outcome::Draw => Some(DRAW_SCORE),
            Outcome::Won(player) if player == self.maximizer => Some(WIN_SCORE - depth),
            Outcome::Won(_) => Some(depth - WIN_SCORE),
        }
    }

    /// Returns the minimax value of `board` under optimal play from both sides.
    ///
    /// `maximizing` says whose turn it is at this node. Candidate moves are
    /// tried in ascending index order and every placement is undone before
    /// the next one, so `board` is unchanged when this returns. Pruning only
    /// skips branches that cannot change the result.
    pub fn search(
        &self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if let Some(score) = self.terminal_score(evaluate(board), depth) {
            return score;
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best = if maximizing { NEG_INFINITY } else { INFINITY };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }

            board.set(pos, Square::Occupied(mover));
            let score = self.search(board, depth + 1, !maximizing, alpha, beta);
            board.set(pos, Square::Empty);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                break;
            }
        }

        best
    }

    /// Scores every legal move for the solver's mark, in index order.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::GameOver`] if the board is already decided.
    #[instrument(skip(self, board), fields(maximizer = %self.maximizer, board = %board))]
    pub fn scored_moves(&self, board: &Board) -> Result<Vec<ScoredMove>, SolverError> {
        let outcome = evaluate(board);
        if outcome.is_terminal() {
            debug!(%outcome, "Refusing to search a finished board");
            return Err(SolverError::GameOver(outcome));
        }

        let mut scratch = *board;
        let moves: Vec<ScoredMove> = Position::valid_moves(board)
            .into_iter()
            .map(|pos| {
                scratch.set(pos, Square::Occupied(self.maximizer));
                let score = self.search(&mut scratch, 0, false, NEG_INFINITY, INFINITY);
                scratch.set(pos, Square::Empty);
                ScoredMove::new(pos, score)
            })
            .collect();

        debug!(candidates = moves.len(), "Scored candidate moves");
        Ok(moves)
    }

    /// Picks the move with the highest score.
    ///
    /// Ties go to the lowest index. The caller's board is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::GameOver`] on a won or drawn board and
    /// [`SolverError::NoLegalMoves`] if there is nothing to choose from.
    #[instrument(skip(self, board), fields(maximizer = %self.maximizer, board = %board))]
    pub fn best_move(&self, board: &Board) -> Result<Position, SolverError> {
        let mut best: Option<ScoredMove> = None;
        for candidate in self.scored_moves(board)? {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        let chosen = best.ok_or(SolverError::NoLegalMoves)?;
        debug!(position = %chosen.position, score = chosen.score, "Selected move");
        Ok(chosen.position)
    }
}

/// Picks `player`'s best move on `board`.
///
/// Shorthand for `Solver::new(player).best_move(board)`.
pub fn best_move(board: &Board, player: Player) -> Result<Position, SolverError> {
    Solver::new(player).best_move(board)
}
