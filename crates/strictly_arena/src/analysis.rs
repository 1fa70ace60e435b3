//! Per-move analysis of a single board.

use derive_getters::Getters;
use serde::{Serialize, Serializer};
use strictly_minimax::{Board, Outcome, Player as Mark, Position, ScoredMove, Solver, SolverError};
use tracing::instrument;

/// Scores of every legal move for one side, plus the move the solver picks.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct AnalysisReport {
    /// Board that was analyzed.
    #[serde(serialize_with = "compact_board")]
    board: Board,
    /// Side the scores are computed for.
    player: Mark,
    /// Status of the board.
    outcome: Outcome,
    /// Every legal move with its score, in index order.
    moves: Vec<ScoredMove>,
    /// Move the solver would play.
    best: Position,
}

fn compact_board<S: Serializer>(board: &Board, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(board)
}

impl AnalysisReport {
    /// Analyzes `board` from `player`'s point of view.
    ///
    /// # Errors
    ///
    /// Fails with [`SolverError::GameOver`] if the board is already decided.
    #[instrument(skip(board), fields(board = %board))]
    pub fn analyze(board: Board, player: Mark) -> Result<Self, SolverError> {
        let solver = Solver::new(player);
        let moves = solver.scored_moves(&board)?;
        let best = solver.best_move(&board)?;

        Ok(Self {
            board,
            player,
            outcome: strictly_minimax::evaluate(&board),
            moves,
            best,
        })
    }

    /// Renders the report as plain text.
    pub fn render(&self) -> String {
        let mut out = format!(
            "{}\n\nStatus: {}\nScores for {} (higher is better):\n",
            self.board.display(),
            self.outcome,
            self.player
        );
        for scored in &self.moves {
            let marker = if scored.position == self.best { " <- best" } else { "" };
            out.push_str(&format!(
                "  {} {:<13} {:>3}{}\n",
                scored.position.to_index() + 1,
                scored.position.label(),
                scored.score,
                marker
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_marks_winning_move() {
        let board: Board = "OO.XX....".parse().unwrap();
        let report = AnalysisReport::analyze(board, Mark::O).unwrap();
        assert_eq!(*report.best(), Position::TopRight);
        assert_eq!(report.moves().len(), 5);
        assert!(report.render().contains("Top-right"));
    }

    #[test]
    fn test_report_serializes_compact_board() {
        let board: Board = "X...O....".parse().unwrap();
        let report = AnalysisReport::analyze(board, Mark::X).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["board"], "X...O....");
        assert_eq!(json["player"], "X");
        assert_eq!(json["outcome"], "Ongoing");
        assert_eq!(json["moves"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_finished_board_is_an_error() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert!(matches!(
            AnalysisReport::analyze(board, Mark::O),
            Err(SolverError::GameOver(Outcome::Won(Mark::X)))
        ));
    }
}
