//! Shared helpers for walking the tic-tac-toe game tree.

#![allow(dead_code)]

use std::collections::HashSet;
use strictly_minimax::{Board, Player, Position, Square, evaluate};

/// Every board reachable from the empty board with X moving first,
/// paired with the player to move. Terminal boards are included.
pub fn reachable_boards() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(Board::new(), Player::X, &mut seen, &mut out);
    out
}

fn walk(board: Board, to_move: Player, seen: &mut HashSet<Board>, out: &mut Vec<(Board, Player)>) {
    if !seen.insert(board) {
        return;
    }
    out.push((board, to_move));
    if evaluate(&board).is_terminal() {
        return;
    }
    for pos in Position::valid_moves(&board) {
        let mut next = board;
        next.set(pos, Square::Occupied(to_move));
        walk(next, to_move.opponent(), seen, out);
    }
}

/// Empty cells that would complete a line for `player`.
pub fn winning_cells(board: &Board, player: Player) -> Vec<Position> {
    Position::valid_moves(board)
        .into_iter()
        .filter(|pos| {
            let mut next = *board;
            next.set(*pos, Square::Occupied(player));
            strictly_minimax::check_winner(&next) == Some(player)
        })
        .collect()
}
