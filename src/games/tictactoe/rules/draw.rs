//! End-of-game detection and scoring.

use super::super::{Board, Cell, Outcome, Player, Utility};
use super::win::winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|cell| cell != Cell::Empty)
}

/// Returns true once somebody has won or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board) != Outcome::NoWinner || is_full(board)
}

/// Checks if the game ended without a winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board) == Outcome::NoWinner
}

/// Scores a finished board from X's point of view.
///
/// Only meaningful on terminal boards. Any board without a winner scores 0,
/// including one that is still in progress.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> Utility {
    match winner(board) {
        Outcome::Winner(Player::X) => 1,
        Outcome::Winner(Player::O) => -1,
        Outcome::NoWinner => 0,
    }
}
