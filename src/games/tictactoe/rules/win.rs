//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Outcome};
use tracing::instrument;

/// Every line that wins, in checking order: rows, columns, the main
/// diagonal, then the anti-diagonal.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Returns the player holding three in a row, or [`Outcome::NoWinner`].
///
/// Lines are checked in a fixed order and the first complete one wins.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line.map(|(row, col)| board.get(row, col));
        if let Some(mark) = a.and_then(Cell::mark)
            && a == b
            && b == c
        {
            return Outcome::Winner(mark);
        }
    }

    Outcome::NoWinner
}
