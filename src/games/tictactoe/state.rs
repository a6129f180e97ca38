//! Board state queries: whose turn it is, which moves are legal, and what a
//! move produces.

use super::action::{Action, InvalidActionError, InvalidActionReason};
use super::types::{Board, Player};
use std::collections::BTreeSet;
use tracing::{instrument, trace};

/// Returns the starting board: nine empty cells.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next.
///
/// X moves first, so O is to move exactly when X has more marks. No other
/// validation is done; an unreachable board gets the same counting rule.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Returns every empty cell as an action, in row-major order.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    (0..3)
        .flat_map(|row| (0..3).map(move |col| Action::new(row, col)))
        .filter(|action| board.is_empty(action.row, action.col))
        .collect()
}

/// Returns the board after the player to move marks `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidActionError`] if `action` is out of range or its cell is
/// already occupied.
#[instrument(level = "trace", skip(board), fields(action = %action))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidActionError> {
    if !action.in_bounds() {
        return Err(InvalidActionError::new(
            action,
            InvalidActionReason::OutOfBounds,
        ));
    }
    if !board.is_empty(action.row, action.col) {
        return Err(InvalidActionError::new(action, InvalidActionReason::Occupied));
    }

    let mark = player(board);
    trace!(%mark, "Placing mark");
    Ok(board.place(action, mark))
}

/// Every legal action paired with the board it produces, row-major.
pub(super) fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let mark = player(board);
    actions(board)
        .into_iter()
        .map(move |action| (action, board.place(action, mark)))
}
