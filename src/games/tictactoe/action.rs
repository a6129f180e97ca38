//! First-class action types for tic-tac-toe.
//!
//! An action names a cell by `(row, col)`. It is only meaningful relative to
//! a specific board, where it must point at an empty cell.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A `(row, col)` coordinate pair, each component in `0..3`.
///
/// Actions order row-major, which fixes the iteration order of
/// [`actions`](super::actions) and therefore the minimax tie-break.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({}, {})", row, col)]
pub struct Action {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true when both coordinates lie on a 3x3 board.
    pub fn in_bounds(&self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidActionReason {
    /// A coordinate is outside `0..3`.
    #[display("out of bounds")]
    OutOfBounds,
    /// The target cell already holds a mark.
    #[display("already occupied")]
    Occupied,
}

/// The action does not name an empty cell on the board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid action {}: cell {} at {}:{}", action, reason, file, line)]
pub struct InvalidActionError {
    /// The rejected action.
    pub action: Action,
    /// Why it was rejected.
    pub reason: InvalidActionReason,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidActionError {
    /// Creates a new invalid action error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(action: Action, reason: InvalidActionReason) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            action,
            reason,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_order_row_major() {
        let mut all = vec![Action::new(2, 0), Action::new(0, 2), Action::new(1, 1)];
        all.sort();
        assert_eq!(
            all,
            vec![Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)]
        );
    }

    #[test]
    fn test_in_bounds() {
        assert!(Action::new(2, 2).in_bounds());
        assert!(!Action::new(3, 0).in_bounds());
        assert!(!Action::from((0, 7)).in_bounds());
    }

    #[test]
    fn test_error_message_names_reason() {
        let err = InvalidActionError::new(Action::new(0, 0), InvalidActionReason::Occupied);
        let msg = err.to_string();
        assert!(msg.contains("(0, 0)"));
        assert!(msg.contains("occupied"));
        assert_eq!(err.reason, InvalidActionReason::Occupied);
    }
}
