//! Summary of a single board: turn, legal moves, best move and value.

use crate::games::tictactoe::{
    Action, Board, Outcome, Player, Utility, actions, game_value, minimax_with_rng, player,
    terminal, winner,
};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Everything the engine knows about one board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveReport {
    /// The analyzed board.
    board: Board,
    /// Player whose turn it is.
    to_move: Player,
    /// Legal actions in row-major order.
    legal_moves: Vec<Action>,
    /// Whether the game is over.
    terminal: bool,
    /// Winner on the board, if any.
    outcome: Outcome,
    /// Move chosen by minimax, `None` on a terminal board.
    best_move: Option<Action>,
    /// Game value under optimal play.
    value: Utility,
}

impl MoveReport {
    /// Analyzes `board`, drawing any random opening move from `rng`.
    #[instrument(skip(board, rng))]
    pub fn analyze<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Self {
        Self {
            board: *board,
            to_move: player(board),
            legal_moves: actions(board).into_iter().collect(),
            terminal: terminal(board),
            outcome: winner(board),
            best_move: minimax_with_rng(board, rng),
            value: game_value(board),
        }
    }
}

impl std::fmt::Display for MoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f, "to move:     {}", self.to_move)?;
        writeln!(f, "legal moves: {}", self.legal_moves.len())?;
        writeln!(f, "outcome:     {}", self.outcome)?;
        match self.best_move {
            Some(action) => writeln!(f, "best move:   {}", action)?,
            None => writeln!(f, "best move:   none")?,
        }
        write!(f, "value:       {}", self.value)
    }
}
