//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. The whole game tree below the
//! given board is searched: no pruning, no transposition table, no depth
//! limit beyond the nine plies the board allows.

use super::action::Action;
use super::rules::{terminal, utility};
use super::state::{initial_state, player, successors};
use super::types::{Board, Player, Utility};
use rand::Rng;
use tracing::{debug, instrument};

/// Returns the best action for the player to move, or `None` on a terminal
/// board.
///
/// Uses the thread-local RNG for the opening move; see [`minimax_with_rng`].
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Option<Action> {
    minimax_with_rng(board, &mut rand::rng())
}

/// Returns the best action for the player to move, drawing the opening move
/// from `rng`.
///
/// On the empty board every first move has the same value, so the opening is
/// a uniformly random `(row, col)` with each coordinate drawn from `0..3`.
/// That pick skips the legal-move filter; on the empty board all nine cells
/// are legal anyway.
///
/// Otherwise ties go to the first best action in row-major order.
#[instrument(skip(board, rng))]
pub fn minimax_with_rng<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Action> {
    if terminal(board) {
        debug!("Board is terminal, no move");
        return None;
    }
    if *board == initial_state() {
        let action = Action::new(rng.random_range(0..3), rng.random_range(0..3));
        debug!(%action, "Random opening move");
        return Some(action);
    }

    let to_move = player(board);
    let mut best: Option<(Action, Utility)> = None;
    for (action, next) in successors(board) {
        let score = match to_move {
            Player::X => min_value(&next),
            Player::O => max_value(&next),
        };
        let improves = match (to_move, best) {
            (_, None) => true,
            (Player::X, Some((_, best_score))) => score > best_score,
            (Player::O, Some((_, best_score))) => score < best_score,
        };
        if improves {
            best = Some((action, score));
        }
    }

    if let Some((action, score)) = best {
        debug!(player = %to_move, %action, score, "Selected move");
    }
    best.map(|(action, _)| action)
}

/// Value of `board` when X moves next and both sides play perfectly.
pub fn max_value(board: &Board) -> Utility {
    if terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| min_value(&next))
        .fold(Utility::MIN, Utility::max)
}

/// Value of `board` when O moves next and both sides play perfectly.
pub fn min_value(board: &Board) -> Utility {
    if terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| max_value(&next))
        .fold(Utility::MAX, Utility::min)
}

/// Game-theoretic value of `board` with the player to move choosing.
#[instrument(skip(board))]
pub fn game_value(board: &Board) -> Utility {
    if terminal(board) {
        return utility(board);
    }
    match player(board) {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}
