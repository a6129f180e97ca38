//! Optimal self-play: both sides move with minimax until the game ends.

use crate::games::tictactoe::{
    Action, Board, InvalidActionError, Outcome, Utility, initial_state, minimax_with_rng, player,
    result, terminal, utility, winner,
};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A finished game: the moves played and where they led.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board the game started from.
    start: Board,
    /// Moves in the order they were played.
    moves: Vec<Action>,
    /// Final board.
    final_board: Board,
    /// Winner on the final board.
    outcome: Outcome,
    /// Utility of the final board.
    utility: Utility,
}

impl std::fmt::Display for GameRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let moves: Vec<String> = self.moves.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{} -> {} (utility {})",
            moves.join(" "),
            self.outcome,
            self.utility
        )
    }
}

/// Plays a full game from the empty board.
///
/// # Errors
///
/// Propagates [`InvalidActionError`] from [`result`]; optimal play never
/// produces one.
#[instrument(skip(rng))]
pub fn play_game<R: Rng + ?Sized>(rng: &mut R) -> Result<GameRecord, InvalidActionError> {
    play_out(&initial_state(), rng)
}

/// Plays `board` out to the end with minimax choosing for both sides.
///
/// # Errors
///
/// Propagates [`InvalidActionError`] from [`result`].
#[instrument(skip(board, rng))]
pub fn play_out<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<GameRecord, InvalidActionError> {
    let mut current = *board;
    let mut moves = Vec::new();

    while !terminal(&current) {
        let to_move = player(&current);
        let Some(action) = minimax_with_rng(&current, rng) else {
            break;
        };
        debug!(player = %to_move, %action, "Playing move");
        current = result(&current, action)?;
        moves.push(action);
    }

    let record = GameRecord {
        start: *board,
        moves,
        final_board: current,
        outcome: winner(&current),
        utility: utility(&current),
    };
    info!(moves = record.moves.len(), outcome = %record.outcome, "Game finished");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_terminal_start_plays_no_moves() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let record = play_out(&board, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(record.moves().is_empty());
        assert_eq!(*record.utility(), 1);
        assert_eq!(record.final_board(), &board);
    }

    #[test]
    fn test_winning_position_converts() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let record = play_out(&board, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(record.moves(), &vec![Action::new(0, 2)]);
        assert_eq!(*record.utility(), 1);
    }
}
